// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            orders::OrderCommandService, recipients::RecipientCommandService,
            users::UserCommandService,
        },
        ports::{
            media::ImageValidator,
            notification::NotificationDispatcher,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            tracking::TrackingCodeGenerator,
        },
        queries::{
            orders::OrderQueryService, recipients::RecipientQueryService,
            users::UserQueryService,
        },
    },
    domain::{order::OrderRepository, recipient::RecipientRepository, user::UserRepository},
};

/// Every port the use cases need, wired once at startup.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub recipient_repo: Arc<dyn RecipientRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub image_validator: Arc<dyn ImageValidator>,
    pub notifications: Arc<dyn NotificationDispatcher>,
    pub tracking_codes: Arc<dyn TrackingCodeGenerator>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub order_commands: Arc<OrderCommandService>,
    pub order_queries: Arc<OrderQueryService>,
    pub recipient_commands: Arc<RecipientCommandService>,
    pub recipient_queries: Arc<RecipientQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            user_repo,
            recipient_repo,
            order_repo,
            password_hasher,
            token_manager,
            image_validator,
            notifications,
            tracking_codes,
            clock,
        } = deps;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&notifications),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let order_commands = Arc::new(OrderCommandService::new(
            Arc::clone(&order_repo),
            Arc::clone(&recipient_repo),
            Arc::clone(&user_repo),
            image_validator,
            notifications,
            tracking_codes,
            Arc::clone(&clock),
        ));
        let order_queries = Arc::new(OrderQueryService::new(
            Arc::clone(&order_repo),
            Arc::clone(&user_repo),
        ));

        let recipient_commands = Arc::new(RecipientCommandService::new(
            Arc::clone(&recipient_repo),
            Arc::clone(&user_repo),
            clock,
        ));
        let recipient_queries = Arc::new(RecipientQueryService::new(recipient_repo, user_repo));

        Self {
            user_commands,
            user_queries,
            order_commands,
            order_queries,
            recipient_commands,
            recipient_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
