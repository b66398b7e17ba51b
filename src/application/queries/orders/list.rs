use super::OrderQueryService;
use crate::{
    application::{
        authorization::authorize,
        dto::{AuthenticatedUser, OrderDto, Page},
        error::ApplicationResult,
    },
    domain::{
        authorization::{Action, Resource},
        order::OrderListScope,
        shared::PageRequest,
        user::Role,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOrdersQuery {
    pub page: PageRequest,
}

impl OrderQueryService {
    /// Deliverymen only see unclaimed orders and their own; the scope is
    /// pushed down to storage so pagination counts stay correct.
    pub async fn list_orders(
        &self,
        actor: &AuthenticatedUser,
        query: ListOrdersQuery,
    ) -> ApplicationResult<Page<OrderDto>> {
        let user = authorize(
            self.user_repo.as_ref(),
            actor,
            Action::Read,
            Resource::Deliveries,
        )
        .await?;

        let scope = match user.role {
            Role::DeliveryMan => OrderListScope::WaitingOrAssignedTo(user.id),
            Role::Owner | Role::Admin => OrderListScope::All,
        };

        let paged = self.order_repo.list_page(scope, query.page).await?;
        Ok(Page::from_paged(paged, query.page))
    }
}
