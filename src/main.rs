use anyhow::Result;
use fastfeet_api::application::{
    commands::users::BootstrapOwnerCommand,
    ports::{
        media::ImageValidator,
        notification::{NotificationDispatcher, Notifier},
        security::{PasswordHasher, TokenManager},
        time::Clock,
        tracking::TrackingCodeGenerator,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use fastfeet_api::config::AppConfig;
use fastfeet_api::domain::{
    order::OrderRepository, recipient::RecipientRepository, user::UserRepository,
};
use fastfeet_api::infrastructure::{
    database,
    media::DecodingImageValidator,
    notification::{EmailNotifier, LogMailTransport, QueuedNotificationDispatcher},
    repositories::{
        PostgresOrderRepository, PostgresRecipientRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    system::{SystemClock, UuidTrackingCodeGenerator},
};
use fastfeet_api::presentation::http::{
    routes::{RouterOptions, build_router},
    state::{HttpState, SessionCookieConfig},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let recipient_repo: Arc<dyn RecipientRepository> =
        Arc::new(PostgresRecipientRepository::new(pool.clone()));
    let order_repo: Arc<dyn OrderRepository> = Arc::new(PostgresOrderRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tracking_codes: Arc<dyn TrackingCodeGenerator> = Arc::new(UuidTrackingCodeGenerator);
    let image_validator: Arc<dyn ImageValidator> = Arc::new(DecodingImageValidator);

    let notifier: Arc<dyn Notifier> = Arc::new(EmailNotifier::new(
        config.mail_from(),
        Arc::new(LogMailTransport),
        Arc::clone(&clock),
    ));
    let notifications: Arc<dyn NotificationDispatcher> = Arc::new(
        QueuedNotificationDispatcher::spawn(notifier, config.notification_queue_capacity()),
    );

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo,
        recipient_repo,
        order_repo,
        password_hasher,
        token_manager,
        image_validator,
        notifications,
        tracking_codes,
        clock,
    }));

    if let Some(owner) = config.owner() {
        let created = services
            .user_commands
            .bootstrap_owner(BootstrapOwnerCommand {
                full_name: owner.full_name.clone(),
                cpf: owner.cpf.clone(),
                email: owner.email.clone(),
                password: owner.password.clone(),
            })
            .await?;
        if created.is_none() {
            tracing::debug!("users already exist; owner bootstrap skipped");
        }
    }

    let state = HttpState::new(
        services,
        SessionCookieConfig {
            name: config.session_cookie_name().to_string(),
            secure: config.session_cookie_secure(),
        },
    );
    let app = build_router(
        state,
        &RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            login_rate_limit_per_minute: config.login_rate_limit_per_minute(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
