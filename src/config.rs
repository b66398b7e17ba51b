// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    session_cookie_name: String,
    session_cookie_secure: bool,
    allowed_origins: Vec<String>,
    mail_from: String,
    notification_queue_capacity: usize,
    login_rate_limit_per_minute: u32,
    owner: Option<OwnerBootstrap>,
}

/// First owner account, created only while the user table is empty.
#[derive(Clone)]
pub struct OwnerBootstrap {
    pub full_name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for OwnerBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerBootstrap")
            .field("full_name", &self.full_name)
            .field("cpf", &self.cpf)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_SECS: u64 = 6 * 60 * 60;
const DEFAULT_SESSION_COOKIE: &str = "fastfeet_session";
const DEFAULT_MAIL_FROM: &str = "FastFeet <noreply@fastfeet.local>";
const DEFAULT_QUEUE_CAPACITY: usize = 1024;
const DEFAULT_LOGIN_RATE_LIMIT: u32 = 10;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value"))),
        _ => Ok(default),
    }
}

fn parse_flag(key: &'static str, default: bool) -> bool {
    env::var(key).map_or(default, |v| {
        matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
    })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn owner_from_env() -> Result<Option<OwnerBootstrap>, ConfigError> {
    let vars = ["OWNER_NAME", "OWNER_CPF", "OWNER_EMAIL", "OWNER_PASSWORD"].map(|k| env::var(k).ok());
    match vars {
        [None, None, None, None] => Ok(None),
        [Some(full_name), Some(cpf), Some(email), Some(password)] => Ok(Some(OwnerBootstrap {
            full_name,
            cpf,
            email,
            password,
        })),
        _ => Err(ConfigError::Invalid(
            "OWNER_NAME, OWNER_CPF, OWNER_EMAIL and OWNER_PASSWORD must be set together".into(),
        )),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let listen_addr = env::var("APP_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into());
        let biscuit_private_key = env::var("BISCUIT_ROOT_PRIVATE_KEY")
            .map_err(|_| ConfigError::Missing("BISCUIT_ROOT_PRIVATE_KEY"))?;

        if biscuit_private_key.len() != 64 {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs = parse_var("TOKEN_TTL_SECONDS", DEFAULT_TOKEN_TTL_SECS)?;
        if token_ttl_secs == 0 {
            return Err(ConfigError::Invalid("TOKEN_TTL_SECONDS must be positive".into()));
        }

        let allowed_origins = env::var("APP_ALLOWED_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.into()),
            session_cookie_secure: parse_flag("SESSION_COOKIE_SECURE", false),
            allowed_origins,
            mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.into()),
            notification_queue_capacity: parse_var(
                "NOTIFICATION_QUEUE_CAPACITY",
                DEFAULT_QUEUE_CAPACITY,
            )?,
            login_rate_limit_per_minute: parse_var(
                "LOGIN_RATE_LIMIT_PER_MINUTE",
                DEFAULT_LOGIN_RATE_LIMIT,
            )?,
            owner: owner_from_env()?,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }

    pub const fn session_cookie_secure(&self) -> bool {
        self.session_cookie_secure
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn mail_from(&self) -> &str {
        &self.mail_from
    }

    pub const fn notification_queue_capacity(&self) -> usize {
        self.notification_queue_capacity
    }

    /// Zero disables the login rate limiter.
    pub const fn login_rate_limit_per_minute(&self) -> u32 {
        self.login_rate_limit_per_minute
    }

    pub const fn owner(&self) -> Option<&OwnerBootstrap> {
        self.owner.as_ref()
    }
}
