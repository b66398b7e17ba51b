// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type LoginRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter allowing `per_minute` attempts, refilled evenly over
/// the minute. Returns `None` when `per_minute` is zero.
pub fn login_rate_limit_layer(per_minute: u32) -> Option<LoginRateLimitLayer> {
    if per_minute == 0 {
        return None;
    }

    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(60_000 / u64::from(per_minute));
    builder.burst_size(per_minute);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish();

    if config.is_none() {
        tracing::warn!(per_minute, "invalid login rate limit; limiter disabled");
    }
    config.map(GovernorLayer::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_the_limiter() {
        assert!(login_rate_limit_layer(0).is_none());
        assert!(login_rate_limit_layer(10).is_some());
    }
}
