// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter for the public intake endpoints. Clients are keyed by
/// forwarding headers first and the peer address otherwise, so the server
/// must be started with connect info.
///
/// Returns `None` when the quota is unusable (zero burst).
pub fn rate_limit_layer(per_second: u64, burst: u32) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(replenish_interval_ms(per_second));
    builder.burst_size(burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}

fn replenish_interval_ms(per_second: u64) -> u64 {
    (1000 / per_second.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_follows_requested_rate() {
        assert_eq!(replenish_interval_ms(2), 500);
        assert_eq!(replenish_interval_ms(1), 1000);
        assert_eq!(replenish_interval_ms(0), 1000);
        assert_eq!(replenish_interval_ms(5000), 1);
    }

    #[test]
    fn zero_burst_is_rejected() {
        assert!(rate_limit_layer(2, 0).is_none());
        assert!(rate_limit_layer(2, 10).is_some());
    }
}
