//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Submissions per second replenished for each client IP.
const PER_SECOND: u64 = 1;
/// Submissions a client IP may burst before being throttled.
const BURST: u32 = 10;

/// Creates the submission rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Requires the
/// router to be served with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed by `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded` with a fallback to the peer address.
///
/// Use only behind a trusted reverse proxy.
pub fn proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(PER_SECOND)
            .burst_size(BURST)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
