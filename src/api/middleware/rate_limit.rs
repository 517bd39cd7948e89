//! Per-client rate limiting for the shortening endpoint.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Sustained shorten requests per second per client.
const REQUESTS_PER_SECOND: u64 = 2;

/// Requests a client may send in a burst before being throttled.
const BURST_SIZE: u32 = 30;

/// Creates the rate limiter applied to `POST /api`.
///
/// Shortening is the only write path and is serialized by the engine, so a
/// single client must not be able to monopolize it. Requests over the limit
/// receive `429 Too Many Requests`.
///
/// Clients are keyed by socket peer address, so the server must be started
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(REQUESTS_PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit constants are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
