// Rate limiting using tower-governor
//
// Keys on the peer address only (tower_governor's default extractor), so the
// server must be started with connect info. Forwarding headers are ignored.
// `use_headers()` adds the x-ratelimit-* headers to responses.
//
// Applied in app.rs to the toggle-like function only.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

/// Wrap `router` in a per-IP limiter allowing `per_second` requests each
/// second with a burst of twice that.
///
/// The builder takes a refill period, not a rate: one request is replenished
/// every `1000 / per_second` milliseconds (at most one per millisecond).
pub fn rate_limited<S>(router: Router<S>, per_second: u64) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let refill_ms = refill_period_ms(per_second);
    let burst = u32::try_from(per_second.saturating_mul(2)).unwrap_or(u32::MAX);

    let config = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(refill_ms)
            .burst_size(burst)
            .use_headers()
            .finish()
            .ok_or_else(|| anyhow!("rate limit must be greater than zero"))?,
    );

    Ok(router.layer(GovernorLayer { config }))
}

/// Milliseconds between refills for a rate of `per_second` requests/second.
/// Zero stays zero so the builder rejects it.
fn refill_period_ms(per_second: u64) -> u64 {
    match per_second {
        0 => 0,
        n => (1000 / n).max(1),
    }
}
