//! Estimated transaction time.
//!
//! Purely cosmetic: the number is re-rolled on every recompute and carries
//! no guarantee.

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::EstimateConfig;

/// Estimate minutes for a swap worth `usd`.
///
/// `(base + per_usd * usd) * jitter`, rounded to the nearest minute and
/// clamped to `[min_minutes, max_minutes]`.
pub fn estimate_minutes<R: Rng + ?Sized>(params: &EstimateConfig, usd: Decimal, rng: &mut R) -> u32 {
    let usd = usd.to_f64().unwrap_or(f64::MAX).max(0.0);
    let jitter = rng.gen_range(params.jitter_low..=params.jitter_high);
    let minutes = ((params.base_minutes + params.minutes_per_usd * usd) * jitter).round();

    minutes.clamp(params.min_minutes as f64, params.max_minutes as f64) as u32
}

/// Short label for the estimate, e.g. `~12 min`.
pub fn format_minutes(minutes: u32) -> String {
    format!("~{} min", minutes)
}
