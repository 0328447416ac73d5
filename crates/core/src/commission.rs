//! Commission resolution and per-work share math (PRD-30).
//!
//! A work's commission percentage resolves through three tiers: the
//! snapshot captured when the work was recorded, then the artist's
//! current profile rate, then a studio-wide default. Shares derived from
//! it are total functions: out-of-range percentages pass through
//! uncorrected and are gated at the API boundary instead.

use crate::records::WorkSale;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Commission percentage applied when neither the work snapshot nor the
/// artist profile carries one.
pub const DEFAULT_COMMISSION_PCT: f64 = 50.0;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the commission percentage for a work.
///
/// Tier order: per-work snapshot, then artist profile rate, then
/// [`DEFAULT_COMMISSION_PCT`]. A snapshot of `0.0` is a real value and
/// wins over the later tiers.
pub fn effective_commission(snapshot: Option<f64>, profile: Option<f64>) -> f64 {
    snapshot.or(profile).unwrap_or(DEFAULT_COMMISSION_PCT)
}

// ---------------------------------------------------------------------------
// Share math
// ---------------------------------------------------------------------------

/// The artist's payout for a work.
///
/// Canvas (material-only) works pay the artist nothing regardless of
/// price or commission.
pub fn artist_share(work: &WorkSale) -> f64 {
    if work.is_canvas {
        return 0.0;
    }
    let pct = effective_commission(work.commission_snapshot, work.artist_commission);
    work.total_price * pct / 100.0
}

/// The studio's retained cut for a work.
///
/// Canvas works retain nothing either: the full price counts toward
/// gross sales but generates no split on either side.
pub fn studio_share(work: &WorkSale) -> f64 {
    if work.is_canvas {
        return 0.0;
    }
    let pct = effective_commission(work.commission_snapshot, work.artist_commission);
    work.total_price * (100.0 - pct) / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn work(price: f64, snapshot: Option<f64>, profile: Option<f64>, is_canvas: bool) -> WorkSale {
        WorkSale {
            artist_name: Some("Vale".to_string()),
            client_name: "Cliente".to_string(),
            total_price: price,
            commission_snapshot: snapshot,
            artist_commission: profile,
            is_canvas,
            created_at: Utc::now(),
        }
    }

    // -- effective_commission --

    #[test]
    fn snapshot_wins_over_profile() {
        assert!((effective_commission(Some(60.0), Some(40.0)) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn profile_used_when_no_snapshot() {
        assert!((effective_commission(None, Some(40.0)) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_used_when_neither_known() {
        assert!((effective_commission(None, None) - DEFAULT_COMMISSION_PCT).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_snapshot_is_a_real_value() {
        assert!((effective_commission(Some(0.0), Some(40.0)) - 0.0).abs() < f64::EPSILON);
    }

    // -- artist_share / studio_share --

    #[test]
    fn even_split_at_fifty_percent() {
        let w = work(100_000.0, Some(50.0), None, false);
        assert!((artist_share(&w) - 50_000.0).abs() < f64::EPSILON);
        assert!((studio_share(&w) - 50_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sixty_forty_split() {
        let w = work(100_000.0, Some(60.0), None, false);
        assert!((artist_share(&w) - 60_000.0).abs() < 1e-9);
        assert!((studio_share(&w) - 40_000.0).abs() < 1e-9);
    }

    #[test]
    fn shares_sum_to_price_when_not_canvas() {
        let w = work(87_350.0, Some(37.5), None, false);
        let total = artist_share(&w) + studio_share(&w);
        assert!((total - w.total_price).abs() < 1e-9);
    }

    #[test]
    fn canvas_zeroes_both_shares() {
        let w = work(80_000.0, Some(50.0), None, true);
        assert!((artist_share(&w) - 0.0).abs() < f64::EPSILON);
        assert!((studio_share(&w) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_price_work_has_zero_shares() {
        let w = work(0.0, Some(50.0), None, false);
        assert!((artist_share(&w) - 0.0).abs() < f64::EPSILON);
        assert!((studio_share(&w) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_commission_passes_through() {
        // Boundary validation lives in the api layer; the share math stays
        // total and reproduces whatever it is given.
        let w = work(1_000.0, Some(150.0), None, false);
        assert!((artist_share(&w) - 1_500.0).abs() < 1e-9);
        assert!((studio_share(&w) + 500.0).abs() < 1e-9);
    }
}
