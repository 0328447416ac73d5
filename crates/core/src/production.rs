//! Per-artist production aggregation (PRD-32).
//!
//! Groups works by artist display name and accumulates counts, gross
//! totals, and studio contributions for the team breakdown panel.

use std::collections::HashMap;

use serde::Serialize;

use crate::commission::studio_share;
use crate::records::WorkSale;

/// Grouping label for works whose artist reference does not resolve.
pub const UNASSIGNED_ARTIST_LABEL: &str = "Unassigned";

/// One artist's accumulated production figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistProduction {
    pub artist_name: String,
    /// Number of works, canvas and zero-price works included.
    pub count: u32,
    /// Sum of gross prices ("total produced").
    pub total: f64,
    /// Sum of studio cuts; zero for canvas works.
    pub studio_contribution: f64,
}

/// Group works by artist display name, preserving first-occurrence order.
///
/// Works without a resolvable artist land under
/// [`UNASSIGNED_ARTIST_LABEL`]. The output is NOT sorted; callers that
/// need a ranking sort explicitly.
pub fn aggregate_by_artist(works: &[WorkSale]) -> Vec<ArtistProduction> {
    let mut groups: Vec<ArtistProduction> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for work in works {
        let name = work
            .artist_name
            .as_deref()
            .unwrap_or(UNASSIGNED_ARTIST_LABEL);

        let slot = match index.get(name) {
            Some(&i) => i,
            None => {
                groups.push(ArtistProduction {
                    artist_name: name.to_string(),
                    count: 0,
                    total: 0.0,
                    studio_contribution: 0.0,
                });
                index.insert(name.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };

        let entry = &mut groups[slot];
        entry.count += 1;
        entry.total += work.total_price;
        entry.studio_contribution += studio_share(work);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn work(artist: Option<&str>, price: f64, commission: Option<f64>, is_canvas: bool) -> WorkSale {
        WorkSale {
            artist_name: artist.map(|s| s.to_string()),
            client_name: "Cliente".to_string(),
            total_price: price,
            commission_snapshot: commission,
            artist_commission: None,
            is_canvas,
            created_at: Utc::now(),
        }
    }

    // -- grouping --

    #[test]
    fn groups_accumulate_count_total_and_contribution() {
        let works = vec![
            work(Some("Vale"), 100_000.0, Some(50.0), false),
            work(Some("Vale"), 60_000.0, Some(50.0), false),
        ];
        let result = aggregate_by_artist(&works);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].artist_name, "Vale");
        assert_eq!(result[0].count, 2);
        assert!((result[0].total - 160_000.0).abs() < 1e-9);
        assert!((result[0].studio_contribution - 80_000.0).abs() < 1e-9);
    }

    #[test]
    fn missing_artist_falls_back_to_unassigned() {
        let works = vec![work(None, 45_000.0, None, false)];
        let result = aggregate_by_artist(&works);

        assert_eq!(result[0].artist_name, UNASSIGNED_ARTIST_LABEL);
        // Default 50% commission applies when nothing else is known.
        assert!((result[0].studio_contribution - 22_500.0).abs() < 1e-9);
    }

    #[test]
    fn output_preserves_first_occurrence_order() {
        let works = vec![
            work(Some("Vale"), 10_000.0, Some(50.0), false),
            work(Some("Nico"), 20_000.0, Some(50.0), false),
            work(Some("Vale"), 30_000.0, Some(50.0), false),
            work(None, 5_000.0, None, false),
        ];
        let result = aggregate_by_artist(&works);

        let names: Vec<&str> = result.iter().map(|p| p.artist_name.as_str()).collect();
        assert_eq!(names, vec!["Vale", "Nico", UNASSIGNED_ARTIST_LABEL]);
    }

    #[test]
    fn reordering_input_changes_order_but_not_totals() {
        let mut works = vec![
            work(Some("Vale"), 10_000.0, Some(50.0), false),
            work(Some("Nico"), 20_000.0, Some(60.0), false),
            work(Some("Vale"), 30_000.0, Some(40.0), false),
        ];
        let forward = aggregate_by_artist(&works);
        works.reverse();
        let reversed = aggregate_by_artist(&works);

        for name in ["Vale", "Nico"] {
            let f = forward.iter().find(|p| p.artist_name == name).unwrap();
            let r = reversed.iter().find(|p| p.artist_name == name).unwrap();
            assert_eq!(f.count, r.count);
            assert!((f.total - r.total).abs() < 1e-9);
            assert!((f.studio_contribution - r.studio_contribution).abs() < 1e-9);
        }
    }

    // -- canvas handling --

    #[test]
    fn canvas_work_counts_fully_but_contributes_nothing() {
        let works = vec![
            work(Some("Vale"), 80_000.0, Some(50.0), true),
            work(Some("Vale"), 100_000.0, Some(50.0), false),
        ];
        let result = aggregate_by_artist(&works);

        assert_eq!(result[0].count, 2);
        assert!((result[0].total - 180_000.0).abs() < 1e-9);
        assert!((result[0].studio_contribution - 50_000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_price_canvas_still_increments_count() {
        let works = vec![work(Some("Vale"), 0.0, None, true)];
        let result = aggregate_by_artist(&works);

        assert_eq!(result[0].count, 1);
        assert!((result[0].total - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate_by_artist(&[]).is_empty());
    }
}
