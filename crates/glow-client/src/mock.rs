// File: crates/glow-client/src/mock.rs
// Summary: Offline data for the dashboard, chart and recommendation screens.

use chrono::NaiveDate;
use progress_chart::{ScorePoint, Series};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::models::{Recommendation, RecommendationKind, SkinMetric, User};

/// Metric names with the score range each one is drawn from.
pub const METRIC_RANGES: [(&str, RangeInclusive<u8>); 4] = [
    ("Hydration", 65..=90),
    ("Texture", 50..=85),
    ("Brightness", 60..=88),
    ("Pore Size", 40..=75),
];

/// Where the screens get their display entities from.
pub trait DataSource {
    fn progress_series(&self) -> Series;
    fn recommendations(&self) -> Vec<Recommendation>;
    /// Recommendations of one kind; `None` means all of them.
    fn recommendations_of(&self, kind: Option<RecommendationKind>) -> Vec<Recommendation> {
        let all = self.recommendations();
        match kind {
            Some(kind) => all.into_iter().filter(|r| r.kind == kind).collect(),
            None => all,
        }
    }
    /// Fresh metric scores; successive calls may differ.
    fn skin_metrics(&mut self) -> Vec<SkinMetric>;
    fn user(&self) -> User;
}

/// Canned data with metrics drawn from a seeded generator.
#[derive(Debug, Clone)]
pub struct Fixtures {
    rng: StdRng,
}

impl Fixtures {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::seeded(0x6107)
    }
}

const PROGRESS: [((i32, u32, u32), f64, Option<&str>); 8] = [
    ((2023, 9, 20), 65.0, Some("Started new routine")),
    ((2023, 10, 1), 68.0, None),
    ((2023, 10, 15), 72.0, Some("Added hydrating serum")),
    ((2023, 11, 1), 75.0, None),
    ((2023, 11, 15), 79.0, Some("Consistent with SPF")),
    ((2023, 12, 1), 82.0, None),
    ((2023, 12, 15), 85.0, Some("Added vitamin C")),
    ((2024, 1, 1), 88.0, None),
];

const RECOMMENDATIONS: [(RecommendationKind, &str, &str); 4] = [
    (
        RecommendationKind::Product,
        "Hydrating Serum",
        "A lightweight hyaluronic acid serum that deeply hydrates the skin.",
    ),
    (
        RecommendationKind::Product,
        "Gentle Cleanser",
        "Non-stripping cleanser suitable for daily use on sensitive skin.",
    ),
    (
        RecommendationKind::Routine,
        "Evening Routine",
        "A calming evening routine to repair and hydrate your skin overnight.",
    ),
    (
        RecommendationKind::Tip,
        "Hydration Boost",
        "Try using a humidifier at night to prevent dry skin, especially during winter months.",
    ),
];

impl DataSource for Fixtures {
    fn progress_series(&self) -> Series {
        PROGRESS
            .iter()
            .filter_map(|&((y, m, d), score, note)| {
                let point = ScorePoint::try_new(NaiveDate::from_ymd_opt(y, m, d)?, score).ok()?;
                Some(match note {
                    Some(n) => point.with_note(n),
                    None => point,
                })
            })
            .collect()
    }

    fn recommendations(&self) -> Vec<Recommendation> {
        RECOMMENDATIONS
            .iter()
            .enumerate()
            .map(|(i, &(kind, title, description))| Recommendation {
                id: (i + 1).to_string(),
                kind,
                title: title.to_string(),
                description: description.to_string(),
                image_url: None,
                link_url: None,
            })
            .collect()
    }

    fn skin_metrics(&mut self) -> Vec<SkinMetric> {
        METRIC_RANGES
            .iter()
            .map(|(name, range)| SkinMetric { name: name.to_string(), score: self.rng.random_range(range.clone()) })
            .collect()
    }

    fn user(&self) -> User {
        User {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            avatar_url: None,
            skin_type: Some("Combination".to_string()),
            skin_concerns: vec!["Acne".into(), "Dark spots".into(), "Fine lines".into()],
            joined_at: NaiveDate::from_ymd_opt(2023, 9, 15).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_series_has_four_milestones() {
        let s = Fixtures::default().progress_series();
        assert_eq!(s.len(), 8);
        assert_eq!(s.annotated_count(), 4);
        assert_eq!(s.score_extent(), Some((65.0, 88.0)));
    }

    #[test]
    fn metrics_stay_in_their_ranges() {
        let mut f = Fixtures::seeded(7);
        for _ in 0..200 {
            let metrics = f.skin_metrics();
            assert_eq!(metrics.len(), 4);
            for (m, (name, range)) in metrics.iter().zip(METRIC_RANGES.iter()) {
                assert_eq!(m.name, *name);
                assert!(range.contains(&m.score), "{} = {}", m.name, m.score);
            }
        }
    }

    #[test]
    fn same_seed_same_metrics() {
        let a = Fixtures::seeded(42).skin_metrics();
        let b = Fixtures::seeded(42).skin_metrics();
        assert_eq!(a, b);
    }

    #[test]
    fn recommendations_filter_by_kind() {
        let f = Fixtures::default();
        assert_eq!(f.recommendations_of(None), f.recommendations());
        let products = f.recommendations_of(Some(RecommendationKind::Product));
        let titles = products.iter().map(|r| r.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["Hydrating Serum", "Gentle Cleanser"]);
        let tips = f.recommendations_of(Some(RecommendationKind::Tip));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].title, "Hydration Boost");
    }

    #[test]
    fn recommendations_cover_every_kind() {
        let recs = Fixtures::default().recommendations();
        for kind in [RecommendationKind::Product, RecommendationKind::Routine, RecommendationKind::Tip] {
            assert!(recs.iter().any(|r| r.kind == kind));
        }
    }
}
