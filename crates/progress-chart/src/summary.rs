// File: crates/progress-chart/src/summary.rs
// Summary: Time-range windows over a series and the headline numbers shown beside the chart.

use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};

use crate::series::Series;

/// Look-back window offered by the range picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    Month,
    #[default]
    Quarter,
    HalfYear,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [TimeRange::Month, TimeRange::Quarter, TimeRange::HalfYear, TimeRange::Year];

    pub fn months(self) -> u32 {
        match self {
            TimeRange::Month => 1,
            TimeRange::Quarter => 3,
            TimeRange::HalfYear => 6,
            TimeRange::Year => 12,
        }
    }

    /// First day inside the window ending at `today`. Month ends clamp,
    /// so Mar 31 minus one month is Feb 28/29.
    pub fn cutoff(self, today: NaiveDate) -> NaiveDate {
        today.checked_sub_months(Months::new(self.months())).unwrap_or(NaiveDate::MIN)
    }

    /// The points of `series` that fall inside the window ending at `today`.
    pub fn filter(self, series: &Series, today: NaiveDate) -> Series {
        series.since(self.cutoff(today))
    }

    pub fn code(self) -> &'static str {
        match self {
            TimeRange::Month => "1m",
            TimeRange::Quarter => "3m",
            TimeRange::HalfYear => "6m",
            TimeRange::Year => "1y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Month => "Last Month",
            TimeRange::Quarter => "Last 3 Months",
            TimeRange::HalfYear => "Last 6 Months",
            TimeRange::Year => "Last Year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown time range `{s}` (expected 1m, 3m, 6m or 1y)"))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Milestone {
    pub date: NaiveDate,
    pub score: f64,
    pub note: String,
}

/// Headline figures for a (usually range-filtered) series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressSummary {
    /// Score of the last point.
    pub latest: Option<f64>,
    /// `|last - first|`; 0 with fewer than two points.
    pub change: f64,
    /// Last score strictly above the first.
    pub improvement: bool,
    pub count: usize,
    pub milestones: Vec<Milestone>,
}

impl ProgressSummary {
    pub fn of(series: &Series) -> Self {
        let milestones = series
            .points
            .iter()
            .filter_map(|p| p.note.as_ref().map(|note| Milestone { date: p.date, score: p.score, note: note.clone() }))
            .collect();
        let latest = series.points.last().map(|p| p.score);

        let (change, improvement) = match (series.points.first(), series.points.last()) {
            (Some(first), Some(last)) if series.is_renderable() => {
                let delta = last.score - first.score;
                (delta.abs(), delta > 0.0)
            }
            _ => (0.0, false),
        };

        Self { latest, change, improvement, count: series.len(), milestones }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::ScorePoint;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(rows: &[((i32, u32, u32), f64, Option<&str>)]) -> Series {
        rows.iter()
            .map(|&((y, m, d), s, note)| {
                let p = ScorePoint::try_new(day(y, m, d), s).unwrap();
                match note {
                    Some(n) => p.with_note(n),
                    None => p,
                }
            })
            .collect()
    }

    #[test]
    fn cutoff_steps_back_whole_months() {
        let today = day(2024, 1, 1);
        assert_eq!(TimeRange::Month.cutoff(today), day(2023, 12, 1));
        assert_eq!(TimeRange::Quarter.cutoff(today), day(2023, 10, 1));
        assert_eq!(TimeRange::HalfYear.cutoff(today), day(2023, 7, 1));
        assert_eq!(TimeRange::Year.cutoff(today), day(2023, 1, 1));
        assert_eq!(TimeRange::Month.cutoff(day(2024, 3, 31)), day(2024, 2, 29));
    }

    #[test]
    fn filter_keeps_points_inside_window() {
        let s = series(&[((2023, 9, 20), 65.0, None), ((2023, 10, 1), 68.0, None), ((2024, 1, 1), 88.0, None)]);
        let quarter = TimeRange::Quarter.filter(&s, day(2024, 1, 1));
        assert_eq!(quarter.len(), 2);
        assert_eq!(quarter.points[0].date, day(2023, 10, 1));
        assert!(TimeRange::Month.filter(&s, day(2025, 6, 1)).is_empty());
    }

    #[test]
    fn codes_parse_back() {
        for r in TimeRange::ALL {
            assert_eq!(r.to_string().parse::<TimeRange>(), Ok(r));
        }
        assert_eq!(" 1Y ".parse::<TimeRange>(), Ok(TimeRange::Year));
        assert!("2w".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::default(), TimeRange::Quarter);
    }

    #[test]
    fn summary_of_rising_series() {
        let s = series(&[
            ((2023, 9, 20), 65.0, Some("Started new routine")),
            ((2023, 10, 1), 68.0, None),
            ((2023, 10, 15), 72.0, Some("Added hydrating serum")),
        ]);
        let sum = ProgressSummary::of(&s);
        assert_eq!(sum.latest, Some(72.0));
        assert_eq!(sum.change, 7.0);
        assert!(sum.improvement);
        assert_eq!(sum.count, 3);
        let notes = sum.milestones.iter().map(|m| m.note.as_str()).collect::<Vec<_>>();
        assert_eq!(notes, ["Started new routine", "Added hydrating serum"]);
    }

    #[test]
    fn decline_reports_magnitude_without_improvement() {
        let sum = ProgressSummary::of(&series(&[((2023, 9, 20), 80.0, None), ((2023, 10, 1), 74.5, None)]));
        assert_eq!(sum.change, 5.5);
        assert!(!sum.improvement);
    }

    #[test]
    fn fewer_than_two_points_have_no_change() {
        let one = ProgressSummary::of(&series(&[((2023, 9, 20), 65.0, Some("Started new routine"))]));
        assert_eq!((one.change, one.improvement, one.count), (0.0, false, 1));
        assert_eq!(one.latest, Some(65.0));
        assert_eq!(one.milestones.len(), 1);

        let none = ProgressSummary::of(&Series::new());
        assert_eq!(none, ProgressSummary::default());
    }
}
