// File: crates/progress-chart/src/series.rs
// Summary: Score series model (dated observations with optional milestone notes) and CSV loading.
// Notes:
// - Points are kept in caller order; the renderer never sorts.
// - `ScorePoint::try_new` enforces the 0..=100 score contract. The fields stay public,
//   so rendering code must not assume the contract holds.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

/// Lowest valid score.
pub const SCORE_MIN: f64 = 0.0;
/// Highest valid score.
pub const SCORE_MAX: f64 = 100.0;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("score {0} is outside 0..=100")]
    ScoreOutOfRange(f64),
    #[error("row {row}: missing column `{column}`")]
    MissingColumn { row: usize, column: &'static str },
    #[error("row {row}: invalid date `{value}`")]
    InvalidDate {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("row {row}: invalid score `{value}`")]
    InvalidScore { row: usize, value: String },
    #[error("csv header must contain `date` and `score` columns")]
    MissingHeader,
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScorePoint {
    pub date: NaiveDate,
    pub score: f64,
    pub note: Option<String>,
}

impl ScorePoint {
    /// Construct a point enforcing the score contract (finite, within 0..=100).
    pub fn try_new(date: NaiveDate, score: f64) -> Result<Self, SeriesError> {
        if !score.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&score) {
            return Err(SeriesError::ScoreOutOfRange(score));
        }
        Ok(Self { date, score, note: None })
    }

    /// Attach a milestone note. Blank notes are dropped.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    pub fn is_milestone(&self) -> bool { self.note.is_some() }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub points: Vec<ScorePoint>,
}

impl Series {
    pub fn new() -> Self { Self::default() }

    pub fn from_points(points: Vec<ScorePoint>) -> Self { Self { points } }

    pub fn push(&mut self, point: ScorePoint) { self.points.push(point); }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// A series needs at least two points to be drawn.
    pub fn is_renderable(&self) -> bool { self.points.len() >= 2 }

    pub fn annotated_count(&self) -> usize { self.points.iter().filter(|p| p.is_milestone()).count() }

    /// Linear-scan min/max of the raw scores; `None` when empty.
    pub fn score_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.score;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.score), hi.max(p.score))))
    }

    /// Points dated on or after `cutoff`, in their original order.
    pub fn since(&self, cutoff: NaiveDate) -> Series {
        self.points.iter().filter(|p| p.date >= cutoff).cloned().collect()
    }

    /// Load `date,score[,note]` rows. Header names are matched case-insensitively;
    /// dates use `YYYY-MM-DD`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SeriesError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
        let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

        let i_date = idx(&["date", "day", "timestamp"]).ok_or(SeriesError::MissingHeader)?;
        let i_score = idx(&["score", "value"]).ok_or(SeriesError::MissingHeader)?;
        let i_note = idx(&["note", "notes", "milestone"]);

        let mut series = Series::new();
        for (n, rec) in rdr.records().enumerate() {
            let rec = rec?;
            // header is line 1
            let row = n + 2;
            let raw_date = rec.get(i_date).ok_or(SeriesError::MissingColumn { row, column: "date" })?;
            let raw_score = rec.get(i_score).ok_or(SeriesError::MissingColumn { row, column: "score" })?;

            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|source| {
                SeriesError::InvalidDate { row, value: raw_date.to_string(), source }
            })?;
            let score = raw_score
                .parse::<f64>()
                .map_err(|_| SeriesError::InvalidScore { row, value: raw_score.to_string() })?;

            let mut point = ScorePoint::try_new(date, score)?;
            if let Some(note) = i_note.and_then(|i| rec.get(i)) {
                point = point.with_note(note);
            }
            series.push(point);
        }
        log::debug!("loaded {} score points ({} milestones)", series.len(), series.annotated_count());
        Ok(series)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, SeriesError> {
        let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
        Self::from_csv_reader(file)
    }
}

impl FromIterator<ScorePoint> for Series {
    fn from_iter<I: IntoIterator<Item = ScorePoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(ScorePoint::try_new(day(2023, 9, 20), 100.0).is_ok());
        assert!(matches!(ScorePoint::try_new(day(2023, 9, 20), 100.5), Err(SeriesError::ScoreOutOfRange(_))));
        assert!(ScorePoint::try_new(day(2023, 9, 20), -1.0).is_err());
        assert!(ScorePoint::try_new(day(2023, 9, 20), f64::NAN).is_err());
    }

    #[test]
    fn blank_note_is_not_a_milestone() {
        let p = ScorePoint::try_new(day(2023, 9, 20), 65.0).unwrap().with_note("   ");
        assert!(!p.is_milestone());
    }

    #[test]
    fn csv_keeps_insertion_order_and_notes() {
        let data = "Date,Score,Note\n\
                    2023-10-01,68,\n\
                    2023-09-20,65,Started new routine\n\
                    2023-10-15,72,Added hydrating serum\n";
        let s = Series::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.points[0].date, day(2023, 10, 1));
        assert_eq!(s.points[1].note.as_deref(), Some("Started new routine"));
        assert_eq!(s.annotated_count(), 2);
        assert_eq!(s.score_extent(), Some((65.0, 72.0)));
    }

    #[test]
    fn since_keeps_cutoff_day_and_order() {
        let s: Series = [(2023, 9, 20), (2023, 11, 1), (2023, 10, 15), (2024, 1, 1)]
            .iter()
            .map(|&(y, m, d)| ScorePoint::try_new(day(y, m, d), 70.0).unwrap())
            .collect();
        let recent = s.since(day(2023, 10, 15));
        let dates = recent.points.iter().map(|p| p.date).collect::<Vec<_>>();
        assert_eq!(dates, [day(2023, 11, 1), day(2023, 10, 15), day(2024, 1, 1)]);
        assert!(s.since(day(2025, 1, 1)).is_empty());
    }

    #[test]
    fn csv_without_note_column() {
        let s = Series::from_csv_reader("date,score\n2024-01-01,88\n".as_bytes()).unwrap();
        assert_eq!(s.len(), 1);
        assert!(!s.is_renderable());
    }

    #[test]
    fn csv_reports_row_of_bad_date() {
        let err = Series::from_csv_reader("date,score\n2024-01-01,88\n01/02/2024,90\n".as_bytes()).unwrap_err();
        match err {
            SeriesError::InvalidDate { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_requires_score_header() {
        let err = Series::from_csv_reader("date,points\n2024-01-01,88\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SeriesError::MissingHeader));
    }
}
