pub mod domain;
mod reporter;
mod scorer;
pub mod views;

pub use reporter::FortuneReading;
pub use scorer::{compute_score, ScoreBreakdown};

use chrono::NaiveDate;
use self::domain::ReadingError;

/// Computes a complete fortune reading for one person.
///
/// `today` is always supplied by the caller; the library never reads
/// the wall clock, so a frozen date yields an identical reading on
/// every call.
pub fn calculate_fortune(
    name: &str,
    birthdate: NaiveDate,
    today: NaiveDate,
) -> Result<FortuneReading, ReadingError> {
    let breakdown = scorer::compute_score(name, birthdate, today)?;
    reporter::build_reading(&breakdown)
}
