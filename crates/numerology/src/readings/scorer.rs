use super::domain::ReadingError;
use chrono::{Datelike, NaiveDate};

/// Intermediate arithmetic of a reading, kept so callers can surface
/// how a score was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub score: u8,
    pub base_score: u8,
    pub time_influence: u8,
    pub life_number: u8,
    pub name_number: u8,
}

/// Digit reduction shared by both numerology sums: residue mod 9 with
/// 0 coerced to 9. Euclidean remainder keeps pre-epoch years from
/// producing a negative residue.
fn reduce_to_digit(sum: i64) -> u8 {
    match sum.rem_euclid(9) {
        0 => 9,
        digit => digit as u8,
    }
}

pub fn life_number(birthdate: NaiveDate) -> u8 {
    let sum = i64::from(birthdate.year())
        + i64::from(birthdate.month())
        + i64::from(birthdate.day());
    reduce_to_digit(sum)
}

/// Sums the name's UTF-16 code units, not scalar values, so characters
/// outside the BMP count once per surrogate half.
pub fn name_number(name: &str) -> u8 {
    let sum: i64 = name.encode_utf16().map(i64::from).sum();
    reduce_to_digit(sum)
}

pub fn compute_score(
    name: &str,
    birthdate: NaiveDate,
    today: NaiveDate,
) -> Result<ScoreBreakdown, ReadingError> {
    if name.trim().is_empty() {
        return Err(ReadingError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }

    let life_number = life_number(birthdate);
    let name_number = name_number(name);

    let base_score =
        ((u16::from(life_number) * 11 + u16::from(name_number) * 7) % 20) as u8 + 60;
    let time_influence =
        ((today.year().rem_euclid(10) as u32 + today.month() + today.day()) % 20) as u8;

    Ok(ScoreBreakdown {
        score: base_score + time_influence,
        base_score,
        time_influence,
        life_number,
        name_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn life_number_reduces_the_date_sum() {
        // 2000 + 1 + 15 = 2016, a multiple of 9, so the zero residue
        // coerces to 9.
        assert_eq!(life_number(date(2000, 1, 15)), 9);
        // 1999 + 12 + 31 = 2042 -> residue 8.
        assert_eq!(life_number(date(1999, 12, 31)), 8);
    }

    #[test]
    fn name_number_sums_utf16_code_units() {
        // "Alice" sums to 478 -> residue 1.
        assert_eq!(name_number("Alice"), 1);
        // "Bob" sums to 275 -> residue 5.
        assert_eq!(name_number("Bob"), 5);
        // "王伟" sums to 29579 + 20255 = 49834 -> residue 1.
        assert_eq!(name_number("王伟"), 1);
    }

    #[test]
    fn empty_and_whitespace_names_are_rejected() {
        let birthdate = date(2000, 1, 15);
        let today = date(2024, 6, 10);
        assert!(matches!(
            compute_score("", birthdate, today),
            Err(ReadingError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_score("   ", birthdate, today),
            Err(ReadingError::InvalidInput(_))
        ));
    }

    #[test]
    fn worked_example_produces_the_documented_breakdown() {
        let breakdown = compute_score("Alice", date(2000, 1, 15), date(2024, 6, 10))
            .expect("score computes");

        assert_eq!(breakdown.life_number, 9);
        assert_eq!(breakdown.name_number, 1);
        // base = ((9*11 + 1*7) % 20) + 60 = (106 % 20) + 60 = 66
        assert_eq!(breakdown.base_score, 66);
        // influence = ((2024 % 10) + 6 + 10) % 20 = 20 % 20 = 0
        assert_eq!(breakdown.time_influence, 0);
        assert_eq!(breakdown.score, 66);
    }

    #[test]
    fn digits_and_scores_stay_in_range_across_a_year_of_birthdates() {
        let today = date(2025, 3, 7);
        let mut birthdate = date(1984, 1, 1);
        let end = date(1985, 1, 1);

        while birthdate < end {
            let breakdown =
                compute_score("Grace Hopper", birthdate, today).expect("score computes");
            assert!((1..=9).contains(&breakdown.life_number));
            assert!((1..=9).contains(&breakdown.name_number));
            assert!((60..=79).contains(&breakdown.base_score));
            assert!(breakdown.time_influence <= 19);
            assert!((60..=98).contains(&breakdown.score));
            birthdate = birthdate.succ_opt().expect("next day exists");
        }
    }
}
