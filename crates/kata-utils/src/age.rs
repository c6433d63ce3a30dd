//! Age calculation
//!
//! Ages are whole years. A birthday that has not yet occurred this year
//! does not count; a 29 February birthday is reached on 1 March in
//! non-leap years.

use crate::error::{UtilError, UtilResult};
use chrono::{Datelike, Local, NaiveDate};

/// Accepted birth date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` birth date
///
/// # Errors
/// [`UtilError::Parse`] when the text is not a valid calendar date.
pub fn parse_birth_date(text: &str) -> UtilResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| UtilError::parse(format!("invalid date '{text}': {e}; expected YYYY-MM-DD")))
}

/// Age in whole years on `today`
///
/// # Errors
/// [`UtilError::InvalidInput`] when `birth` is after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> UtilResult<u32> {
    if birth > today {
        return Err(UtilError::InvalidInput(format!(
            "birth date {birth} is after {today}"
        )));
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    // birth <= today keeps this non-negative
    Ok(years.unsigned_abs())
}

/// Age in whole years as of the local current date
///
/// # Errors
/// See [`age_on`].
pub fn calculate_age(birth: NaiveDate) -> UtilResult<u32> {
    let today = Local::now().date_naive();
    let age = age_on(birth, today)?;
    tracing::debug!(%birth, %today, age, "calculated age");
    Ok(age)
}

/// [`calculate_age`] over a `YYYY-MM-DD` string
///
/// # Errors
/// [`UtilError::Parse`] for malformed dates, otherwise see [`age_on`].
pub fn calculate_age_str(text: &str) -> UtilResult<u32> {
    calculate_age(parse_birth_date(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_passed() {
        assert_eq!(age_on(date(1990, 3, 10), date(2024, 6, 1)), Ok(34));
    }

    #[test]
    fn birthday_today() {
        assert_eq!(age_on(date(1990, 6, 1), date(2024, 6, 1)), Ok(34));
    }

    #[test]
    fn birthday_tomorrow_decrements() {
        assert_eq!(age_on(date(1990, 6, 2), date(2024, 6, 1)), Ok(33));
        assert_eq!(age_on(date(1990, 12, 31), date(2024, 1, 1)), Ok(33));
    }

    #[test]
    fn born_today_is_zero() {
        assert_eq!(age_on(date(2024, 6, 1), date(2024, 6, 1)), Ok(0));
    }

    #[test]
    fn leap_day_birthday() {
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 2, 28)), Ok(22));
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 3, 1)), Ok(23));
        assert_eq!(age_on(date(2000, 2, 29), date(2024, 2, 29)), Ok(24));
    }

    #[test]
    fn future_birth_rejected() {
        assert!(matches!(
            age_on(date(2030, 1, 1), date(2024, 1, 1)),
            Err(UtilError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_dates() {
        assert_eq!(parse_birth_date("1990-06-02"), Ok(date(1990, 6, 2)));
        assert_eq!(parse_birth_date(" 2000-02-29 "), Ok(date(2000, 2, 29)));
        assert!(matches!(parse_birth_date("2001-02-29"), Err(UtilError::Parse { .. })));
        assert!(parse_birth_date("06/02/1990").is_err());
    }

    #[test]
    fn calculate_age_uses_current_date() {
        let today = Local::now().date_naive();
        let birth = date(today.year() - 30, 1, 1);
        assert_eq!(calculate_age(birth), Ok(30));
        assert_eq!(calculate_age_str(&birth.format(DATE_FORMAT).to_string()), Ok(30));
    }
}
