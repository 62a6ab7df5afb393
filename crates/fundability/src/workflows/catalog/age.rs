use super::parser::RawDatePart;
use chrono::NaiveDate;

/// Whole years between the first day of the origination month and `as_of`.
///
/// Returns `None` when the origination date cannot be constructed. Originations after `as_of`
/// count as zero years.
pub fn account_age_years(as_of: NaiveDate, year: i32, month: u32) -> Option<u32> {
    let origination = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(as_of.years_since(origination).unwrap_or(0))
}

pub(crate) fn parse_year(part: &RawDatePart) -> Option<i32> {
    i32::try_from(whole_number(part)?).ok()
}

pub(crate) fn parse_month(part: &RawDatePart) -> Option<u32> {
    let month = u32::try_from(whole_number(part)?).ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// Integral value of a date part. `2008.0` and `"2008"` qualify, `2008.5` does not.
fn whole_number(part: &RawDatePart) -> Option<i64> {
    match part {
        RawDatePart::Number(value) => Some(*value),
        RawDatePart::Decimal(value) => integral(*value),
        RawDatePart::Text(value) => {
            let trimmed = value.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64)
        .then_some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn same_year_origination_is_zero_years_old() {
        assert_eq!(account_age_years(date(2024, 12, 31), 2024, 1), Some(0));
    }

    #[test]
    fn anniversary_counts_on_the_first_of_the_month() {
        assert_eq!(account_age_years(date(2024, 3, 1), 2014, 3), Some(10));
        assert_eq!(account_age_years(date(2024, 2, 29), 2014, 3), Some(9));
    }

    #[test]
    fn rejects_dates_chrono_cannot_represent() {
        assert_eq!(account_age_years(date(2024, 1, 1), i32::MAX, 1), None);
    }

    #[test]
    fn month_parsing_enforces_calendar_range() {
        assert_eq!(parse_month(&RawDatePart::Number(12)), Some(12));
        assert_eq!(parse_month(&RawDatePart::Number(0)), None);
        assert_eq!(parse_month(&RawDatePart::Text("07".to_string())), Some(7));
        assert_eq!(parse_month(&RawDatePart::Text("July".to_string())), None);
    }

    #[test]
    fn year_parsing_accepts_numbers_and_digit_strings() {
        assert_eq!(parse_year(&RawDatePart::Number(1999)), Some(1999));
        assert_eq!(parse_year(&RawDatePart::Text("2001".to_string())), Some(2001));
        assert_eq!(parse_year(&RawDatePart::Text("MMI".to_string())), None);
    }

    #[test]
    fn integral_decimals_parse_and_fractions_do_not() {
        assert_eq!(parse_year(&RawDatePart::Decimal(2008.0)), Some(2008));
        assert_eq!(parse_year(&RawDatePart::Text("2008.0".to_string())), Some(2008));
        assert_eq!(parse_year(&RawDatePart::Decimal(2008.5)), None);
        assert_eq!(parse_month(&RawDatePart::Decimal(4.0)), Some(4));
        assert_eq!(parse_month(&RawDatePart::Decimal(4.5)), None);
        assert_eq!(parse_year(&RawDatePart::Decimal(f64::NAN)), None);
    }
}
