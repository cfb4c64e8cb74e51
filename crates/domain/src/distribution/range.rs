use super::DistributionError;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Inclusive calendar range `[from, to]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DistributionError> {
        if from > to {
            return Err(DistributionError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// First to last day of the month containing `today`
    pub fn month_of(today: NaiveDate) -> Self {
        let from = today.with_day(1).unwrap_or(today);
        let to = from
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(today);
        Self { from, to }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 1, 31)));
        assert!(!range.contains(date(2025, 2, 1)));
        assert!(!range.contains(date(2024, 12, 31)));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = DateRange::new(date(2025, 2, 1), date(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, DistributionError::InvalidRange { .. }));
    }

    #[test]
    fn test_month_of() {
        let range = DateRange::month_of(date(2024, 2, 17));
        assert_eq!(range.from(), date(2024, 2, 1));
        assert_eq!(range.to(), date(2024, 2, 29));

        let range = DateRange::month_of(date(2025, 12, 5));
        assert_eq!(range.to(), date(2025, 12, 31));
    }
}
