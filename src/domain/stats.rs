//! Registration-time popularity, accumulated one row at a time.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::domain::model::RegistrationMoment;
use crate::utils::error::{EtlError, Result};

pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Name of a weekday index where 0 is Sunday.
pub fn weekday_name(index: u32) -> Option<&'static str> {
    WEEKDAYS.get(index as usize).copied()
}

/// Most common value; ties go to the value seen first.
pub fn most_frequent<T: Copy + Eq + Hash>(values: &[T]) -> Result<T> {
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for value in values {
        let count = counts[value];
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((*value, count)),
        }
    }

    best.map(|(value, _)| value).ok_or(EtlError::EmptyInput)
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationStats {
    hours: Vec<u32>,
    weekdays: Vec<u32>,
}

impl RegistrationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, moment: &RegistrationMoment) {
        self.hours.push(moment.hour);
        self.weekdays.push(moment.weekday);
    }

    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    pub fn weekdays(&self) -> &[u32] {
        &self.weekdays
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    pub fn most_popular_hour(&self) -> Result<u32> {
        most_frequent(&self.hours)
    }

    pub fn most_popular_weekday(&self) -> Result<&'static str> {
        let index = most_frequent(&self.weekdays)?;
        // indices come from chrono's num_days_from_sunday, always 0..=6
        Ok(weekday_name(index).unwrap_or("Unknown"))
    }

    pub fn report(&self) -> Result<PopularityReport> {
        Ok(PopularityReport {
            hour: self.most_popular_hour()?,
            weekday: self.most_popular_weekday()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularityReport {
    pub hour: u32,
    pub weekday: &'static str,
}

impl fmt::Display for PopularityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most popular registration hour: {}", self.hour)?;
        write!(f, "Most popular registration day: {}", self.weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(value: &str) -> RegistrationMoment {
        RegistrationMoment::parse(value).unwrap()
    }

    #[test]
    fn test_most_frequent_unique_maximum() {
        assert_eq!(most_frequent(&[3, 1, 3, 2, 3, 1]).unwrap(), 3);
        assert_eq!(most_frequent(&[7]).unwrap(), 7);
    }

    #[test]
    fn test_most_frequent_tie_prefers_first_seen() {
        assert_eq!(most_frequent(&[5, 2, 2, 5]).unwrap(), 5);
        assert_eq!(most_frequent(&[9, 1, 1, 9, 4, 4]).unwrap(), 9);
        assert_eq!(most_frequent(&[1, 9, 9, 1]).unwrap(), 1);
    }

    #[test]
    fn test_most_frequent_empty_fails() {
        let empty: [u32; 0] = [];
        assert!(matches!(most_frequent(&empty), Err(EtlError::EmptyInput)));
    }

    #[test]
    fn test_most_frequent_count_dominates() {
        let values = [4, 8, 15, 16, 23, 42, 8, 15, 8];
        let mode = most_frequent(&values).unwrap();
        let count = |v: u32| values.iter().filter(|x| **x == v).count();
        for v in values {
            assert!(count(mode) >= count(v));
        }
    }

    #[test]
    fn test_record_keeps_row_order() {
        let mut stats = RegistrationStats::new();
        stats.record(&moment("11/12/08 10:47"));
        stats.record(&moment("2/2/09 19:00"));

        assert_eq!(stats.hours(), &[10, 19]);
        assert_eq!(stats.weekdays(), &[3, 1]);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_report_is_order_independent_with_unique_mode() {
        let rows = ["1/1/21 08:30", "1/1/21 08:45", "1/4/21 13:00"];

        let mut forward = RegistrationStats::new();
        rows.iter().for_each(|r| forward.record(&moment(r)));
        let mut backward = RegistrationStats::new();
        rows.iter().rev().for_each(|r| backward.record(&moment(r)));

        let expected = PopularityReport {
            hour: 8,
            weekday: "Friday",
        };
        assert_eq!(forward.report().unwrap(), expected);
        assert_eq!(backward.report().unwrap(), expected);
    }

    #[test]
    fn test_report_display() {
        let report = PopularityReport {
            hour: 13,
            weekday: "Thursday",
        };
        assert_eq!(
            report.to_string(),
            "Most popular registration hour: 13\nMost popular registration day: Thursday"
        );
    }

    #[test]
    fn test_empty_stats_have_no_report() {
        assert!(RegistrationStats::new().report().is_err());
        assert_eq!(weekday_name(0), Some("Sunday"));
        assert_eq!(weekday_name(7), None);
    }
}
