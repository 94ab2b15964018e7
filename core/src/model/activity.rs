use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

/// Sparse date -> count mapping. Dates missing from the map count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityMap {
    counts: BTreeMap<NaiveDate, u64>,
}

impl ActivityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, count: u64) -> Option<u64> {
        self.counts.insert(date, count)
    }

    pub fn count(&self, date: NaiveDate) -> u64 {
        self.counts.get(&date).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u64)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }

    pub fn for_year(&self, year: i32) -> impl Iterator<Item = (NaiveDate, u64)> + '_ {
        self.iter().filter(move |(d, _)| d.year() == year)
    }

    /// Distinct years present in the data, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.counts.keys().map(|d| d.year()).collect();
        years.dedup();
        years
    }
}

impl FromIterator<(NaiveDate, u64)> for ActivityMap {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_dates_count_zero() {
        let activity: ActivityMap = [(date(2024, 1, 1), 3)].into_iter().collect();
        assert_eq!(activity.count(date(2024, 1, 1)), 3);
        assert_eq!(activity.count(date(2024, 1, 2)), 0);
    }

    #[test]
    fn test_years_and_for_year() {
        let activity: ActivityMap = [
            (date(2024, 6, 1), 1),
            (date(2023, 12, 31), 2),
            (date(2024, 1, 1), 3),
            (date(2025, 1, 1), 4),
        ]
        .into_iter()
        .collect();

        assert_eq!(activity.years(), vec![2023, 2024, 2025]);

        let in_2024: Vec<_> = activity.for_year(2024).collect();
        assert_eq!(in_2024, vec![(date(2024, 1, 1), 3), (date(2024, 6, 1), 1)]);
    }
}
