use chrono::{Datelike, NaiveDate};

use crate::model::activity::ActivityMap;
use crate::model::palette::ActivityLevel;
use crate::time;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthSummary {
    /// 0 = January
    pub month: u32,
    /// Saturates at `u64::MAX`.
    pub total: u64,
    pub active_days: u32,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSummary {
    pub year: i32,
    pub months: Vec<MonthSummary>,
    pub total: u64,
    pub active_days: u32,
    pub days: u32,
    /// Earliest day with the highest count, if any day had activity.
    pub busiest_day: Option<(NaiveDate, u64)>,
    pub longest_streak: u32,
    /// Day counts per [`ActivityLevel`], indexed by `ActivityLevel::index`.
    pub levels: [u32; 4],
}

impl YearSummary {
    pub fn level_days(&self, level: ActivityLevel) -> u32 {
        self.levels[level.index()]
    }
}

pub fn summarize(activity: &ActivityMap, year: i32) -> YearSummary {
    let mut months: Vec<MonthSummary> = (0..12)
        .map(|month| MonthSummary {
            month,
            ..MonthSummary::default()
        })
        .collect();

    let mut busiest_day: Option<(NaiveDate, u64)> = None;
    let mut streak = 0;
    let mut longest_streak = 0;
    let mut levels = [0u32; 4];

    for date in time::year_dates(year) {
        let count = activity.count(date);
        let month = &mut months[date.month0() as usize];
        month.days += 1;
        month.total = month.total.saturating_add(count);
        levels[ActivityLevel::from_count(count).index()] += 1;

        if count > 0 {
            month.active_days += 1;
            streak += 1;
            longest_streak = longest_streak.max(streak);
            if busiest_day.map_or(true, |(_, best)| count > best) {
                busiest_day = Some((date, count));
            }
        } else {
            streak = 0;
        }
    }

    YearSummary {
        year,
        total: months.iter().fold(0u64, |acc, m| acc.saturating_add(m.total)),
        active_days: months.iter().map(|m| m.active_days).sum(),
        days: months.iter().map(|m| m.days).sum(),
        months,
        busiest_day,
        longest_streak,
        levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_activity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summarize_totals() {
        let activity = parse_activity(
            r#"{
                "2024-01-01": 3,
                "2024-01-02": 5,
                "2024-01-03": 12,
                "2024-03-05": 12,
                "2024-12-31": 1,
                "2023-12-31": 99
            }"#,
        )
        .unwrap();

        let summary = summarize(&activity, 2024);
        assert_eq!(summary.days, 366);
        assert_eq!(summary.total, 33);
        assert_eq!(summary.active_days, 5);
        assert_eq!(summary.months[0].total, 20);
        assert_eq!(summary.months[0].active_days, 3);
        assert_eq!(summary.months[1].days, 29);
        assert_eq!(summary.months[11].total, 1);

        // ties go to the earliest day
        assert_eq!(summary.busiest_day, Some((date(2024, 1, 3), 12)));
        assert_eq!(summary.longest_streak, 3);

        assert_eq!(summary.level_days(ActivityLevel::Low), 2);
        assert_eq!(summary.level_days(ActivityLevel::Medium), 1);
        assert_eq!(summary.level_days(ActivityLevel::High), 2);
        assert_eq!(summary.level_days(ActivityLevel::None), 361);
    }

    #[test]
    fn test_summarize_saturates_huge_counts() {
        let activity = parse_activity(
            r#"{"2024-01-01": 18446744073709551615, "2024-01-02": 1, "2024-02-01": 5}"#,
        )
        .unwrap();

        let summary = summarize(&activity, 2024);
        assert_eq!(summary.months[0].total, u64::MAX);
        assert_eq!(summary.months[1].total, 5);
        assert_eq!(summary.total, u64::MAX);
        assert_eq!(summary.busiest_day, Some((date(2024, 1, 1), u64::MAX)));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&ActivityMap::new(), 2023);
        assert_eq!(summary.days, 365);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.busiest_day, None);
        assert_eq!(summary.longest_streak, 0);
        assert_eq!(summary.level_days(ActivityLevel::None), 365);
    }
}
