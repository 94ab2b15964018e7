use contribcal_core::time::month_abbrev;
use contribcal_core::{ActivityLevel, YearSummary};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const BAR_WIDTH: u64 = 20;

// Helper struct for Table Row
#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Total")]
    total: u64,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "")]
    bar: String,
}

pub fn show_summary(summary: &YearSummary) {
    println!(
        "\n\x1b[1;36m{}\x1b[0m ({} contributions on {} of {} days)",
        summary.year, summary.total, summary.active_days, summary.days
    );

    if summary.total == 0 {
        println!("No activity recorded for {}.", summary.year);
        return;
    }

    let max_total = summary.months.iter().map(|m| m.total).max().unwrap_or(0);
    let rows: Vec<MonthRow> = summary
        .months
        .iter()
        .map(|m| MonthRow {
            month: month_abbrev(m.month).to_string(),
            total: m.total,
            active: format!("{}/{}", m.active_days, m.days),
            bar: activity_bar(m.total, max_total),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", table);

    if let Some((date, count)) = summary.busiest_day {
        println!("Busiest day:    {} ({})", date.format("%Y-%m-%d (%a)"), count);
    }
    println!("Longest streak: {} days", summary.longest_streak);
    println!(
        "Levels:         none {} / low {} / medium {} / high {}",
        summary.level_days(ActivityLevel::None),
        summary.level_days(ActivityLevel::Low),
        summary.level_days(ActivityLevel::Medium),
        summary.level_days(ActivityLevel::High),
    );
}

fn activity_bar(total: u64, max_total: u64) -> String {
    if max_total == 0 || total == 0 {
        return String::new();
    }
    // Any activity gets at least one block
    let width = (total as u128 * BAR_WIDTH as u128 / max_total as u128).max(1);
    "█".repeat(width as usize)
}
