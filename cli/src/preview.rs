use std::{io, time::Duration};

use anyhow::Result;
use contribcal_core::model::grid::ROWS;
use contribcal_core::model::palette::parse_hex;
use contribcal_core::{
    render_with, summarize, ActivityMap, RenderOptions, RenderedGrid, RowLayout, YearSummary,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan, // Highlights
    muted: Color::DarkGray,
    text: Color::White,
};

const GUTTER: usize = 4;
const CELL: &str = "■ ";

pub struct PreviewApp {
    activity: ActivityMap,
    options: RenderOptions,
    pub years: Vec<i32>,
    pub current_year_index: usize,
    pub grid: RenderedGrid,
    pub summary: YearSummary,
}

impl PreviewApp {
    pub fn new(activity: ActivityMap, year: i32, options: RenderOptions) -> Self {
        let mut years = activity.years();
        if !years.contains(&year) {
            years.push(year);
            years.sort_unstable();
        }
        let current_year_index = years.iter().position(|y| *y == year).unwrap_or(0);
        let grid = render_with(&activity, year, &options);
        let summary = summarize(&activity, year);

        Self {
            activity,
            options,
            years,
            current_year_index,
            grid,
            summary,
        }
    }

    pub fn next_year(&mut self) {
        if self.current_year_index + 1 < self.years.len() {
            self.current_year_index += 1;
            self.refresh();
        }
    }

    pub fn previous_year(&mut self) {
        if self.current_year_index > 0 {
            self.current_year_index -= 1;
            self.refresh();
        }
    }

    pub fn current_year(&self) -> i32 {
        self.years[self.current_year_index]
    }

    fn refresh(&mut self) {
        let year = self.current_year();
        self.grid = render_with(&self.activity, year, &self.options);
        self.summary = summarize(&self.activity, year);
    }
}

pub fn run(activity: ActivityMap, year: i32, options: RenderOptions) -> Result<()> {
    let mut app = PreviewApp::new(activity, year, options);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut PreviewApp,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.previous_year(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_year(),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn ui(frame: &mut Frame, app: &PreviewApp) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(ROWS as u16 + 3), // Calendar
            Constraint::Min(6),                  // Summary
            Constraint::Length(1),               // Footer / Help
        ])
        .split(frame.area());

    // --- Header ---
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(1), Constraint::Length(20)])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled(
        "CONTRIBUTIONS",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let has_prev = app.current_year_index > 0;
    let has_next = app.current_year_index + 1 < app.years.len();
    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(if has_prev { THEME.text } else { THEME.muted })),
        Span::styled(
            app.current_year().to_string(),
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" > ", Style::default().fg(if has_next { THEME.text } else { THEME.muted })),
    ]);
    let nav = Paragraph::new(nav_text)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(THEME.muted)),
        main_layout[0],
    );

    // --- Calendar ---
    let calendar = Paragraph::new(calendar_lines(&app.grid, app.options.row_layout)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted)),
    );
    frame.render_widget(calendar, main_layout[1]);

    // --- Summary ---
    draw_summary(frame, &app.summary, main_layout[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("YEAR: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center);
    frame.render_widget(footer, main_layout[3]);
}

fn draw_summary(frame: &mut Frame, summary: &YearSummary, area: Rect) {
    let busiest = summary
        .busiest_day
        .map(|(date, count)| format!("{} ({})", date.format("%Y-%m-%d"), count))
        .unwrap_or_else(|| "-".to_string());

    let line = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(THEME.muted)),
            Span::styled(value, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        ])
    };

    let text = vec![
        line("Total:    ", summary.total.to_string()),
        line("Active:   ", format!("{} / {} days", summary.active_days, summary.days)),
        line("Busiest:  ", busiest),
        line("Streak:   ", format!("{} days", summary.longest_streak)),
    ];

    let block = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(block, area);
}

/// Month label line followed by one line per grid row.
fn calendar_lines(grid: &RenderedGrid, layout: RowLayout) -> Vec<Line<'static>> {
    let columns = grid.columns() as usize;
    let mut lines = vec![Line::from(month_label_line(grid))];

    let mut rows: Vec<Vec<Span<'static>>> = (0..ROWS as usize)
        .map(|row| {
            let mut spans = vec![Span::styled(
                row_label(row, layout).to_string(),
                Style::default().fg(THEME.muted),
            )];
            spans.extend((0..columns).map(|_| Span::raw("  ")));
            spans
        })
        .collect();

    for cell in &grid.cells {
        rows[cell.row as usize][cell.column as usize + 1] =
            Span::styled(CELL, Style::default().fg(cell_color(&cell.fill)));
    }

    lines.extend(rows.into_iter().map(Line::from));
    lines
}

fn month_label_line(grid: &RenderedGrid) -> String {
    let width = GUTTER + grid.columns() as usize * CELL.chars().count();
    let mut chars = vec![' '; width];
    for marker in &grid.markers {
        let start = GUTTER + marker.column() as usize * 2;
        for (i, c) in marker.label().chars().enumerate() {
            if let Some(slot) = chars.get_mut(start + i) {
                *slot = c;
            }
        }
    }
    chars.into_iter().collect()
}

fn row_label(row: usize, layout: RowLayout) -> &'static str {
    match (layout, row) {
        (RowLayout::Weekday, 1) => "Mon ",
        (RowLayout::Weekday, 3) => "Wed ",
        (RowLayout::Weekday, 5) => "Fri ",
        _ => "    ",
    }
}

fn cell_color(fill: &str) -> Color {
    parse_hex(fill)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Gray)
}
