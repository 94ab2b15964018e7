pub mod render_calendar;
