use anyhow::Result;
use meow_schedule_core::window::CalendarCursor;
use owo_colors::OwoColorize;

use super::print_notice;
use crate::app::App;
use crate::dates::parse_date;
use crate::render::{date_label, render_grid, render_session};

pub fn run(app: &App, date: Option<&str>, offset: i64) -> Result<()> {
    let reference = match date {
        Some(d) => parse_date(d)?,
        None => app.today(),
    };

    let mut cursor = CalendarCursor::new(reference);
    cursor.shift(offset)?;
    let window = cursor.window()?;
    let days = window.days(app.store.sessions(), app.today());

    if app.reminders.notice().is_some() {
        print_notice(app);
        println!();
    }

    println!("{}", render_grid(window.header_month(), &days));
    println!();

    let mut any = false;
    for day in days.iter().filter(|d| !d.sessions.is_empty()) {
        if any {
            println!();
        }
        any = true;

        println!("{}", date_label(day.date, app.today()).bold());
        for session in &day.sessions {
            println!("  {}", render_session(session, app.store.session_color(session)));
        }
    }

    if !any {
        println!(
            "{}",
            format!(
                "No sessions between {} and {}",
                window.start().format("%b %-d"),
                window.end().format("%b %-d")
            )
            .dimmed()
        );
    }

    Ok(())
}
