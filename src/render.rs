//! TUI rendering traits for meow-schedule types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to meow-schedule-core types using owo_colors.

use chrono::{Datelike, NaiveDate};
use meow_schedule_core::constants::WEEKDAYS;
use meow_schedule_core::window::{CalendarDay, HeaderMonth};
use meow_schedule_core::{Session, Tag, TagColor};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TagColor {
    fn render(&self) -> String {
        let (r, g, b) = TagColor::style(*self).dot;
        "●".truecolor(r, g, b).to_string()
    }
}

impl Render for Tag {
    fn render(&self) -> String {
        format!("{} {} {}", self.color.render(), self.name, format!("[{}]", self.id).dimmed())
    }
}

impl Render for HeaderMonth {
    fn render(&self) -> String {
        format!("{}年 {}", self.year, format!("{}月", self.month).yellow().bold())
    }
}

const NO_NOTES: &str = "无备注";

/// Short form of an id for listings.
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// One session line: colored dot, notes, derived title and id.
pub fn render_session(session: &Session, color: TagColor) -> String {
    let notes = session.notes.as_deref().filter(|n| !n.is_empty()).unwrap_or(NO_NOTES);
    format!(
        "{} {} {}",
        color.render(),
        notes.bold(),
        format!("{} [{}]", session.title, short_id(&session.id)).dimmed()
    )
}

/// Full detail view of a session.
pub fn render_session_detail(session: &Session, tags: &[Option<&Tag>]) -> String {
    let mut lines = vec![
        format!("{}", session.title.bold()),
        format!("{} {}", "id:".dimmed(), session.id),
        format!("{} {}", "date:".dimmed(), session.date.format("%Y-%m-%d (%a)")),
        format!("{} {}", "client:".dimmed(), session.client_name),
    ];

    let tag_names: Vec<String> = session
        .tags
        .iter()
        .zip(tags)
        .map(|(id, tag)| match tag {
            Some(tag) => tag.render(),
            None => format!("{} {}", TagColor::NEUTRAL.render(), format!("[{}]", id).dimmed()),
        })
        .collect();
    if !tag_names.is_empty() {
        lines.push(format!("{} {}", "tags:".dimmed(), tag_names.join("  ")));
    }

    lines.push(format!(
        "{} {}",
        "notes:".dimmed(),
        session.notes.as_deref().unwrap_or(NO_NOTES)
    ));
    lines.join("\n")
}

/// Width of one day column in the grid.
const CELL_WIDTH: usize = 5;

/// Render the 3-week grid: header month, weekday row and day numbers.
/// Days with sessions are marked with a dot per session (up to three).
pub fn render_grid(header: HeaderMonth, days: &[CalendarDay<'_>]) -> String {
    let mut lines = vec![header.render(), String::new()];

    let weekday_row: Vec<String> = WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            // CJK labels are two columns wide
            let cell = format!("{:>width$}", label, width = CELL_WIDTH - 1);
            if i == 0 || i == 6 {
                cell.yellow().bold().to_string()
            } else {
                cell.bold().to_string()
            }
        })
        .collect();
    lines.push(weekday_row.join(""));

    for week in days.chunks(7) {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        lines.push(row.join(""));
    }

    lines.join("\n")
}

fn render_cell(day: &CalendarDay<'_>) -> String {
    let number = format!("{:>3}", day.date.day());
    let number = if day.is_today {
        number.yellow().bold().underline().to_string()
    } else if day.is_current_month {
        number
    } else {
        number.dimmed().to_string()
    };

    let marks = match day.sessions.len() {
        0 => "  ".to_string(),
        1 => "• ".to_string(),
        2 => "••".to_string(),
        _ => "•+".to_string(),
    };

    format!("{}{}", number, marks.yellow())
}

/// Format a date as a label relative to today ("Today", "Tomorrow", "Fri Mar 15").
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// The in-app reminder banner.
pub fn render_notice(sessions: &[Session]) -> String {
    format!(
        "🔔 {} {}",
        "明天有拍摄任务！".yellow().bold(),
        format!("您有 {} 个档期需要准备。", sessions.len()).dimmed()
    )
}
