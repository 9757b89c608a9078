use anyhow::Result;
use owo_colors::OwoColorize;

use super::print_notice;
use crate::app::App;
use crate::render::render_session;

pub fn run(app: &App) -> Result<()> {
    let Some(notice) = app.reminders.notice() else {
        println!("{}", "No sessions tomorrow".dimmed());
        return Ok(());
    };

    print_notice(app);
    for session in notice {
        println!("  {}", render_session(session, app.store.session_color(session)));
    }

    Ok(())
}

pub fn dismiss(app: &mut App) -> Result<()> {
    if app.dismiss_reminder()? {
        println!("{}", "  Got it, the reminder is hidden".green());
    } else {
        println!("{}", "No reminder to dismiss".dimmed());
    }
    Ok(())
}
