use anyhow::Result;
use owo_colors::OwoColorize;

use super::find_session;
use crate::app::App;

pub fn run(app: &mut App, id: &str) -> Result<()> {
    let Some(session) = find_session(app, id)? else {
        println!("{}", format!("No session with id '{}'", id).dimmed());
        return Ok(());
    };

    app.store.delete_session(&session.id)?;
    app.sessions_changed();

    println!(
        "{}",
        format!("  Deleted: {} ({})", session.title, session.date).red()
    );

    Ok(())
}
