use anyhow::Result;
use meow_schedule_core::form::SessionForm;
use meow_schedule_core::smart_entry;
use owo_colors::OwoColorize;

use super::{print_notice, prompt_date, prompt_notes, prompt_tags, require_tag, save_form};
use crate::app::App;
use crate::dates::parse_date;
use crate::render::render_session;

pub fn run(app: &mut App, date: Option<&str>, notes: Option<String>, tags: Vec<String>) -> Result<()> {
    let interactive = notes.is_none();

    // --- Date ---
    let date = match date {
        Some(d) => parse_date(d)?,
        None if interactive => prompt_date(app.today())?,
        None => app.today(),
    };
    let mut form = SessionForm::new(date);

    // --- Tags ---
    for id in &tags {
        require_tag(app, id)?;
        if !form.is_selected(id) {
            form.toggle_tag(id);
        }
    }
    if interactive && tags.is_empty() {
        for id in prompt_tags(app.store.tags(), &[])? {
            form.toggle_tag(&id);
        }
    }

    // --- Notes ---
    form.notes = match notes {
        Some(n) => n,
        None => prompt_notes("")?,
    };

    let session = save_form(app, &form)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", session.title).green());
    println!("  {}", render_session(&session, app.store.session_color(&session)));
    print_notice(app);

    Ok(())
}

/// Create a session from free text, falling back to the prompts when it can't be parsed.
pub fn run_smart(app: &mut App, text: &str) -> Result<()> {
    let Some(draft) = smart_entry::parse(text, app.store.tags()) else {
        println!("  {}", "Smart entry is unavailable, please fill in the details".dimmed());
        return run(app, None, None, Vec::new());
    };

    let session = app.store.create_session(draft)?;
    app.sessions_changed();

    println!("{}", format!("  Created: {}", session.title).green());
    println!("  {}", render_session(&session, app.store.session_color(&session)));
    print_notice(app);

    Ok(())
}
