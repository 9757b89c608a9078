pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod remind;
pub mod show;
pub mod tags;
pub mod view;

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, MultiSelect};
use meow_schedule_core::form::{FormOutput, SessionForm};
use meow_schedule_core::{Session, Tag};
use owo_colors::OwoColorize;

use crate::app::App;
use crate::dates::parse_date;
use crate::render::{Render, render_notice};

/// Find a session by full id or unique id prefix.
pub fn find_session(app: &App, id: &str) -> Result<Option<Session>> {
    if let Some(session) = app.store.session(id) {
        return Ok(Some(session.clone()));
    }

    let matches: Vec<&Session> = app
        .store
        .sessions()
        .iter()
        .filter(|s| s.id.starts_with(id))
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [session] => Ok(Some((*session).clone())),
        _ => anyhow::bail!(
            "Session id '{}' is ambiguous ({} matches), use more characters",
            id,
            matches.len()
        ),
    }
}

/// Ensure a tag id exists before it is selected.
pub fn require_tag<'a>(app: &'a App, id: &str) -> Result<&'a Tag> {
    app.store.tag(id).ok_or_else(|| {
        let available: Vec<_> = app.store.tags().iter().map(|t| t.id.as_str()).collect();
        anyhow::anyhow!("Tag '{}' not found. Available: {}", id, available.join(", "))
    })
}

/// Validate the form and hand it to the store.
pub fn save_form(app: &mut App, form: &SessionForm) -> Result<Session> {
    let session = match form.submit(app.store.tags())? {
        FormOutput::Create(draft) => app.store.create_session(draft)?,
        FormOutput::Update(session) => {
            if !app.store.update_session(session.clone())? {
                log::warn!("session {} disappeared before it could be updated", session.id);
            }
            session
        }
    };
    app.sessions_changed();
    Ok(session)
}

pub fn print_notice(app: &App) {
    if let Some(notice) = app.reminders.notice() {
        println!("{}", render_notice(notice));
        println!("   {}", "`meow remind --dismiss` to hide it".dimmed());
    }
}

pub fn prompt_notes(initial: &str) -> Result<String> {
    let notes = Input::<String>::new()
        .with_prompt("  Notes")
        .with_initial_text(initial)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Notes are required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(notes)
}

/// Prompt for a date with retry on parse errors.
pub fn prompt_date(default: NaiveDate) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt("  When?")
            .default(default.format("%Y-%m-%d").to_string())
            .interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Let the user pick tags. Returns the ids of the checked tags in list order.
pub fn prompt_tags(tags: &[Tag], selected: &[String]) -> Result<Vec<String>> {
    if tags.is_empty() {
        println!("  {}", "No tags yet, add one with `meow tag add`".dimmed());
        return Ok(Vec::new());
    }

    let items: Vec<String> = tags
        .iter()
        .map(|t| format!("{} {}", t.color.render(), t.name))
        .collect();
    let defaults: Vec<bool> = tags.iter().map(|t| selected.contains(&t.id)).collect();

    let picked = MultiSelect::new()
        .with_prompt("  Tags (space to select)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    Ok(picked.into_iter().map(|i| tags[i].id.clone()).collect())
}
