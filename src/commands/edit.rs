use anyhow::Result;
use meow_schedule_core::form::SessionForm;
use owo_colors::OwoColorize;

use super::{find_session, print_notice, prompt_date, prompt_notes, prompt_tags, require_tag, save_form};
use crate::app::App;
use crate::dates::parse_date;
use crate::render::render_session;

pub fn run(
    app: &mut App,
    id: &str,
    date: Option<&str>,
    notes: Option<String>,
    toggle_tags: Vec<String>,
) -> Result<()> {
    let Some(session) = find_session(app, id)? else {
        anyhow::bail!("No session with id '{}'", id);
    };

    let interactive = date.is_none() && notes.is_none() && toggle_tags.is_empty();
    let mut form = SessionForm::editing(&session);

    if interactive {
        form.date = prompt_date(form.date)?;

        let picked = prompt_tags(app.store.tags(), form.selected_tags())?;
        let tag_ids: Vec<String> = app.store.tags().iter().map(|t| t.id.clone()).collect();
        for tag_id in &tag_ids {
            if picked.contains(tag_id) != form.is_selected(tag_id) {
                form.toggle_tag(tag_id);
            }
        }

        form.notes = prompt_notes(&form.notes)?;
    } else {
        if let Some(d) = date {
            form.date = parse_date(d)?;
        }
        if let Some(n) = notes {
            form.notes = n;
        }
        for tag_id in &toggle_tags {
            // Deselecting a deleted tag is allowed
            if !form.is_selected(tag_id) {
                require_tag(app, tag_id)?;
            }
            form.toggle_tag(tag_id);
        }
    }

    let updated = save_form(app, &form)?;

    println!("{}", format!("  Updated: {}", updated.title).yellow());
    println!("  {}", render_session(&updated, app.store.session_color(&updated)));
    print_notice(app);

    Ok(())
}
