use anyhow::Result;
use meow_schedule_core::{Session, Tag};
use serde::Serialize;

use crate::app::App;

/// Both records in one document, for backups.
#[derive(Serialize)]
struct Export<'a> {
    sessions: &'a [Session],
    tags: &'a [Tag],
}

pub fn run(app: &App) -> Result<()> {
    let export = Export {
        sessions: app.store.sessions(),
        tags: app.store.tags(),
    };
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
