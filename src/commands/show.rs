use anyhow::Result;

use super::find_session;
use crate::app::App;
use crate::render::render_session_detail;

pub fn run(app: &App, id: &str) -> Result<()> {
    let Some(session) = find_session(app, id)? else {
        anyhow::bail!("No session with id '{}'", id);
    };

    let tags: Vec<_> = session.tags.iter().map(|t| app.store.tag(t)).collect();
    println!("{}", render_session_detail(&session, &tags));

    Ok(())
}
