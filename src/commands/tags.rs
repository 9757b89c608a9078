use anyhow::Result;
use meow_schedule_core::TagColor;
use meow_schedule_core::form::TagForm;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::Render;

fn usage_count(app: &App, tag_id: &str) -> usize {
    app.store
        .sessions()
        .iter()
        .filter(|s| s.tags.iter().any(|t| t == tag_id))
        .count()
}

pub fn list(app: &App) -> Result<()> {
    if app.store.tags().is_empty() {
        println!("{}", "No tags. Add one with `meow tag add <name>`".dimmed());
        return Ok(());
    }

    for tag in app.store.tags() {
        let count = usage_count(app, &tag.id);
        let label = if count == 1 { "session" } else { "sessions" };
        println!("  {} {}", tag.render(), format!("({} {})", count, label).dimmed());
    }

    Ok(())
}

pub fn add(app: &mut App, name: String, color: TagColor) -> Result<()> {
    let (name, color) = TagForm::new(name, color).submit()?;
    let tag = app.store.create_tag(name, color)?;

    println!("{}", "  Created tag:".green());
    println!("  {}", tag.render());

    Ok(())
}

pub fn delete(app: &mut App, id: &str) -> Result<()> {
    let Some(tag) = app.store.tag(id).cloned() else {
        println!("{}", format!("No tag with id '{}'", id).dimmed());
        return Ok(());
    };

    app.store.delete_tag(&tag.id)?;
    println!("{}", format!("  Deleted tag: {}", tag.name).red());

    let still_used = usage_count(app, &tag.id);
    if still_used > 0 {
        println!(
            "  {}",
            format!("{} session(s) still reference it and will show in gray", still_used).dimmed()
        );
    }

    Ok(())
}

pub fn colors() -> Result<()> {
    for (i, color) in TagColor::PALETTE.iter().enumerate() {
        let default = if i == 0 { " (default)" } else { "" };
        println!(
            "  {} {:<8} {}{}",
            color.render(),
            color.name(),
            TagColor::style(*color).label,
            default.dimmed()
        );
    }
    Ok(())
}
