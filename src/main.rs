mod app;
mod commands;
mod dates;
mod notifier;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use meow_schedule_core::TagColor;

use crate::app::App;

#[derive(Parser)]
#[command(name = "meow")]
#[command(about = "Schedule photography sessions on a rolling 3-week calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the 3-week calendar
    View {
        /// Reference date (YYYY-MM-DD or e.g. "next friday"), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Move this many 3-week pages forward (negative for back)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    /// Schedule a new session
    Add {
        /// Shoot date (YYYY-MM-DD or e.g. "tomorrow"), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Notes for the shoot (prompted if missing)
        #[arg(short, long)]
        notes: Option<String>,

        /// Tag id, repeatable; order is kept
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Describe the shoot in free text instead
        #[arg(long, conflicts_with_all = ["date", "notes", "tags"])]
        smart: Option<String>,
    },
    /// Edit an existing session
    Edit {
        id: String,

        /// New shoot date
        #[arg(short, long)]
        date: Option<String>,

        /// New notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Select or deselect a tag, repeatable
        #[arg(short, long = "toggle-tag")]
        toggle_tags: Vec<String>,
    },
    /// Delete a session
    Delete { id: String },
    /// Show one session
    Show { id: String },
    /// List tags
    Tags,
    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// List the colors available for new tags
    Colors,
    /// Check for sessions scheduled tomorrow
    Remind {
        /// Acknowledge the notice so it stops showing until tomorrow's list changes
        #[arg(long)]
        dismiss: bool,
    },
    /// Print all sessions and tags as JSON
    Export,
}

#[derive(Subcommand)]
enum TagCommands {
    /// Create a tag
    Add {
        name: String,

        /// Tag color (see `meow colors`)
        #[arg(short, long, default_value_t = TagColor::default())]
        color: TagColor,
    },
    /// Delete a tag (sessions using it keep the reference)
    Delete { id: String },
}

fn setup_logging() {
    let env = env_logger::Env::new().filter_or("MEOW_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();
    log::debug!("meow {}", env!("CARGO_PKG_VERSION"));

    let mut app = App::load()?;

    match cli.command {
        Commands::View { date, offset } => commands::view::run(&app, date.as_deref(), offset),
        Commands::Add {
            date,
            notes,
            tags,
            smart,
        } => match smart {
            Some(text) => commands::add::run_smart(&mut app, &text),
            None => commands::add::run(&mut app, date.as_deref(), notes, tags),
        },
        Commands::Edit {
            id,
            date,
            notes,
            toggle_tags,
        } => commands::edit::run(&mut app, &id, date.as_deref(), notes, toggle_tags),
        Commands::Delete { id } => commands::delete::run(&mut app, &id),
        Commands::Show { id } => commands::show::run(&app, &id),
        Commands::Tags => commands::tags::list(&app),
        Commands::Tag { command } => match command {
            TagCommands::Add { name, color } => commands::tags::add(&mut app, name, color),
            TagCommands::Delete { id } => commands::tags::delete(&mut app, &id),
        },
        Commands::Colors => commands::tags::colors(),
        Commands::Remind { dismiss: true } => commands::remind::dismiss(&mut app),
        Commands::Remind { dismiss: false } => commands::remind::run(&app),
        Commands::Export => commands::export::run(&app),
    }
}
