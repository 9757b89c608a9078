//! Process-wide state: the store, the reminder notice and the notifier.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use meow_schedule_core::ScheduleStore;
use meow_schedule_core::config::ScheduleConfig;
use meow_schedule_core::reminder::ReminderChecker;
use meow_schedule_core::storage::FileStore;

use crate::notifier::DesktopNotifier;

pub struct App {
    pub store: ScheduleStore<FileStore>,
    pub reminders: ReminderChecker,
    notifier: DesktopNotifier,
    today: NaiveDate,
}

impl App {
    pub fn load() -> Result<Self> {
        let config_path = ScheduleConfig::config_path()?;
        let config = ScheduleConfig::load_from(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        let data_path = config.data_path();
        log::debug!("data directory: {}", data_path.display());

        let store = ScheduleStore::open(FileStore::new(data_path));
        let reminders = ReminderChecker::with_dismissed(store.dismissed_reminder());
        let mut app = App {
            store,
            reminders,
            notifier: DesktopNotifier::new(config, config_path),
            today: Local::now().date_naive(),
        };

        if !app.store.sessions().is_empty() {
            app.sessions_changed();
        }

        Ok(app)
    }

    /// Today's date on this device.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Re-run the tomorrow check after the session list changed.
    pub fn sessions_changed(&mut self) {
        self.reminders
            .check(self.store.sessions(), self.today, &mut self.notifier);
    }

    /// Hide the current notice in this and later runs. Returns false if no
    /// notice was shown.
    pub fn dismiss_reminder(&mut self) -> Result<bool> {
        let Some(record) = self.reminders.dismiss() else {
            return Ok(false);
        };
        self.store
            .save_dismissed_reminder(&record)
            .context("Failed to save the dismissed reminder")?;
        Ok(true)
    }
}
