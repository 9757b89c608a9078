//! Desktop notifications for next-day reminders.

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::Confirm;
use meow_schedule_core::config::ScheduleConfig;
use meow_schedule_core::reminder::{Notifier, Permission};
use notify_rust::Notification;

/// Shows reminders through the desktop notification service.
///
/// The permission lives in the `notifications` config key; asking for it
/// prompts once on a terminal and saves the answer.
pub struct DesktopNotifier {
    config: ScheduleConfig,
    config_path: PathBuf,
}

impl DesktopNotifier {
    pub fn new(config: ScheduleConfig, config_path: PathBuf) -> Self {
        DesktopNotifier {
            config,
            config_path,
        }
    }
}

impl Notifier for DesktopNotifier {
    fn permission(&self) -> Permission {
        self.config.notifications
    }

    fn request_permission(&mut self) {
        if !std::io::stdin().is_terminal() {
            log::debug!("not a terminal, leaving notification permission undetermined");
            return;
        }

        let answer = Confirm::new()
            .with_prompt("  Show desktop reminders for tomorrow's shoots?")
            .default(true)
            .interact();

        let permission = match answer {
            Ok(true) => Permission::Granted,
            Ok(false) => Permission::Denied,
            Err(e) => {
                log::warn!("could not ask for notification permission: {e}");
                return;
            }
        };

        self.config.notifications = permission;
        if let Err(e) = self.config.save_to(&self.config_path) {
            log::warn!("could not save notification permission: {e}");
        }
    }

    fn show(&mut self, title: &str, body: &str, icon: &str) {
        if let Err(e) = Notification::new()
            .summary(title)
            .body(body)
            .icon(icon)
            .show()
        {
            log::warn!("desktop notification failed: {e}");
        }
    }
}
