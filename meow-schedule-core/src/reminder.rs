//! Next-day shoot reminders.
//!
//! After every change to the session list the checker collects the sessions
//! dated tomorrow. A non-empty set replaces the in-app notice and, depending
//! on the notifier's permission, raises a system alert or asks for
//! permission. An empty set leaves the current notice alone; only
//! [`ReminderChecker::dismiss`] clears it.
//!
//! A dismissal is remembered as a [`DismissedReminder`] so it can be
//! persisted. The same tomorrow-set stays hidden afterwards; a different
//! non-empty set brings the notice back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{REMINDER_ICON, REMINDER_TITLE};
use crate::session::Session;

/// Whether the host allows system-level alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    #[default]
    Undetermined,
}

/// System notification service. Calls are fire-and-forget.
pub trait Notifier {
    fn permission(&self) -> Permission;
    fn request_permission(&mut self);
    fn show(&mut self, title: &str, body: &str, icon: &str);
}

/// Notifier for hosts without system alerts; always denied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn request_permission(&mut self) {}

    fn show(&mut self, _title: &str, _body: &str, _icon: &str) {}
}

/// Sessions dated the day after `today`, in list order.
pub fn sessions_for_tomorrow(sessions: &[Session], today: NaiveDate) -> Vec<Session> {
    let Some(tomorrow) = today.succ_opt() else {
        return Vec::new();
    };
    sessions
        .iter()
        .filter(|s| s.date == tomorrow)
        .cloned()
        .collect()
}

/// Body text of the system alert.
pub fn alert_body(count: usize) -> String {
    format!("明天有 {count} 个拍摄档期，请做好准备！")
}

/// A notice the user has acknowledged: the shoot date and the ids it listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DismissedReminder {
    pub date: NaiveDate,
    /// Sorted, so the comparison ignores list order.
    pub session_ids: Vec<String>,
}

impl DismissedReminder {
    fn of(date: NaiveDate, sessions: &[Session]) -> Self {
        let mut session_ids: Vec<String> = sessions.iter().map(|s| s.id.clone()).collect();
        session_ids.sort();
        DismissedReminder { date, session_ids }
    }

    fn covers(&self, sessions: &[Session]) -> bool {
        sessions
            .first()
            .is_some_and(|first| *self == DismissedReminder::of(first.date, sessions))
    }
}

/// Holds the in-app notice and drives the notifier.
#[derive(Debug, Default, Clone)]
pub struct ReminderChecker {
    notice: Option<Vec<Session>>,
    dismissed: Option<DismissedReminder>,
}

impl ReminderChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A checker that remembers an earlier dismissal.
    pub fn with_dismissed(dismissed: Option<DismissedReminder>) -> Self {
        ReminderChecker {
            notice: None,
            dismissed,
        }
    }

    /// Sessions in the currently shown notice, if any.
    pub fn notice(&self) -> Option<&[Session]> {
        self.notice.as_deref()
    }

    /// Clear the notice. Returns the record to persist, or `None` when no
    /// notice was shown.
    pub fn dismiss(&mut self) -> Option<DismissedReminder> {
        let sessions = self.notice.take()?;
        let date = sessions.first()?.date;
        let record = DismissedReminder::of(date, &sessions);
        self.dismissed = Some(record.clone());
        Some(record)
    }

    /// Recompute after the session list changed.
    pub fn check(&mut self, sessions: &[Session], today: NaiveDate, notifier: &mut impl Notifier) {
        let upcoming = sessions_for_tomorrow(sessions, today);
        if upcoming.is_empty() {
            return;
        }
        if self.dismissed.as_ref().is_some_and(|d| d.covers(&upcoming)) {
            log::debug!("tomorrow's reminder was already dismissed");
            return;
        }

        let count = upcoming.len();
        log::info!("{count} session(s) scheduled for tomorrow");
        self.notice = Some(upcoming);

        match notifier.permission() {
            Permission::Granted => notifier.show(REMINDER_TITLE, &alert_body(count), REMINDER_ICON),
            Permission::Undetermined => notifier.request_permission(),
            Permission::Denied => {}
        }
    }
}
