/// Storage key for the session list
pub const SESSIONS_KEY: &str = "meow_schedule_sessions";

/// Storage key for the tag list
pub const TAGS_KEY: &str = "meow_schedule_tags";

/// Storage key for the last dismissed reminder
pub const DISMISSED_REMINDER_KEY: &str = "meow_schedule_dismissed_reminder";

/// Number of days shown by the calendar window (3 weeks)
pub const WINDOW_DAYS: i64 = 21;

/// Index of the window day whose month is used as the header month
pub const HEADER_DAY_INDEX: usize = 6;

/// Weekday column labels, Sunday first
pub const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Title used when a session has no resolvable tags
pub const DEFAULT_SESSION_TITLE: &str = "拍摄档期";

/// Separator between tag names in a derived session title
pub const TITLE_SEPARATOR: &str = " + ";

pub const PLACEHOLDER_CLIENT_NAME: &str = "客户";
pub const PLACEHOLDER_TIME: &str = "00:00";

pub const REMINDER_TITLE: &str = "喵喵提醒 🐱";
pub const REMINDER_ICON: &str = "appointment-soon";
