use anyhow::Result;
use chrono::NaiveDate;

/// Parse a date given as YYYY-MM-DD or in natural language ("tomorrow", "next fri").
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(trimmed);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(dt.date())
}

const DAY_AND_MONTH_NAMES: [&str; 19] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Spell out shortened weekday and month names ("fri", "sept"), which fuzzydate
/// only accepts in full. A word of three or more letters expands when it is the
/// start of exactly one name.
fn expand_abbreviations(input: &str) -> String {
    let lower = input.to_lowercase();
    lower
        .split_whitespace()
        .map(|word| {
            let mut names = DAY_AND_MONTH_NAMES.iter().filter(|name| name.starts_with(word));
            match (word.len() >= 3, names.next(), names.next()) {
                (true, Some(name), None) => name.to_string(),
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
