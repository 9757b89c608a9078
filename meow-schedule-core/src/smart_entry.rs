//! Free-text session entry.

use crate::session::SessionDraft;
use crate::tag::Tag;

/// Parse a free-text description into a session draft.
///
/// Disabled: always returns `None`.
pub fn parse(_text: &str, _tags: &[Tag]) -> Option<SessionDraft> {
    log::warn!("smart entry parsing is currently disabled");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::default_tags;

    #[test]
    fn parsing_is_disabled() {
        assert_eq!(parse("明天下午拍新生儿", &default_tags()), None);
    }
}
