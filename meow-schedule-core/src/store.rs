//! In-memory session and tag state mirrored to a key-value backend.

use chrono::NaiveDate;

use crate::error::ScheduleResult;
use crate::id::{IdGenerator, UuidGenerator};
use crate::reminder::DismissedReminder;
use crate::session::{Session, SessionDraft};
use crate::storage::{self, KeyValueStore};
use crate::tag::{Tag, TagColor};

/// Owner of the session and tag lists.
///
/// Every mutating method rewrites the owning list to the backend before
/// returning, so the in-memory list and the stored record stay equal.
pub struct ScheduleStore<K, I = UuidGenerator> {
    backend: K,
    ids: I,
    sessions: Vec<Session>,
    tags: Vec<Tag>,
}

impl<K: KeyValueStore> ScheduleStore<K> {
    /// Load both lists from `backend`, generating ids with UUIDs.
    pub fn open(backend: K) -> Self {
        Self::with_ids(backend, UuidGenerator)
    }
}

impl<K: KeyValueStore, I: IdGenerator> ScheduleStore<K, I> {
    pub fn with_ids(backend: K, ids: I) -> Self {
        let sessions = storage::load_sessions(&backend);
        let tags = storage::load_tags(&backend);
        log::debug!("loaded {} session(s), {} tag(s)", sessions.len(), tags.len());

        ScheduleStore {
            backend,
            ids,
            sessions,
            tags,
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Resolve a tag id. Sessions may reference tags that were deleted.
    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Sessions on `date`, in list order.
    pub fn sessions_on(&self, date: NaiveDate) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.date == date)
    }

    /// Color of the session's first tag, or the neutral color if it doesn't resolve.
    pub fn session_color(&self, session: &Session) -> TagColor {
        session
            .primary_tag()
            .and_then(|id| self.tag(id))
            .map(|t| t.color)
            .unwrap_or(TagColor::NEUTRAL)
    }

    /// The last reminder the user dismissed, read from the backend.
    pub fn dismissed_reminder(&self) -> Option<DismissedReminder> {
        storage::load_dismissed_reminder(&self.backend)
    }

    pub fn save_dismissed_reminder(&mut self, record: &DismissedReminder) -> ScheduleResult<()> {
        storage::save_dismissed_reminder(&mut self.backend, record)
    }

    // SESSIONS:

    pub fn create_session(&mut self, draft: SessionDraft) -> ScheduleResult<Session> {
        let id = fresh_id(&mut self.ids, |id| self.sessions.iter().any(|s| s.id == id));
        let session = draft.with_id(id);
        self.sessions.push(session.clone());
        self.persist_sessions()?;
        Ok(session)
    }

    /// Replace the session with the same id. Returns false (and changes
    /// nothing) if no such session exists.
    pub fn update_session(&mut self, session: Session) -> ScheduleResult<bool> {
        let found = match self.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => {
                *existing = session;
                true
            }
            None => false,
        };
        self.persist_sessions()?;
        Ok(found)
    }

    /// Remove the session with `id`. Returns false if there was none.
    pub fn delete_session(&mut self, id: &str) -> ScheduleResult<bool> {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        let removed = self.sessions.len() != before;
        self.persist_sessions()?;
        Ok(removed)
    }

    // TAGS:

    pub fn create_tag(&mut self, name: impl Into<String>, color: TagColor) -> ScheduleResult<Tag> {
        let id = fresh_id(&mut self.ids, |id| self.tags.iter().any(|t| t.id == id));
        let tag = Tag::new(id, name, color);
        self.tags.push(tag.clone());
        self.persist_tags()?;
        Ok(tag)
    }

    /// Remove the tag with `id`. Sessions referencing it are left as they are.
    pub fn delete_tag(&mut self, id: &str) -> ScheduleResult<bool> {
        let before = self.tags.len();
        self.tags.retain(|t| t.id != id);
        let removed = self.tags.len() != before;
        self.persist_tags()?;
        Ok(removed)
    }

    fn persist_sessions(&mut self) -> ScheduleResult<()> {
        storage::save_sessions(&mut self.backend, &self.sessions)
    }

    fn persist_tags(&mut self) -> ScheduleResult<()> {
        storage::save_tags(&mut self.backend, &self.tags)
    }
}

fn fresh_id(ids: &mut impl IdGenerator, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = ids.new_id();
        if !taken(&id) {
            return id;
        }
        log::debug!("generated id '{id}' already in use, retrying");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SESSIONS_KEY, TAGS_KEY};
    use crate::id::SequentialIds;
    use crate::storage::MemoryStore;
    use crate::tag::default_tags;

    fn store() -> ScheduleStore<MemoryStore, SequentialIds> {
        ScheduleStore::with_ids(MemoryStore::new(), SequentialIds::new("id"))
    }

    fn draft(date: &str, tags: &[&str]) -> SessionDraft {
        SessionDraft {
            title: "拍摄档期".into(),
            client_name: "客户".into(),
            date: date.parse().unwrap(),
            time: "00:00".into(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            notes: Some("note".into()),
        }
    }

    fn stored_sessions(store: &ScheduleStore<MemoryStore, SequentialIds>) -> Vec<Session> {
        let raw = store.backend().get(SESSIONS_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn stored_tags(store: &ScheduleStore<MemoryStore, SequentialIds>) -> Vec<Tag> {
        let raw = store.backend().get(TAGS_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn starts_with_default_tags_and_no_sessions() {
        let store = store();
        assert!(store.sessions().is_empty());
        assert_eq!(store.tags(), default_tags().as_slice());
    }

    #[test]
    fn create_assigns_id_and_persists() {
        let mut store = store();
        let session = store.create_session(draft("2024-03-15", &["3"])).unwrap();

        assert_eq!(session.id, "id-1");
        assert_eq!(store.sessions(), &[session]);
        assert_eq!(stored_sessions(&store), store.sessions());
    }

    #[test]
    fn update_replaces_matching_session() {
        let mut store = store();
        let mut session = store.create_session(draft("2024-03-15", &[])).unwrap();
        session.notes = Some("改到下午".into());

        assert!(store.update_session(session.clone()).unwrap());
        assert_eq!(store.session(&session.id), Some(&session));
        assert_eq!(stored_sessions(&store), store.sessions());
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = store();
        store.create_session(draft("2024-03-15", &[])).unwrap();
        let before = store.sessions().to_vec();

        let ghost = draft("2025-01-01", &[]).with_id("missing".into());
        assert!(!store.update_session(ghost).unwrap());
        assert_eq!(store.sessions(), before.as_slice());
        assert_eq!(stored_sessions(&store), before);
    }

    #[test]
    fn delete_unknown_id_leaves_lists_unchanged() {
        let mut store = store();
        store.create_session(draft("2024-03-15", &[])).unwrap();
        let sessions = store.sessions().to_vec();
        let tags = store.tags().to_vec();

        assert!(!store.delete_session("nope").unwrap());
        assert!(!store.delete_tag("nope").unwrap());
        assert_eq!(store.sessions(), sessions.as_slice());
        assert_eq!(store.tags(), tags.as_slice());
    }

    #[test]
    fn delete_session_persists() {
        let mut store = store();
        let a = store.create_session(draft("2024-03-15", &[])).unwrap();
        let b = store.create_session(draft("2024-03-16", &[])).unwrap();

        assert!(store.delete_session(&a.id).unwrap());
        assert_eq!(store.sessions(), &[b]);
        assert_eq!(stored_sessions(&store), store.sessions());
    }

    #[test]
    fn deleting_a_tag_keeps_referencing_sessions() {
        let mut store = store();
        let session = store.create_session(draft("2024-03-15", &["3"])).unwrap();

        assert!(store.delete_tag("3").unwrap());
        assert!(store.tag("3").is_none());
        assert_eq!(store.session(&session.id).unwrap().tags, vec!["3".to_string()]);
        assert_eq!(store.session_color(&session), TagColor::NEUTRAL);
        assert_eq!(stored_tags(&store), store.tags());
    }

    #[test]
    fn create_tag_appends_and_persists() {
        let mut store = store();
        let tag = store.create_tag("亲子写真", TagColor::Rose).unwrap();

        assert_eq!(store.tags().len(), 6);
        assert_eq!(store.tags().last(), Some(&tag));
        assert_eq!(stored_tags(&store), store.tags());
    }

    #[test]
    fn colliding_generated_ids_are_skipped() {
        // Generator hands out "1", "2", ... which collide with the preset tags.
        struct Counter(u32);
        impl IdGenerator for Counter {
            fn new_id(&mut self) -> String {
                self.0 += 1;
                self.0.to_string()
            }
        }

        let mut store = ScheduleStore::with_ids(MemoryStore::new(), Counter(0));
        let tag = store.create_tag("亲子写真", TagColor::Sky).unwrap();
        assert_eq!(tag.id, "6");
    }

    #[test]
    fn session_color_uses_first_tag() {
        let mut store = store();
        let session = store.create_session(draft("2024-03-15", &["4", "1"])).unwrap();
        assert_eq!(store.session_color(&session), TagColor::Purple);

        let untagged = store.create_session(draft("2024-03-15", &[])).unwrap();
        assert_eq!(store.session_color(&untagged), TagColor::NEUTRAL);
    }

    #[test]
    fn sessions_on_filters_by_date() {
        let mut store = store();
        let a = store.create_session(draft("2024-03-15", &[])).unwrap();
        store.create_session(draft("2024-03-16", &[])).unwrap();
        let c = store.create_session(draft("2024-03-15", &[])).unwrap();

        let on_day: Vec<_> = store.sessions_on("2024-03-15".parse().unwrap()).collect();
        assert_eq!(on_day, vec![&a, &c]);
    }
}
