use std::collections::HashSet;

use chrono::NaiveDate;
use meow_schedule_core::constants::{SESSIONS_KEY, TAGS_KEY};
use meow_schedule_core::form::{FormOutput, SessionForm, TagForm};
use meow_schedule_core::reminder::{NoopNotifier, ReminderChecker};
use meow_schedule_core::storage::{FileStore, KeyValueStore, MemoryStore};
use meow_schedule_core::tag::default_tags;
use meow_schedule_core::window::CalendarWindow;
use meow_schedule_core::{ScheduleStore, Session, TagColor};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn stored<K: KeyValueStore>(kv: &K, key: &str) -> serde_json::Value {
    serde_json::from_str(&kv.get(key).unwrap().unwrap()).unwrap()
}

fn apply<K: KeyValueStore>(store: &mut ScheduleStore<K>, form: &SessionForm) -> Session {
    match form.submit(store.tags()).unwrap() {
        FormOutput::Create(draft) => store.create_session(draft).unwrap(),
        FormOutput::Update(session) => {
            store.update_session(session.clone()).unwrap();
            session
        }
    }
}

#[test]
fn newborn_session_scenario() {
    let mut store = ScheduleStore::open(MemoryStore::new());
    assert_eq!(store.tags(), default_tags().as_slice());
    assert!(store.sessions().is_empty());

    let mut form = SessionForm::new(date("2024-03-15"));
    form.toggle_tag("3");
    form.notes = "哈哈".into();
    let session = apply(&mut store, &form);

    assert_eq!(store.sessions().len(), 1);
    assert_eq!(session.title, "新生儿");

    let record = stored(store.backend(), SESSIONS_KEY);
    let items = record.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], session.id.as_str());
    assert_eq!(items[0]["title"], "新生儿");
    assert_eq!(items[0]["date"], "2024-03-15");
    assert_eq!(items[0]["tags"], serde_json::json!(["3"]));
    assert_eq!(items[0]["notes"], "哈哈");
}

#[test]
fn persisted_records_track_every_operation() {
    let mut store = ScheduleStore::open(MemoryStore::new());

    let check = |store: &ScheduleStore<MemoryStore>| {
        assert_eq!(
            stored(store.backend(), SESSIONS_KEY),
            serde_json::to_value(store.sessions()).unwrap()
        );
    };

    let mut form = SessionForm::new(date("2024-05-01"));
    form.notes = "第一场".into();
    let first = apply(&mut store, &form);
    check(&store);

    let mut edit = SessionForm::editing(&first);
    edit.toggle_tag("1");
    apply(&mut store, &edit);
    check(&store);
    assert_eq!(store.session(&first.id).unwrap().title, "外景拍摄");

    store.delete_session("not-there").unwrap();
    check(&store);

    store.delete_session(&first.id).unwrap();
    check(&store);
    assert!(store.sessions().is_empty());

    let (name, color) = TagForm::new("亲子写真", TagColor::Violet).submit().unwrap();
    let tag = store.create_tag(name, color).unwrap();
    assert_eq!(
        stored(store.backend(), TAGS_KEY),
        serde_json::to_value(store.tags()).unwrap()
    );

    store.delete_tag(&tag.id).unwrap();
    assert_eq!(
        stored(store.backend(), TAGS_KEY),
        serde_json::to_value(default_tags()).unwrap()
    );
}

#[test]
fn ids_stay_unique_over_rapid_creation() {
    let mut store = ScheduleStore::open(MemoryStore::new());
    let mut form = SessionForm::new(date("2024-05-01"));
    form.notes = "批量".into();

    for _ in 0..200 {
        apply(&mut store, &form);
        store.create_tag("t", TagColor::Gray).unwrap();
    }

    let session_ids: HashSet<_> = store.sessions().iter().map(|s| s.id.clone()).collect();
    let tag_ids: HashSet<_> = store.tags().iter().map(|t| t.id.clone()).collect();
    assert_eq!(session_ids.len(), 200);
    assert_eq!(tag_ids.len(), 205);
}

#[test]
fn file_backed_store_reloads_state() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let mut store = ScheduleStore::open(FileStore::new(dir.path()));
        let mut form = SessionForm::new(date("2024-02-29"));
        form.notes = "闰日".into();
        form.toggle_tag("5");
        form.toggle_tag("2");
        let session = apply(&mut store, &form);
        store.create_tag("亲子写真", TagColor::Rose).unwrap();
        session
    };

    let reopened = ScheduleStore::open(FileStore::new(dir.path()));
    assert_eq!(reopened.sessions(), &[created]);
    assert_eq!(reopened.tags().len(), 6);
    assert_eq!(reopened.tags()[5].color, TagColor::Rose);
}

#[test]
fn legacy_browser_records_load() {
    let mut kv = MemoryStore::new();
    kv.set(
        TAGS_KEY,
        r#"[{"id":"1","name":"外景拍摄","color":"bg-green-100 text-green-700"},
            {"id":"abc","name":"亲子写真","color":"bg-violet-100 text-violet-700"}]"#,
    )
    .unwrap();
    kv.set(
        SESSIONS_KEY,
        r#"[{"id":"s","title":"亲子写真","clientName":"客户","date":"2024-06-01","time":"00:00","tags":["abc"],"notes":"公园"}]"#,
    )
    .unwrap();

    let store = ScheduleStore::open(kv);
    let session = &store.sessions()[0];
    assert_eq!(store.session_color(session), TagColor::Violet);
}

#[test]
fn calendar_and_reminder_from_store_state() {
    let mut store = ScheduleStore::open(MemoryStore::new());
    for (day, tag) in [("2024-01-30", "1"), ("2024-02-03", "4"), ("2024-02-20", "2")] {
        let mut form = SessionForm::new(date(day));
        form.notes = "拍摄".into();
        form.toggle_tag(tag);
        apply(&mut store, &form);
    }

    let window = CalendarWindow::anchored_at(date("2024-01-29")).unwrap();
    let days = window.days(store.sessions(), date("2024-01-29"));
    let with_sessions: Vec<_> = days
        .iter()
        .filter(|d| !d.sessions.is_empty())
        .map(|d| d.date)
        .collect();
    assert_eq!(with_sessions, vec![date("2024-01-30"), date("2024-02-03")]);
    assert!(!days[0].is_current_month);

    let mut checker = ReminderChecker::new();
    checker.check(store.sessions(), date("2024-01-29"), &mut NoopNotifier);
    assert_eq!(checker.notice().unwrap()[0].date, date("2024-01-30"));
}

#[test]
fn dismissed_reminder_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let today = date("2024-03-14");

    let mut store = ScheduleStore::open(FileStore::new(dir.path()));
    let mut form = SessionForm::new(date("2024-03-15"));
    form.notes = "外景".into();
    apply(&mut store, &form);

    let mut checker = ReminderChecker::with_dismissed(store.dismissed_reminder());
    checker.check(store.sessions(), today, &mut NoopNotifier);
    assert!(checker.notice().is_some());

    let record = checker.dismiss().unwrap();
    store.save_dismissed_reminder(&record).unwrap();
    drop(store);

    let mut store = ScheduleStore::open(FileStore::new(dir.path()));
    let mut checker = ReminderChecker::with_dismissed(store.dismissed_reminder());
    checker.check(store.sessions(), today, &mut NoopNotifier);
    assert!(checker.notice().is_none());

    // Another shoot tomorrow changes the set, so the notice returns.
    let mut form = SessionForm::new(date("2024-03-15"));
    form.notes = "棚拍".into();
    apply(&mut store, &form);
    checker.check(store.sessions(), today, &mut NoopNotifier);
    assert_eq!(checker.notice().map(|n| n.len()), Some(2));
}
