mod common;
use common::{d, memory_store};
use dailywork::core::pagination::{PAGE_SIZE, paginate};
use dailywork::core::{DateRange, DeleteOutcome, WorkManager};
use dailywork::errors::AppError;
use dailywork::import::{HISTORY, run_import};

#[test]
fn test_create_then_read_round_trip() {
    let (store, me) = memory_store("roundtrip@test.io");
    let mut works = WorkManager::open(&store, &me);

    let created = works.create(d("2025-09-22"), "setup").unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(works.entries().len(), 1);
    assert_eq!(works.entries()[0].date, d("2025-09-22"));
    assert_eq!(works.entries()[0].description, "setup");
    assert_eq!(works.entries()[0].id, created.id);
}

#[test]
fn test_duplicate_date_rejected_without_write() {
    let (store, me) = memory_store("dup@test.io");
    let mut works = WorkManager::open(&store, &me);

    works.create(d("2025-09-22"), "setup").unwrap();
    let err = works.create(d("2025-09-22"), "again").unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "A work entry for 22.09.2025 already exists! Please edit the existing entry instead."
    );
    assert_eq!(works.entries().len(), 1);
    assert_eq!(store.list_works(&me.uid).unwrap().len(), 1);
}

#[test]
fn test_empty_description_rejected() {
    let (store, me) = memory_store("empty@test.io");
    let mut works = WorkManager::open(&store, &me);

    let err = works.create(d("2025-09-22"), "   ").unwrap_err();
    assert!(matches!(err, AppError::MissingField("description")));
    assert!(store.list_works(&me.uid).unwrap().is_empty());
}

#[test]
fn test_edit_does_not_recheck_duplicate_date() {
    let (store, me) = memory_store("edit@test.io");
    let mut works = WorkManager::open(&store, &me);

    works.create(d("2025-10-06"), "first").unwrap();
    let second = works.create(d("2025-10-07"), "second").unwrap();

    assert!(works.date_taken_by_other(&second.id, d("2025-10-06")));
    assert!(!works.date_taken_by_other(&second.id, d("2025-10-07")));

    works.update(&second.id, d("2025-10-06"), "moved").unwrap();

    let same_day: Vec<_> = works
        .entries()
        .iter()
        .filter(|w| w.date == d("2025-10-06"))
        .collect();
    assert_eq!(same_day.len(), 2);
}

#[test]
fn test_delete_requires_confirmation() {
    let (store, me) = memory_store("delete@test.io");
    let mut works = WorkManager::open(&store, &me);
    let entry = works.create(d("2025-10-11"), "Saturday : holiday").unwrap();

    let mut asked = Vec::new();
    let outcome = works
        .delete(&entry.id, &mut |title: &str, message: &str| {
            asked.push((title.to_string(), message.to_string()));
            false
        })
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(works.entries().len(), 1);
    assert_eq!(asked[0].0, "Delete Work");
    assert_eq!(
        asked[0].1,
        "Are you sure you want to delete this work entry?"
    );

    let outcome = works
        .delete(&entry.id, &mut |_: &str, _: &str| true)
        .unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(works.entries().is_empty());
}

#[test]
fn test_resolve_id_by_prefix() {
    let (store, me) = memory_store("prefix@test.io");
    let mut works = WorkManager::open(&store, &me);
    let entry = works.create(d("2025-10-13"), "git").unwrap();

    assert_eq!(works.resolve_id(&entry.id).unwrap(), entry.id);
    assert_eq!(works.resolve_id(&entry.id[..6]).unwrap(), entry.id);
    assert!(matches!(
        works.resolve_id("zzzzzzzz"),
        Err(AppError::NotFound(_))
    ));
    // too short to be used as a prefix
    assert!(works.resolve_id(&entry.id[..2]).is_err());
}

#[test]
fn test_range_filter_is_inclusive() {
    let (store, me) = memory_store("range@test.io");
    let mut works = WorkManager::open(&store, &me);
    for (date, desc) in [
        ("2025-11-30", "before"),
        ("2025-12-01", "start"),
        ("2025-12-15", "middle"),
        ("2025-12-31", "end"),
        ("2026-01-01", "after"),
    ] {
        works.create(d(date), desc).unwrap();
    }

    let range = DateRange::between(d("2025-12-01"), d("2025-12-31"));
    let picked: Vec<&str> = works
        .filter(&range)
        .iter()
        .map(|w| w.description.as_str())
        .collect();

    assert_eq!(picked, vec!["end", "middle", "start"]);
}

#[test]
fn test_open_ended_range() {
    let range = DateRange::up_to(d("2025-12-31"));
    assert!(range.contains(d("1999-01-01")));
    assert!(range.contains(d("2025-12-31")));
    assert!(!range.contains(d("2026-01-01")));
    assert_eq!(range.label(), " to 2025-12-31");
}

#[test]
fn test_month_to_date_default() {
    let range = DateRange::month_to_date(d("2025-12-18"));
    assert_eq!(range.start, Some(d("2025-12-01")));
    assert_eq!(range.end, Some(d("2025-12-18")));
}

#[test]
fn test_period_expressions() {
    let year = DateRange::from_period("2025").unwrap();
    assert_eq!(year, DateRange::between(d("2025-01-01"), d("2025-12-31")));

    let feb = DateRange::from_period("2024-02").unwrap();
    assert_eq!(feb, DateRange::between(d("2024-02-01"), d("2024-02-29")));

    let span = DateRange::from_period("2025-09:2026-02").unwrap();
    assert_eq!(span, DateRange::between(d("2025-09-01"), d("2026-02-28")));

    assert!(DateRange::from_period("2025-13").is_err());
    assert!(DateRange::from_period("2025:2025-01").is_err());
    assert!(DateRange::from_period("née").is_err());
    assert!(DateRange::from_period("2025x12").is_err());
    assert!(DateRange::from_period("2025-1x").is_err());
    assert!(DateRange::from_period("2025x12:2025-12").is_err());
}

#[test]
fn test_december_filter_over_imported_history() {
    let (store, me) = memory_store("december@test.io");
    let summary = run_import(&store, &me.uid, HISTORY);
    assert_eq!(summary.uploaded, HISTORY.len());

    let works = WorkManager::open(&store, &me);
    let december = works.filter(&DateRange::between(d("2025-12-01"), d("2025-12-31")));

    let expected = HISTORY
        .iter()
        .filter(|(date, _)| date.starts_with("2025-12"))
        .count();

    assert_eq!(december.len(), expected);
    assert_eq!(december.len(), 18);
    assert!(december.iter().all(|w| w.date_str().starts_with("2025-12")));
}

#[test]
fn test_pagination_offsets_and_clamping() {
    let items: Vec<usize> = (0..20).collect();

    let first = paginate(&items, 1);
    assert_eq!(first.items, &items[0..PAGE_SIZE]);
    assert_eq!(first.total_pages, 3);
    assert!(!first.has_prev());
    assert!(first.has_next());

    let last = paginate(&items, 3);
    assert_eq!(last.items, &items[16..20]);
    assert!(!last.has_next());

    let clamped_high = paginate(&items, 99);
    assert_eq!(clamped_high.number, 3);
    assert_eq!(clamped_high.items, &items[16..20]);

    let clamped_low = paginate(&items, 0);
    assert_eq!(clamped_low.number, 1);

    let empty: Vec<usize> = Vec::new();
    let page = paginate(&empty, 4);
    assert_eq!(page.number, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn test_manager_keeps_last_list_on_subscription_failure() {
    let db_path = common::setup_test_db("manager_failure");
    let store = dailywork::store::Store::open(&db_path).unwrap();
    let me = store.create_account("notice@test.io", "secret123").unwrap();

    let mut works = WorkManager::open(&store, &me);
    works.create(d("2025-12-25"), "christmas leave").unwrap();

    let other = dailywork::store::Store::open(&db_path).unwrap();
    other.conn().execute_batch("DROP TABLE works;").unwrap();
    store.sync().unwrap();

    assert!(!works.refresh());
    assert!(works.notice().is_some());
    assert!(!works.is_live());
    assert_eq!(works.entries().len(), 1);
}
