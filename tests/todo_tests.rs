mod common;
use common::{d, memory_store, t};
use dailywork::core::calendar::DayView;
use dailywork::core::overview::Overview;
use dailywork::core::todo::pending_first;
use dailywork::core::{Dashboard, DeleteOutcome, TodoManager};
use dailywork::errors::AppError;

fn times(todos: &TodoManager<'_>) -> Vec<String> {
    todos.entries().iter().map(|t| t.time_str()).collect()
}

#[test]
fn test_completing_moves_todo_after_pending() {
    let (store, me) = memory_store("three@test.io");
    let mut todos = TodoManager::open(&store, &me);

    let early = todos.create(d("2025-09-22"), t("09:00"), "standup").unwrap();
    todos.create(d("2025-09-22"), t("10:00"), "review").unwrap();
    todos.create(d("2025-09-22"), t("11:00"), "deploy").unwrap();
    assert_eq!(times(&todos), vec!["09:00", "10:00", "11:00"]);

    todos.toggle(&early.id).unwrap();

    assert_eq!(times(&todos), vec!["10:00", "11:00", "09:00"]);
}

#[test]
fn test_store_order_is_date_then_time() {
    let (store, me) = memory_store("order@test.io");
    let mut todos = TodoManager::open(&store, &me);

    todos.create(d("2025-10-02"), t("08:00"), "c").unwrap();
    todos.create(d("2025-10-01"), t("18:00"), "b").unwrap();
    todos.create(d("2025-10-01"), t("07:30"), "a").unwrap();

    let reasons: Vec<&str> = todos.entries().iter().map(|t| t.reason.as_str()).collect();
    assert_eq!(reasons, vec!["a", "b", "c"]);
}

#[test]
fn test_partition_is_stable() {
    let (store, me) = memory_store("stable@test.io");
    for (i, hh) in ["08:00", "09:00", "10:00", "11:00", "12:00"].iter().enumerate() {
        let todo = store
            .add_todo(&me.uid, d("2025-10-01"), t(hh), &format!("task {i}"))
            .unwrap();
        if i % 2 == 0 {
            store.set_todo_completed(&me.uid, &todo.id, true).unwrap();
        }
    }

    let ordered = pending_first(store.list_todos(&me.uid).unwrap());
    let reasons: Vec<&str> = ordered.iter().map(|t| t.reason.as_str()).collect();

    assert_eq!(
        reasons,
        vec!["task 1", "task 3", "task 0", "task 2", "task 4"]
    );
    let first_done = ordered.iter().position(|t| t.completed).unwrap();
    assert!(ordered[first_done..].iter().all(|t| t.completed));
}

#[test]
fn test_toggle_twice_restores_state() {
    let (store, me) = memory_store("toggle@test.io");
    let mut todos = TodoManager::open(&store, &me);
    let original = todos.create(d("2025-10-09"), t("14:15"), "fix direction").unwrap();

    assert!(todos.toggle(&original.id).unwrap());
    assert!(!todos.toggle(&original.id).unwrap());

    let after = todos.get(&original.id).unwrap();
    assert_eq!(after, &original);
}

#[test]
fn test_toggle_leaves_other_fields_alone() {
    let (store, me) = memory_store("fields@test.io");
    let mut todos = TodoManager::open(&store, &me);
    let original = todos.create(d("2025-10-09"), t("14:15"), "fix direction").unwrap();

    todos.toggle(&original.id).unwrap();
    let after = todos.get(&original.id).unwrap();

    assert!(after.completed);
    assert_eq!(after.date, original.date);
    assert_eq!(after.time, original.time);
    assert_eq!(after.reason, original.reason);
    assert_eq!(after.alerted, original.alerted);
    assert_eq!(after.created_at, original.created_at);
}

#[test]
fn test_edit_keeps_status() {
    let (store, me) = memory_store("keep@test.io");
    let mut todos = TodoManager::open(&store, &me);
    let todo = todos.create(d("2025-10-09"), t("14:15"), "old").unwrap();
    todos.toggle(&todo.id).unwrap();

    todos
        .update(&todo.id, d("2025-10-10"), t("09:45"), "new")
        .unwrap();

    let after = todos.get(&todo.id).unwrap();
    assert!(after.completed);
    assert_eq!(after.reason, "new");
    assert_eq!(after.time_str(), "09:45");
}

#[test]
fn test_empty_reason_rejected() {
    let (store, me) = memory_store("reason@test.io");
    let mut todos = TodoManager::open(&store, &me);

    let err = todos.create(d("2025-10-09"), t("14:15"), "").unwrap_err();
    assert!(matches!(err, AppError::MissingField("reason")));
    assert!(store.list_todos(&me.uid).unwrap().is_empty());
}

#[test]
fn test_delete_todo_asks_with_its_own_wording() {
    let (store, me) = memory_store("deltodo@test.io");
    let mut todos = TodoManager::open(&store, &me);
    let todo = todos.create(d("2025-10-09"), t("14:15"), "x").unwrap();

    let mut seen = String::new();
    let outcome = todos
        .delete(&todo.id, &mut |title: &str, message: &str| {
            seen = format!("{title}|{message}");
            true
        })
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(seen, "Delete Todo|Are you sure you want to delete this todo?");
    assert!(todos.entries().is_empty());
}

#[test]
fn test_day_view_matches_exact_date() {
    let (store, me) = memory_store("day@test.io");
    let mut dash = Dashboard::open(&store, me.clone());

    dash.works.create(d("2025-12-24"), "backend APIs").unwrap();
    dash.works.create(d("2025-12-25"), "christmas leave").unwrap();
    let done = dash
        .todos
        .create(d("2025-12-24"), t("09:00"), "morning")
        .unwrap();
    dash.todos
        .create(d("2025-12-24"), t("17:00"), "evening")
        .unwrap();
    dash.todos
        .create(d("2025-12-23"), t("17:00"), "yesterday")
        .unwrap();
    dash.todos.toggle(&done.id).unwrap();

    let day: DayView<'_> = dash.day_view(d("2025-12-24"));
    assert_eq!(day.works.len(), 1);
    assert_eq!(day.works[0].description, "backend APIs");
    let reasons: Vec<&str> = day.todos.iter().map(|t| t.reason.as_str()).collect();
    assert_eq!(reasons, vec!["evening", "morning"]);
    assert_eq!(day.title(), "24 Dec, 25 Wednesday");
    assert_eq!(day.heading(), "Tasks for Dec 24");

    assert!(dash.day_view(d("2025-12-26")).is_empty());
    dash.close();
    assert_eq!(store.live_subscriptions(), 0);
}

#[test]
fn test_overview_counts() {
    let (store, me) = memory_store("overview@test.io");
    let mut dash = Dashboard::open(&store, me);

    dash.works.create(d("2025-12-01"), "a").unwrap();
    dash.works.create(d("2025-12-02"), "b").unwrap();
    dash.works.create(d("2024-12-03"), "last year").unwrap();
    let todo = dash.todos.create(d("2025-12-02"), t("10:00"), "x").unwrap();
    dash.todos.create(d("2025-12-02"), t("11:00"), "y").unwrap();
    dash.todos.toggle(&todo.id).unwrap();

    let stats = dash.overview(d("2025-12-18"));
    assert_eq!(
        stats,
        Overview {
            this_month_works: 2,
            pending_todos: 1,
            total_works: 3,
            total_todos: 2,
        }
    );
    dash.close();
}

#[test]
fn test_dashboard_reports_failed_todo_subscription() {
    let db_path = common::setup_test_db("dashboard_notice");
    let store = dailywork::store::Store::open(&db_path).unwrap();
    let me = store.create_account("notices@test.io", "secret123").unwrap();

    let mut dash = Dashboard::open(&store, me);
    dash.works.create(d("2025-12-24"), "backend APIs").unwrap();
    dash.todos
        .create(d("2025-12-24"), t("09:00"), "morning")
        .unwrap();
    assert_eq!(dash.notices().count(), 0);

    let other = dailywork::store::Store::open(&db_path).unwrap();
    other.conn().execute_batch("DROP TABLE todos;").unwrap();
    store.sync().unwrap();

    assert!(!dash.todos.refresh());
    assert!(!dash.todos.is_live());
    assert!(dash.works.is_live());
    assert_eq!(
        dash.notices().collect::<Vec<_>>(),
        vec!["Failed to load todos. Please check permissions or indexes."]
    );
    // last good list is kept
    assert_eq!(dash.day_view(d("2025-12-24")).todos.len(), 1);
    dash.close();
}
