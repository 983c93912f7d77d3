use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dw, extract_id, init_and_signup, setup_test_db};

#[test]
fn test_init_applies_migrations() {
    let db_path = setup_test_db("init_migrations");

    dw().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized").and(contains("3 migrations applied")));

    dw().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn test_work_add_list_and_duplicate() {
    let db_path = setup_test_db("work_add_list");
    init_and_signup(&db_path, "work@test.io");

    dw().args(["--db", &db_path, "work", "add", "2025-09-22", "setup : project"])
        .assert()
        .success()
        .stdout(contains("Work for 22.09.2025 saved"));

    dw().args(["--db", &db_path, "work", "add", "2025-09-22", "again"])
        .assert()
        .failure()
        .stderr(contains(
            "A work entry for 22.09.2025 already exists! Please edit the existing entry instead.",
        ));

    dw().args(["--db", &db_path, "work", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(
            contains("22.09.2025")
                .and(contains("setup : project"))
                .and(contains("again").not())
                .and(contains("Page 1 of 1")),
        );
}

#[test]
fn test_work_list_paginates_by_eight() {
    let db_path = setup_test_db("work_pages");
    init_and_signup(&db_path, "pages@test.io");

    for day in 1..=10 {
        let date = format!("2025-11-{day:02}");
        dw().args(["--db", &db_path, "work", "add", &date, &format!("task {day}")])
            .assert()
            .success();
    }

    dw().args(["--db", &db_path, "work", "list", "--period", "2025-11"])
        .assert()
        .success()
        .stdout(
            contains("10.11.2025")
                .and(contains("03.11.2025"))
                .and(contains("02.11.2025").not())
                .and(contains("Page 1 of 2"))
                .and(contains("next: --page 2")),
        );

    dw().args([
        "--db", &db_path, "work", "list", "--period", "2025-11", "--page", "7",
    ])
    .assert()
    .success()
    .stdout(
        contains("02.11.2025")
            .and(contains("01.11.2025"))
            .and(contains("Page 2 of 2"))
            .and(contains("prev: --page 1"))
            .and(contains("next: --page").not()),
    );
}

#[test]
fn test_work_edit_warns_on_taken_date() {
    let db_path = setup_test_db("work_edit_warn");
    init_and_signup(&db_path, "editor@test.io");

    dw().args(["--db", &db_path, "work", "add", "2025-10-06", "first"])
        .assert()
        .success();

    let out = dw()
        .args(["--db", &db_path, "work", "add", "2025-10-07", "second"])
        .output()
        .expect("run work add");
    let id = extract_id(&out.stdout);

    dw().args(["--db", &db_path, "work", "edit", &id, "2025-10-06", "moved"])
        .assert()
        .success()
        .stdout(contains("Another work entry already exists for 06.10.2025"));
}

#[test]
fn test_work_delete_confirmation() {
    let db_path = setup_test_db("work_delete_confirm");
    init_and_signup(&db_path, "deleter@test.io");

    let out = dw()
        .args(["--db", &db_path, "work", "add", "2025-10-11", "Saturday : holiday"])
        .output()
        .expect("run work add");
    let id = extract_id(&out.stdout);

    dw().args(["--db", &db_path, "work", "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Delete Work").and(contains("Deletion cancelled")));

    dw().args(["--db", &db_path, "work", "del", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Work entry deleted"));

    dw().args(["--db", &db_path, "work", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("No work entries"));
}

#[test]
fn test_todo_cli_flow() {
    let db_path = setup_test_db("todo_cli_flow");
    init_and_signup(&db_path, "todo@test.io");

    let out = dw()
        .args(["--db", &db_path, "todo", "add", "2025-09-22", "09:00", "standup"])
        .output()
        .expect("run todo add");
    let first = extract_id(&out.stdout);

    dw().args(["--db", &db_path, "todo", "add", "2025-09-22", "10:00", "review"])
        .assert()
        .success();

    dw().args(["--db", &db_path, "todo", "add", "2025-09-22", "25:00", "bad"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    dw().args(["--db", &db_path, "todo", "toggle", &first])
        .assert()
        .success()
        .stdout(contains("completed"));

    let out = dw()
        .args(["--db", &db_path, "todo", "list"])
        .output()
        .expect("run todo list");
    let listing = String::from_utf8_lossy(&out.stdout);
    let review = listing.find("review").expect("review listed");
    let standup = listing.find("standup").expect("standup listed");
    assert!(review < standup, "pending todos come first:\n{listing}");
    assert!(listing.contains("1 pending"));

    dw().args(["--db", &db_path, "todo", "del", &first])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Delete Todo").and(contains("Todo deleted")));
}

#[test]
fn test_day_and_overview() {
    let db_path = setup_test_db("day_overview");
    init_and_signup(&db_path, "calendar@test.io");

    dw().args(["--db", &db_path, "work", "add", "2025-12-24", "backend APIs"])
        .assert()
        .success();
    dw().args(["--db", &db_path, "todo", "add", "2025-12-24", "17:00", "ship it"])
        .assert()
        .success();

    dw().args(["--db", &db_path, "day", "2025-12-24"])
        .assert()
        .success()
        .stdout(
            contains("24 Dec, 25 Wednesday")
                .and(contains("backend APIs"))
                .and(contains("Tasks for Dec 24"))
                .and(contains("ship it")),
        );

    dw().args(["--db", &db_path, "day", "2025-12-25"])
        .assert()
        .success()
        .stdout(contains("No work logged").and(contains("No tasks")));

    dw().args(["--db", &db_path, "overview"])
        .assert()
        .success()
        .stdout(
            contains("Hello, calendar")
                .and(contains("Pending todos"))
                .and(contains("Total works      : 1")),
        );
}

#[test]
fn test_invalid_date_is_rejected() {
    let db_path = setup_test_db("invalid_date");
    init_and_signup(&db_path, "dates@test.io");

    dw().args(["--db", &db_path, "work", "add", "22/09/2025", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
