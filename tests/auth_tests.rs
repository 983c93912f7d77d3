use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dw, init_and_signup, setup_test_db};

#[test]
fn test_signup_password_mismatch_creates_nothing() {
    let db_path = setup_test_db("signup_mismatch");

    dw().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dw().args([
        "--db",
        &db_path,
        "signup",
        "mismatch@test.io",
        "--password",
        "secret123",
        "--confirm",
        "secret124",
    ])
    .assert()
    .failure()
    .stderr(contains("Passwords do not match"));

    // no account was created, so login fails
    dw().args([
        "--db",
        &db_path,
        "login",
        "mismatch@test.io",
        "--password",
        "secret123",
    ])
    .assert()
    .failure()
    .stderr(contains("Login Failed"));
}

#[test]
fn test_signup_then_whoami() {
    let db_path = setup_test_db("signup_whoami");
    init_and_signup(&db_path, "Someone@Test.io");

    dw().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("someone@test.io"));
}

#[test]
fn test_signup_rejections_are_reported() {
    let db_path = setup_test_db("signup_rejections");
    init_and_signup(&db_path, "taken@test.io");

    dw().args([
        "--db",
        &db_path,
        "signup",
        "taken@test.io",
        "--password",
        "secret123",
        "--confirm",
        "secret123",
    ])
    .assert()
    .failure()
    .stderr(contains("Failed to create an account").and(contains("already in use")));

    dw().args([
        "--db",
        &db_path,
        "signup",
        "short@test.io",
        "--password",
        "abc",
        "--confirm",
        "abc",
    ])
    .assert()
    .failure()
    .stderr(contains("at least 6 characters"));

    dw().args([
        "--db",
        &db_path,
        "signup",
        "not-an-email",
        "--password",
        "secret123",
        "--confirm",
        "secret123",
    ])
    .assert()
    .failure()
    .stderr(contains("badly formatted"));
}

#[test]
fn test_login_failure_message_is_generic() {
    let db_path = setup_test_db("login_generic");
    init_and_signup(&db_path, "known@test.io");

    for (email, password) in [
        ("known@test.io", "wrong-password"),
        ("unknown@test.io", "secret123"),
    ] {
        dw().args(["--db", &db_path, "login", email, "--password", password])
            .assert()
            .failure()
            .stderr(contains("Login Failed").and(contains("wrong-password").not()));
    }

    dw().args([
        "--db",
        &db_path,
        "login",
        "known@test.io",
        "--password",
        "secret123",
    ])
    .assert()
    .success()
    .stdout(contains("Welcome, known!"));
}

#[test]
fn test_logout_closes_the_gate() {
    let db_path = setup_test_db("logout_gate");
    init_and_signup(&db_path, "bye@test.io");

    dw().args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Signed out"));

    dw().args(["--db", &db_path, "work", "list", "--all"])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));

    dw().args(["--db", &db_path, "whoami"])
        .assert()
        .failure();
}

#[test]
fn test_corrupt_session_file_does_not_block_login() {
    let db_path = setup_test_db("corrupt_session");
    init_and_signup(&db_path, "again@test.io");

    let session = std::path::Path::new(&db_path).with_extension("session");
    std::fs::write(&session, ":::not yaml [").unwrap();

    dw().args(["--db", &db_path, "work", "list", "--all"])
        .assert()
        .failure()
        .stdout(contains("Discarding unreadable session file"))
        .stderr(contains("Not signed in"));

    std::fs::write(&session, ":::not yaml [").unwrap();
    dw().args([
        "--db",
        &db_path,
        "login",
        "again@test.io",
        "--password",
        "secret123",
    ])
    .assert()
    .success()
    .stdout(contains("Welcome, again!"));

    std::fs::write(&session, ":::not yaml [").unwrap();
    dw().args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Signed out"));
    assert!(!session.exists());
}
