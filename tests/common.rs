#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use dailywork::models::Identity;
use dailywork::store::Store;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn dw() -> Command {
    cargo_bin_cmd!("dailywork")
}

pub fn importer() -> Command {
    cargo_bin_cmd!("dailywork-import")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file, together with the session saved next to it.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailywork.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(path.with_extension("session")).ok();
    db_path
}

/// Fresh, empty directory inside tempdir (for export output).
pub fn temp_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailywork_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path.to_string_lossy().to_string()
}

/// Files in `dir` whose name ends with `.ext`.
pub fn files_with_ext(dir: &str, ext: &str) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("read dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|e| e == ext))
        .collect()
}

/// `init` the DB and sign up `email`; the session stays active.
pub fn init_and_signup(db_path: &str, email: &str) {
    dw().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dw().args([
        "--db",
        db_path,
        "signup",
        email,
        "--password",
        "secret123",
        "--confirm",
        "secret123",
    ])
    .assert()
    .success();
}

/// Short id printed by `work add` / `todo add` as `(id xxxxxxxx)`.
pub fn extract_id(stdout: &[u8]) -> String {
    let out = String::from_utf8_lossy(stdout);
    let start = out.find("(id ").expect("id in output") + 4;
    let end = out[start..].find(')').expect("closing paren") + start;
    out[start..end].to_string()
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> chrono::NaiveTime {
    chrono::NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

/// In-memory store with one registered user.
pub fn memory_store(email: &str) -> (Store, Identity) {
    let store = Store::open_in_memory().expect("open in-memory store");
    let identity = store
        .create_account(email, "secret123")
        .expect("create account");
    (store, identity)
}

pub fn remove(path: &Path) {
    fs::remove_file(path).ok();
}
