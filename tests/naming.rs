use chrono::{DateTime, TimeZone, Utc};
use cligpt::naming::{iso_minute, iso_month, iso_year, new_log_path, with_log_extension};
use std::fs;
use tempfile::TempDir;

fn fixed() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 42).unwrap()
}

#[test]
fn test_iso_formats() {
    let t = fixed();
    assert_eq!(iso_year(&t), "2024");
    assert_eq!(iso_month(&t), "2024-03");
    assert_eq!(iso_minute(&t), "2024-03-07T09:05");
}

#[test]
fn test_new_log_path_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = new_log_path(temp_dir.path(), &fixed()).unwrap();

    assert_eq!(
        path,
        temp_dir
            .path()
            .join("2024")
            .join("2024-03")
            .join("2024-03-07T09-05.md")
    );
    assert!(path.parent().unwrap().is_dir());
    assert!(!path.exists());
}

#[test]
fn test_new_log_path_same_minute_gets_suffix() {
    let temp_dir = TempDir::new().unwrap();
    let first = new_log_path(temp_dir.path(), &fixed()).unwrap();
    fs::write(&first, "taken").unwrap();

    let second = new_log_path(temp_dir.path(), &fixed()).unwrap();
    assert_eq!(second.file_name().unwrap(), "2024-03-07T09-05-2.md");
    fs::write(&second, "taken").unwrap();

    let third = new_log_path(temp_dir.path(), &fixed()).unwrap();
    assert_eq!(third.file_name().unwrap(), "2024-03-07T09-05-3.md");
}

#[test]
fn test_with_log_extension() {
    assert_eq!(with_log_extension("2024/2024-03/chat"), "2024/2024-03/chat.md");
    assert_eq!(with_log_extension("chat.md"), "chat.md");
    assert_eq!(with_log_extension("CHAT.MD"), "CHAT.MD");
}
