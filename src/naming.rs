use chrono::{DateTime, TimeZone};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const LOG_EXTENSION: &str = "md";

pub fn iso_year<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%Y").to_string()
}

pub fn iso_month<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%Y-%m").to_string()
}

pub fn iso_minute<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%Y-%m-%dT%H:%M").to_string()
}

/// Build `base/YYYY/YYYY-MM/YYYY-MM-DDTHH-MM.md`, creating the year and month
/// directories.
///
/// Two sessions started in the same minute would share a name, so an existing
/// file pushes the new one to `...THH-MM-2.md`, `...THH-MM-3.md` and so on.
pub fn new_log_path<Tz: TimeZone>(base_dir: &Path, t: &DateTime<Tz>) -> io::Result<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    let dir = base_dir.join(iso_year(t)).join(iso_month(t));
    fs::create_dir_all(&dir)?;

    let stem = iso_minute(t).replace(':', "-");
    let mut candidate = dir.join(format!("{}.{}", stem, LOG_EXTENSION));
    let mut n = 2;
    while candidate.exists() {
        candidate = dir.join(format!("{}-{}.{}", stem, n, LOG_EXTENSION));
        n += 1;
    }
    Ok(candidate)
}

/// Append `.md` unless the name already carries it (any case).
pub fn with_log_extension(path: &str) -> String {
    if path.to_lowercase().ends_with(".md") {
        path.to_string()
    } else {
        format!("{}.{}", path, LOG_EXTENSION)
    }
}
