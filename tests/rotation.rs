//! Tests for size-based rotation.

mod common;

use chrono::{Local, TimeZone, Utc};
use common::SharedBuf;
use logrotating::rotation::{maybe_rotate, rotated_path, should_rotate};
use logrotating::{Flags, Logger, Sink};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// "INFO line-NN\n" is 13 bytes.
fn fill_until(logger: &Logger, path: &Path, threshold: u64) -> usize {
    let mut n = 0;
    while fs::metadata(path).map(|m| m.len()).unwrap_or(0) < threshold {
        logger.info(&format!("line-{n:02}")).unwrap();
        n += 1;
    }
    n
}

fn rotated_files(dir: &Path, base: &str) -> Vec<PathBuf> {
    let prefix = format!("{base}.");
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&prefix))
        })
        .collect()
}

#[test]
fn threshold_comparison() {
    assert!(!should_rotate(99, 100));
    assert!(should_rotate(100, 100));
    assert!(should_rotate(101, 100));
    assert!(!should_rotate(u64::MAX, 0));
}

#[test]
fn rotated_name_is_path_dot_unix_seconds() {
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    assert_eq!(
        rotated_path(Path::new("/var/log/app.log"), &at),
        PathBuf::from("/var/log/app.log.1705311000")
    );
}

#[test]
fn rotates_once_file_reaches_threshold() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Sink::file(&path).unwrap(), 50, Flags::NONE);

    let written = fill_until(&logger, &path, 50);
    let before = fs::read_to_string(&path).unwrap();
    assert_eq!(before.lines().count(), written);

    let start = Local::now().timestamp();
    let moved = logger.check_rotation().expect("file at threshold must rotate");
    let end = Local::now().timestamp();

    // Old content moved aside under <path>.<secs>
    let suffix = moved
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix("app.log."))
        .unwrap();
    let secs: i64 = suffix.parse().unwrap();
    assert!((start..=end).contains(&secs));
    assert_eq!(fs::read_to_string(&moved).unwrap(), before);

    // Fresh empty file at the original path
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);

    // Subsequent writes land in the new file
    logger.info("after").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO after\n");
    assert_eq!(fs::read_to_string(&moved).unwrap(), before);
    assert_eq!(logger.rotation_failures(), 0);
}

#[test]
fn emit_rotates_before_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Sink::file(&path).unwrap(), 50, Flags::NONE);

    fill_until(&logger, &path, 50);
    let before = fs::read_to_string(&path).unwrap();
    logger.info("next").unwrap();

    let rotated = rotated_files(dir.path(), "app.log");
    assert_eq!(rotated.len(), 1);
    assert_eq!(fs::read_to_string(&rotated[0]).unwrap(), before);
    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO next\n");
}

#[test]
fn below_threshold_never_rotates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Sink::file(&path).unwrap(), 1024, Flags::NONE);

    for i in 0..10 {
        logger.info(&format!("line-{i:02}")).unwrap();
    }
    assert_eq!(logger.check_rotation(), None);
    assert!(rotated_files(dir.path(), "app.log").is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 10);
}

#[test]
fn zero_threshold_disables_rotation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Sink::file(&path).unwrap(), 0, Flags::NONE);

    for i in 0..50 {
        logger.info(&format!("line-{i:02}")).unwrap();
    }
    assert_eq!(logger.check_rotation(), None);
    assert!(rotated_files(dir.path(), "app.log").is_empty());
}

#[test]
fn standard_streams_are_never_rotated() {
    let now = Local::now();
    for mut sink in [Sink::Stderr, Sink::Stdout, Sink::writer(SharedBuf::new())] {
        assert!(!sink.is_rotatable());
        assert_eq!(sink.path(), None);
        assert!(maybe_rotate(&mut sink, 1, &now).unwrap().is_none());
    }

    let logger = Logger::new(Sink::writer(SharedBuf::new()), 1, Flags::NONE);
    for _ in 0..5 {
        logger.info("grow").unwrap();
    }
    assert_eq!(logger.check_rotation(), None);
}

#[test]
fn missing_file_is_skipped_silently() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let mut sink = Sink::file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(maybe_rotate(&mut sink, 1, &Local::now()).unwrap().is_none());
    assert!(rotated_files(dir.path(), "app.log").is_empty());
}

#[test]
fn maybe_rotate_reopens_at_original_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("svc.log");
    fs::write(&path, "0123456789").unwrap();
    let mut sink = Sink::file(&path).unwrap();

    let moved = maybe_rotate(&mut sink, 10, &Local::now()).unwrap().unwrap();
    assert_eq!(fs::read_to_string(&moved).unwrap(), "0123456789");
    assert_eq!(sink.path(), Some(path.as_path()));
    assert!(matches!(&sink, Sink::File(f) if f.is_open()));

    sink.write_line(b"fresh\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
}

/// Occupies `<path>.<secs>` for the seconds around now, so any rotation
/// attempted during the test finds its target taken.
fn occupy_rotation_names(path: &Path) -> Vec<PathBuf> {
    let now = Local::now().timestamp();
    (now - 1..=now + 3)
        .map(|secs| {
            let taken = PathBuf::from(format!("{}.{secs}", path.display()));
            fs::write(&taken, "earlier rotation\n").unwrap();
            taken
        })
        .collect()
}

fn count_lines(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| fs::read_to_string(e.unwrap().path()).unwrap().lines().count())
        .sum()
}

#[test]
fn rotations_within_one_second_keep_every_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Sink::file(&path).unwrap(), 20, Flags::NONE);

    for n in 0..10 {
        logger.info(&format!("line-{n:02}")).unwrap();
    }

    assert_eq!(count_lines(dir.path()), 10);
    assert_eq!(logger.rotation_failures(), 0);
    let all: String = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| fs::read_to_string(e.unwrap().path()).unwrap())
        .collect();
    for n in 0..10 {
        assert!(all.contains(&format!("INFO line-{n:02}\n")));
    }
}

#[test]
fn taken_rotation_name_defers_rotation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Sink::file(&path).unwrap(), 10, Flags::NONE);
    logger.info("first").unwrap();
    let taken = occupy_rotation_names(&path);

    assert_eq!(logger.check_rotation(), None);
    logger.info("second").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO first\nINFO second\n");
    for p in &taken {
        assert_eq!(fs::read_to_string(p).unwrap(), "earlier rotation\n");
    }
    assert_eq!(logger.rotation_failures(), 0);
}

#[test]
fn taken_rotation_name_leaves_retired_file_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::new(Sink::file(&path).unwrap(), 0, Flags::NONE);
    logger.info("kept").unwrap();
    let taken = occupy_rotation_names(&path);

    logger.set_stderr();

    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO kept\n");
    for p in &taken {
        assert_eq!(fs::read_to_string(p).unwrap(), "earlier rotation\n");
    }
    assert_eq!(logger.rotation_failures(), 0);
}

/// 250-byte file name: appending `.<secs>` exceeds the 255-byte name limit,
/// so every rename of this file fails.
#[cfg(unix)]
fn unrenamable_path(dir: &Path) -> PathBuf {
    dir.join(format!("{}.log", "a".repeat(246)))
}

#[cfg(unix)]
#[test]
fn failed_rotation_is_counted_and_write_still_lands() {
    let dir = tempdir().unwrap();
    let path = unrenamable_path(dir.path());
    let logger = Logger::new(Sink::file(&path).unwrap(), 10, Flags::NONE);

    logger.info("first").unwrap();
    assert_eq!(logger.rotation_failures(), 0);

    let written = logger.info("second").unwrap();
    assert_eq!(written.as_deref(), Some("INFO second\n"));
    assert_eq!(logger.rotation_failures(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO first\nINFO second\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn failed_retire_is_counted_and_file_stays() {
    let dir = tempdir().unwrap();
    let path = unrenamable_path(dir.path());
    let logger = Logger::new(Sink::file(&path).unwrap(), 0, Flags::NONE);
    logger.info("before").unwrap();

    logger.set_stderr();

    assert_eq!(logger.rotation_failures(), 1);
    assert_eq!(logger.file_path(), None);
    assert_eq!(fs::read_to_string(&path).unwrap(), "INFO before\n");
}
