//! End-to-end tests for DebugToolKit: the full NullCheck → ConsoleLog → FileLog → StateSave chain.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use cor_core::HandlerResponse;
use serde::{Deserialize, Serialize};
use tempfile::{tempdir, TempDir};

use super::{broken_console, capture_console, state_file_count};
use crate::{DebugConfig, DebugMessage, DebugToolKit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Position {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PlayerData {
    health: i32,
    position: Position,
}

fn test_config(dir: &TempDir) -> DebugConfig {
    DebugConfig {
        log_file_path: dir.path().join("debug_log.txt"),
        state_dir: dir.path().to_path_buf(),
    }
}

/// **Test: General message reaches console and log file; no state file is written.**
///
/// **Action:** `log(General("Application started."))`.
/// **Expected:** console line "ConsoleLogProcessor: Application started.", one log line, zero JSON files.
#[test]
fn test_general_message_logs_to_console_and_file() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir);
    let (console, lines) = capture_console();
    let toolkit = DebugToolKit::with_console(&config, console).unwrap();

    let response = toolkit.log(DebugMessage::general("Application started."));

    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(
        *lines.lock().unwrap(),
        vec!["ConsoleLogProcessor: Application started.".to_string()]
    );
    let log = std::fs::read_to_string(&config.log_file_path).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains("Application started."));
    assert_eq!(state_file_count(dir.path()), 0);
}

/// **Test: State save writes `<name>_state.json` that deserializes back to the payload.**
#[test]
fn test_state_save_round_trips_payload() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir);
    let (console, lines) = capture_console();
    let toolkit = DebugToolKit::with_console(&config, console).unwrap();

    let data = PlayerData {
        health: 100,
        position: Position { x: 0.0, y: 0.0, z: 0.0 },
    };
    toolkit.log(DebugMessage::state_save("player_state", &data));

    let path = dir.path().join("player_state_state.json");
    let saved: PlayerData =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, data);

    assert_eq!(
        *lines.lock().unwrap(),
        vec!["ConsoleLogProcessor: Save State: player_state".to_string()]
    );
    let log = std::fs::read_to_string(&config.log_file_path).unwrap();
    assert!(log.contains("Save State: player_state"));
}

/// **Test: Absent message halts the chain; no console, file or state effects.**
#[test]
fn test_absent_message_has_no_effects() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir);
    let (console, lines) = capture_console();
    let toolkit = DebugToolKit::with_console(&config, console).unwrap();

    let response = toolkit.log(None::<DebugMessage>);

    assert_eq!(response, HandlerResponse::Stop);
    assert!(lines.lock().unwrap().is_empty());
    assert!(!config.log_file_path.exists());
    assert_eq!(state_file_count(dir.path()), 0);
}

#[test]
fn test_empty_text_has_no_effects() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir);
    let (console, lines) = capture_console();
    let toolkit = DebugToolKit::with_console(&config, console).unwrap();

    assert_eq!(toolkit.log(DebugMessage::general("")), HandlerResponse::Stop);
    assert!(lines.lock().unwrap().is_empty());
    assert!(!config.log_file_path.exists());
}

/// **Test: Console runs before the file write.**
///
/// **Setup:** Console sink that records whether the log file exists at the time it is called.
/// **Expected:** Log file did not exist when the console line was written, and exists afterwards.
#[test]
fn test_console_runs_before_file_log() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir);
    let seen: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));

    let log_path: PathBuf = config.log_file_path.clone();
    let seen_in_sink = seen.clone();
    let console = move |_line: &str| -> io::Result<()> {
        seen_in_sink.lock().unwrap().push(log_path.exists());
        Ok(())
    };
    let toolkit = DebugToolKit::with_console(&config, Arc::new(console)).unwrap();

    toolkit.log(DebugMessage::general("ordered"));

    assert_eq!(*seen.lock().unwrap(), vec![false]);
    assert!(config.log_file_path.exists());
}

/// **Test: File log still happens when the console sink is unavailable.**
#[test]
fn test_file_log_independent_of_console_failure() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir);
    let toolkit = DebugToolKit::with_console(&config, broken_console()).unwrap();

    let response = toolkit.log(DebugMessage::general("still written"));

    assert_eq!(response, HandlerResponse::Continue);
    let log = std::fs::read_to_string(&config.log_file_path).unwrap();
    assert!(log.contains("still written"));
}

/// **Test: State save still runs when the log file cannot be written.**
#[test]
fn test_state_save_runs_after_file_log_failure() {
    let dir = tempdir().unwrap();
    let config = DebugConfig {
        log_file_path: dir.path().join("no-such-dir").join("debug_log.txt"),
        state_dir: dir.path().to_path_buf(),
    };
    let (console, _lines) = capture_console();
    let toolkit = DebugToolKit::with_console(&config, console).unwrap();

    toolkit.log(DebugMessage::state_save_value(
        "checkpoint",
        serde_json::json!({ "stage": 2 }),
    ));

    assert!(dir.path().join("checkpoint_state.json").exists());
}

/// **Test: A payload that cannot be serialized still flows through the chain.**
///
/// **Setup:** Map with tuple keys (JSON objects need string keys).
/// **Expected:** Console and log lines written, no state file, `log` returns Continue.
#[test]
fn test_unserializable_payload_still_logged() {
    let dir = tempdir().unwrap();
    let config = test_config(&dir);
    let (console, lines) = capture_console();
    let toolkit = DebugToolKit::with_console(&config, console).unwrap();

    let mut grid: HashMap<(i32, i32), i32> = HashMap::new();
    grid.insert((0, 0), 1);
    let message = DebugMessage::state_save("grid", &grid);
    assert!(matches!(
        &message,
        DebugMessage::StateSave { state_data: Err(_), .. }
    ));

    let response = toolkit.log(message);

    assert_eq!(response, HandlerResponse::Continue);
    assert_eq!(
        *lines.lock().unwrap(),
        vec!["ConsoleLogProcessor: Save State: grid".to_string()]
    );
    let log = std::fs::read_to_string(&config.log_file_path).unwrap();
    assert!(log.contains("Save State: grid"));
    assert!(!dir.path().join("grid_state.json").exists());
    assert_eq!(state_file_count(dir.path()), 0);
}

#[test]
fn test_toolkit_rejects_empty_log_path() {
    let config = DebugConfig {
        log_file_path: PathBuf::new(),
        state_dir: PathBuf::from("."),
    };
    assert!(DebugToolKit::new(&config).is_err());
}
