#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use aide_core::platform::{lookup, FALLBACK_PROFILE};
use aide_core::router::resolve;
use aide_core::{AssistantError, ExErrorKind};
use common::{recording_assistant, LaunchCall};
use std::fs;
use tempfile::TempDir;

const NOT_RECOGNIZED: &str = "Command not recognized. Type 'help' for available commands.";

#[test]
fn test_every_key_is_routed() {
    let (assistant, _launcher) = recording_assistant();
    let keys: Vec<_> = assistant.table().keys().collect();

    for key in keys {
        if key == "create file" {
            // Exact phrase has no filename; it must still reach the handler
            let err = assistant.dispatch(key).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::MissingArgument);
            continue;
        }
        let reply = assistant.route(key);
        assert_ne!(reply, NOT_RECOGNIZED, "key {key} fell through");
    }
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let (assistant, _launcher) = recording_assistant();
    for key in assistant.table().keys() {
        let exact = resolve(assistant.table(), key);
        assert!(exact.is_some());
        assert_eq!(resolve(assistant.table(), &key.to_uppercase()), exact);
        assert_eq!(resolve(assistant.table(), &format!("  {}  ", key)), exact);
    }
}

#[test]
fn test_open_browser_with_url() {
    let (assistant, launcher) = recording_assistant();
    let assistant = assistant.with_platform(&FALLBACK_PROFILE);

    let reply = assistant.route("open browser https://example.com");
    assert!(reply.contains("https://example.com"), "{reply}");
    assert_eq!(
        launcher.calls(),
        vec![LaunchCall {
            program: "xdg-open".to_string(),
            args: vec!["https://example.com".to_string()],
        }]
    );
}

#[test]
fn test_open_browser_exact_phrase_uses_default_url() {
    let (assistant, launcher) = recording_assistant();
    let reply = assistant.route("open browser");
    assert_eq!(reply, "Opening browser with https://www.google.com");
    assert_eq!(launcher.calls().len(), 1);
}

#[test]
fn test_open_apps_use_platform_row() {
    let (assistant, launcher) = recording_assistant();
    let assistant = assistant.with_platform(lookup("windows"));

    assert_eq!(assistant.route("open notepad"), "Notepad opened");
    assert_eq!(assistant.route("Open Calculator"), "Calculator opened");

    let programs: Vec<_> = launcher.calls().into_iter().map(|c| c.program).collect();
    assert_eq!(programs, vec!["notepad.exe", "calc.exe"]);
}

#[test]
fn test_create_file_prefix_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foo.txt");
    let (assistant, _launcher) = recording_assistant();

    let reply = assistant.route(&format!("create file {}", path.display()));
    assert!(reply.contains("foo.txt"), "{reply}");
    assert!(reply.contains("created successfully"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_get_time_format() {
    let (assistant, _launcher) = recording_assistant();
    let reply = assistant.route("get time");
    let time = reply.strip_prefix("Current time: ").expect("label");

    let bytes = time.as_bytes();
    assert_eq!(bytes.len(), 8, "{time}");
    for (i, b) in bytes.iter().enumerate() {
        if i == 2 || i == 5 {
            assert_eq!(*b, b':');
        } else {
            assert!(b.is_ascii_digit(), "{time}");
        }
    }
}

#[test]
fn test_get_date_format() {
    let (assistant, _launcher) = recording_assistant();
    let reply = assistant.route("GET DATE");
    let date = reply.strip_prefix("Current date: ").expect("label");
    let parts: Vec<_> = date.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 4);
    assert_eq!(parts[1].len(), 2);
    assert_eq!(parts[2].len(), 2);
}

#[test]
fn test_nonsense_is_not_recognized() {
    let (assistant, launcher) = recording_assistant();
    assert_eq!(assistant.route("nonsense command"), NOT_RECOGNIZED);
    assert!(matches!(
        assistant.dispatch("nonsense command"),
        Err(AssistantError::UnrecognizedCommand { .. })
    ));
    assert!(launcher.calls().is_empty());
}

#[test]
fn test_help_contains_every_key_once() {
    let (assistant, _launcher) = recording_assistant();
    let help = assistant.route("help");
    for key in assistant.table().keys() {
        let listed = help
            .lines()
            .filter(|line| line.trim_start_matches("  - ") == key)
            .count();
        assert_eq!(listed, 1, "{key}");
    }
}

#[test]
fn test_list_files_is_idempotent() {
    let (assistant, _launcher) = recording_assistant();
    let first = assistant.route("list files");
    let second = assistant.route("list files");
    assert!(first.starts_with("Files in .: "), "{first}");
    assert_eq!(first, second);
}

#[test]
fn test_shutdown_is_refused() {
    let (assistant, launcher) = recording_assistant();
    assert_eq!(
        assistant.route("shutdown"),
        "System shutdown requires manual confirmation (security feature)"
    );
    assert!(launcher.calls().is_empty());
}

#[test]
fn test_system_info() {
    let (assistant, _launcher) = recording_assistant();
    let reply = assistant.route("system info");
    assert!(reply.starts_with("System: "));
    assert!(reply.contains("\nPlatform: "));
}
