//! Integration tests for the timeweave binary.
//!
//! Tests full protocol sessions by spawning the host process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the host and collects stdout lines.
fn run_host(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_timeweave");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start timeweave");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Two timelines in Fall 1901; Austria's army in Serbia was dislodged on timeline 2.
const RETREAT_WORLD: &str = r#"world {"boards":[{"timeline":1,"year":1901,"phase":"fall","units":{"vie":{"owner":"austria","type":"army"},"bud":{"owner":"austria","type":"army"}}},{"timeline":2,"year":1901,"phase":"fall","units":{"ser":{"owner":"austria","type":"army","mustRetreat":true},"bul":{"owner":"turkey","type":"army"}}}]}"#;

/// One timeline in Spring 1901.
const SPRING_WORLD: &str = r#"world {"boards":[{"timeline":1,"year":1901,"phase":"spring","units":{"vie":{"owner":"austria","type":"army"},"tri":{"owner":"austria","type":"fleet"},"ven":{"owner":"italy","type":"army"}}}]}"#;

/// Winter 1901 with Russia's fleet on the south coast of St. Petersburg.
const WINTER_WORLD: &str = r#"world {"boards":[{"timeline":1,"year":1901,"phase":"winter","units":{"stp_sc":{"owner":"russia","type":"fleet"},"mos":{"owner":"russia","type":"army"}},"ownerships":{"mos":"russia","sev":"russia","stp":"russia","war":"austria"}}]}"#;

#[test]
fn hello_handshake_with_protocol_version() {
    let lines = run_host(&["hello", "quit"]);

    assert!(lines.iter().any(|l| l == "id name timeweave"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));
    assert!(lines.iter().any(|l| l == "hellook"));

    let hellook_idx = lines.iter().position(|l| l == "hellook").unwrap();
    let proto_idx = lines.iter().position(|l| l == "protocol_version 1").unwrap();
    assert!(proto_idx < hellook_idx, "protocol_version must appear before hellook");
}

#[test]
fn hello_handshake_includes_options() {
    let lines = run_host(&["hello", "quit"]);
    let option_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert!(!option_lines.is_empty(), "handshake should include option declarations");
    for opt in &option_lines {
        assert!(opt.contains("type "), "option line missing type: {}", opt);
    }
}

#[test]
fn isready_response() {
    let lines = run_host(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_and_malformed_commands_are_ignored() {
    let lines = run_host(&[
        "foobar",
        "canselect nowhere",
        "mode retreat",
        "world {not json",
        "canselect 1:1901:spring:xyz",
        "isready",
        "quit",
    ]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn nothing_selectable_before_state_arrives() {
    let lines = run_host(&[SPRING_WORLD, "canselect 1:1901:spring:vie", "quit"]);
    assert_eq!(lines, vec!["canselect 1:1901:spring:vie false"]);
}

#[test]
fn movement_session() {
    let lines = run_host(&[
        r#"game {"player":"austria"}"#,
        SPRING_WORLD,
        "canselect 1:1901:spring:vie",
        "canselect 1:1901:spring:ven",
        "canselect 1:1901:spring:tyr",
        "mode move",
        "order move 1:1901:spring:vie",
        "canselect 1:1901:spring:tyr",
        "canselect 1:1901:spring:ven",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "canselect 1:1901:spring:vie true",
            "canselect 1:1901:spring:ven false",
            "canselect 1:1901:spring:tyr false",
            "canselect 1:1901:spring:tyr true",
            "canselect 1:1901:spring:ven true",
        ]
    );
}

#[test]
fn retreat_turn_suspends_normal_orders() {
    let lines = run_host(&[
        r#"game {"player":"austria"}"#,
        RETREAT_WORLD,
        "mode move",
        "canselect 1:1901:fall:vie",
        "canselect 2:1901:fall:ser",
        "mode build",
        "canselect 2:1901:fall:ser",
        "mode move",
        "order move 2:1901:fall:ser",
        "canselect 2:1901:fall:alb",
        "mode disband",
        "canselect 2:1901:fall:alb",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "canselect 1:1901:fall:vie false",
            "canselect 2:1901:fall:ser true",
            "canselect 2:1901:fall:ser false",
            "canselect 2:1901:fall:alb true",
            "canselect 2:1901:fall:alb false",
        ]
    );
}

#[test]
fn build_session_with_coasts() {
    let lines = run_host(&[
        r#"game {"player":"russia"}"#,
        WINTER_WORLD,
        "canselect 1:1901:winter:sev",
        "canselect 1:1901:winter:war",
        "canselect 1:1901:winter:stp",
        "canselect 1:1901:winter:stp_sc",
        "mode disband",
        "canselect 1:1901:winter:mos",
        "canselect 1:1901:winter:sev",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "canselect 1:1901:winter:sev true",
            "canselect 1:1901:winter:war false",
            "canselect 1:1901:winter:stp false",
            "canselect 1:1901:winter:stp_sc true",
            "canselect 1:1901:winter:mos true",
            "canselect 1:1901:winter:sev false",
        ]
    );
}

#[test]
fn selectable_lists_sorted_locations() {
    let lines = run_host(&[r#"game {"player":"russia"}"#, WINTER_WORLD, "selectable", "quit"]);
    assert_eq!(
        lines,
        vec!["selectable 1:1901:winter:mos 1:1901:winter:sev 1:1901:winter:stp_sc"]
    );
}

#[test]
fn loading_world_blocks_until_refreshed() {
    let lines = run_host(&[
        r#"game {"player":"austria"}"#,
        SPRING_WORLD,
        "world loading",
        "canselect 1:1901:spring:vie",
        SPRING_WORLD,
        "canselect 1:1901:spring:vie",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec!["canselect 1:1901:spring:vie false", "canselect 1:1901:spring:vie true"]
    );
}

#[test]
fn winner_freezes_the_game() {
    let lines = run_host(&[
        r#"game {"player":null}"#,
        r#"world {"boards":[{"timeline":1,"year":1905,"phase":"spring","units":{"vie":{"owner":"austria","type":"army"}}}],"winner":"austria"}"#,
        "canselect 1:1905:spring:vie",
        "selectable",
        "quit",
    ]);
    assert_eq!(lines, vec!["canselect 1:1905:spring:vie false", "selectable"]);
}

#[test]
fn newgame_clears_state() {
    let lines = run_host(&[
        r#"game {"player":"austria"}"#,
        SPRING_WORLD,
        "canselect 1:1901:spring:vie",
        "newgame",
        "canselect 1:1901:spring:vie",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec!["canselect 1:1901:spring:vie true", "canselect 1:1901:spring:vie false"]
    );
}

#[test]
fn regions_option_with_missing_file_is_ignored() {
    let lines = run_host(&[
        "setoption name Regions value /nonexistent/regions.json",
        r#"game {"player":"austria"}"#,
        SPRING_WORLD,
        "canselect 1:1901:spring:vie",
        "quit",
    ]);
    assert_eq!(lines, vec!["canselect 1:1901:spring:vie true"]);
}

#[test]
fn eof_without_quit_exits_cleanly() {
    let lines = run_host(&["isready"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn army_on_inland_key_leaves_coast_buildable() {
    let lines = run_host(&[
        r#"game {"player":"russia"}"#,
        r#"world {"boards":[{"timeline":1,"year":1901,"phase":"winter","units":{"stp":{"owner":"russia","type":"army"}},"ownerships":{"stp":"russia"}}]}"#,
        "canselect 1:1901:winter:stp_nc",
        "canselect 1:1901:winter:stp",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec!["canselect 1:1901:winter:stp_nc true", "canselect 1:1901:winter:stp true"]
    );
}
