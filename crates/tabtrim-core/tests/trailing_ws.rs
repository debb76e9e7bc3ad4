// crates/tabtrim-core/tests/trailing_ws.rs

use tabtrim_core::{trim_bytes, trim_stream, TrimOptions};

fn trim(input: &[u8]) -> Vec<u8> {
    trim_bytes(input, TrimOptions::default()).expect("trim")
}

#[test]
fn trailing_spaces_dropped_before_newline() {
    assert_eq!(trim(b"a   \n"), b"a\n");
}

#[test]
fn blank_line_of_spaces_becomes_empty() {
    assert_eq!(trim(b"   \n"), b"\n");
}

#[test]
fn unterminated_final_line_is_trimmed_too() {
    assert_eq!(trim(b"a  "), b"a");
}

#[test]
fn trailing_tab_is_trimmed_in_expand_mode() {
    // The tab only adds pending columns; the newline discards them.
    assert_eq!(trim(b"a\t\n"), b"a\n");
    assert_eq!(trim(b"a \t \n"), b"a\n");
}

#[test]
fn interior_spaces_survive() {
    assert_eq!(trim(b"a b  c\n"), b"a b  c\n");
}

#[test]
fn every_line_is_trimmed_independently() {
    assert_eq!(trim(b"one  \ntwo\t\nthree   "), b"one\ntwo\nthree");
}

#[test]
fn counters_account_for_trimmed_columns() {
    let input = b"a  \tb  \n";
    let mut out = Vec::new();
    let stats = trim_stream(&input[..], &mut out, TrimOptions::default()).expect("trim");

    assert_eq!(out, b"a   b\n");
    assert_eq!(stats.bytes_in, 8);
    assert_eq!(stats.bytes_out, 6);
    assert_eq!(stats.tabs, 1);
    assert_eq!(stats.trimmed, 2);
    assert_eq!(stats.terminators, 1);
}
