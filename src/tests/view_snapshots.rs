//! Snapshot tests for the rendered document.
//!
//! Uses insta + ratatui TestBackend to pin the cell projection of each block
//! kind. Rows are prefixed with their index so blank rows stay visible.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn numbered_screen(harness: &mut AcceptanceTestHarness) -> String {
    harness
        .render_to_string()
        .lines()
        .enumerate()
        .map(|(row, line)| format!("{:02}|{}", row, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn mixed_blocks_snapshot() {
    let text = "Title\n===\nHello world\n> quoted\n---";
    let mut harness = AcceptanceTestHarness::from_text(text, 24, 12).expect("Should load text");

    insta::assert_snapshot!(numbered_screen(&mut harness), @r"
    00|
    01| Title
    02|
    03| ═════════════════════
    04|
    05|
    06|
    07| Hello world
    08|
    09|  quoted
    10|
    11| ─────────────────────
    ");
}

#[test]
fn code_block_snapshot() {
    let text = "```\nfn main() {}\n\tindented\n```\nafter";
    let mut harness = AcceptanceTestHarness::from_text(text, 24, 6).expect("Should load text");

    insta::assert_snapshot!(numbered_screen(&mut harness), @r"
    00|
    01| fn main() {}
    02|     indented
    03| after
    ");
}

#[test]
fn scrolled_paragraphs_snapshot() {
    let text = (0..20)
        .map(|i| format!("paragraph {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let mut harness = AcceptanceTestHarness::from_text(&text, 24, 5).expect("Should load text");
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j'));

    insta::assert_snapshot!(numbered_screen(&mut harness), @r"
    00| paragraph 1
    01| paragraph 2
    02| paragraph 3
    03| paragraph 4
    04| paragraph 5
    ");
}
