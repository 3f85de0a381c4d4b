//! Acceptance tests for scrolling.
//!
//! Test scenarios:
//! 1. `j`/`k` and the arrow keys move one line
//! 2. `g` and Home jump back to the top
//! 3. Page Down / Page Up move by a page
//! 4. Wheel notches move one line each
//! 5. Overscrolling past the end settles back
//! 6. Holding a key moves once per frame

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

// ===== Test Fixtures =====

/// Fixture long enough to need scrolling at 80x24.
const SCROLL_FIXTURE: &str = "tests/fixtures/sample.md";

fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_fixture_with_size(SCROLL_FIXTURE, 80, 24)
        .expect("Should load fixture")
}

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

// ===== Line Scrolling =====

#[test]
fn scroll_down_with_j_key_changes_viewport() {
    let mut harness = harness();
    let initial_output = harness.render_to_string();

    harness.send_key(KeyCode::Char('j'));
    let scrolled_output = harness.render_to_string();

    assert_ne!(initial_output, scrolled_output);
    assert_eq!(harness.state().scroll.offset(), 18);
}

#[test]
fn scroll_up_with_k_key_returns_to_previous_view() {
    let mut harness = harness();
    let initial_output = harness.render_to_string();

    harness.send_key(KeyCode::Char('j'));
    harness.render_to_string();
    harness.send_key(KeyCode::Char('k'));

    assert_eq!(harness.render_to_string(), initial_output);
}

#[test]
fn arrow_keys_scroll_like_j_and_k() {
    let mut harness = harness();
    harness.send_key(KeyCode::Down);
    harness.send_key(KeyCode::Down);
    assert_eq!(harness.state().scroll.offset(), 36);
    harness.send_key(KeyCode::Up);
    assert_eq!(harness.state().scroll.offset(), 18);
}

#[test]
fn scrolling_by_one_line_shifts_rows_by_one() {
    let text = numbered_lines(60);
    let mut harness = AcceptanceTestHarness::from_text(&text, 40, 10).expect("Should load text");
    let before = harness.render_to_string();

    harness.send_key(KeyCode::Char('j'));
    let after = harness.render_to_string();

    let before: Vec<&str> = before.lines().collect();
    let after: Vec<&str> = after.lines().collect();
    assert_eq!(&before[1..], &after[..before.len() - 1]);
}

#[test]
fn scroll_up_at_top_is_a_no_op() {
    let mut harness = harness();
    let initial_output = harness.render_to_string();

    harness.send_key(KeyCode::Char('k'));

    assert_eq!(harness.state().scroll.offset(), 0);
    assert_eq!(harness.render_to_string(), initial_output);
}

// ===== Jump To Top =====

#[test]
fn g_returns_to_top() {
    let mut harness = harness();
    let initial_output = harness.render_to_string();

    harness.send_key(KeyCode::PageDown);
    harness.render_to_string();
    harness.send_key(KeyCode::Char('g'));

    assert_eq!(harness.state().scroll.offset(), 0);
    assert_eq!(harness.render_to_string(), initial_output);
}

#[test]
fn home_returns_to_top() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Home);
    assert_eq!(harness.state().scroll.offset(), 0);
}

// ===== Paging =====

#[test]
fn page_down_moves_by_viewport_minus_margin() {
    let text = numbered_lines(200);
    let mut harness = AcceptanceTestHarness::from_text(&text, 80, 24).expect("Should load text");

    harness.send_key(KeyCode::PageDown);

    assert_eq!(harness.state().scroll.offset(), 24 * 18 - 10);
}

#[test]
fn space_and_ctrl_d_page_down() {
    let text = numbered_lines(200);
    let mut harness = AcceptanceTestHarness::from_text(&text, 80, 24).expect("Should load text");

    harness.send_key(KeyCode::Char(' '));
    harness.send_key_with_mods(KeyCode::Char('d'), KeyModifiers::CONTROL);

    assert_eq!(harness.state().scroll.offset(), 2 * 422);
}

#[test]
fn page_up_undoes_page_down() {
    let text = numbered_lines(200);
    let mut harness = AcceptanceTestHarness::from_text(&text, 80, 24).expect("Should load text");
    let initial_output = harness.render_to_string();

    harness.send_key(KeyCode::PageDown);
    harness.render_to_string();
    harness.send_key(KeyCode::PageUp);

    assert_eq!(harness.render_to_string(), initial_output);
}

// ===== Mouse Wheel =====

#[test]
fn wheel_scrolls_one_line_per_notch() {
    let text = numbered_lines(200);
    let mut harness = AcceptanceTestHarness::from_text(&text, 80, 24).expect("Should load text");

    harness.scroll_wheel(3);
    assert_eq!(harness.state().scroll.offset(), 54);

    harness.scroll_wheel(-1);
    assert_eq!(harness.state().scroll.offset(), 36);
}

// ===== Overscroll Settling =====

#[test]
fn overscroll_on_short_document_settles_back_to_top() {
    let mut harness = AcceptanceTestHarness::from_text("# Short", 80, 24).expect("Should load text");
    let initial_output = harness.render_to_string();

    harness.send_key(KeyCode::PageDown);
    let frames = harness.settle();

    assert!(frames > 1, "settling should span several frames");
    assert_eq!(harness.state().scroll.offset(), 0);
    assert_eq!(harness.render_to_string(), initial_output);
}

#[test]
fn overscroll_keeps_last_line_above_bottom_margin() {
    let text = numbered_lines(40);
    let mut harness = AcceptanceTestHarness::from_text(&text, 40, 10).expect("Should load text");

    for _ in 0..10 {
        harness.send_key(KeyCode::PageDown);
    }
    let screen = harness.render_to_string();

    assert!(screen.contains("line 39"), "last line should stay visible:\n{}", screen);
    assert!(!harness.state().scheduler.is_dirty());
}

// ===== Held Keys =====

#[test]
fn held_key_moves_once_per_frame() {
    let text = numbered_lines(200);
    let mut harness = AcceptanceTestHarness::from_text(&text, 80, 24).expect("Should load text");

    harness.hold_key(KeyCode::Char('j'), 8);
    assert_eq!(harness.state().scroll.offset(), 18);

    harness.hold_key(KeyCode::Char('j'), 8);
    assert_eq!(harness.state().scroll.offset(), 36);
}

// ===== Quit =====

#[test]
fn q_stops_the_app() {
    let mut harness = harness();
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
    // Further input is ignored once quit.
    assert!(harness.send_key(KeyCode::Char('j')));
    assert_eq!(harness.state().scroll.offset(), 0);
}

// ===== Resize =====

#[test]
fn resize_changes_page_size() {
    let text = numbered_lines(200);
    let mut harness = AcceptanceTestHarness::from_text(&text, 80, 24).expect("Should load text");

    harness.resize(80, 12);
    harness.send_key(KeyCode::PageDown);

    assert_eq!(harness.state().scroll.offset(), 12 * 18 - 10);
    assert!(harness.render_to_string().lines().count() <= 12);
}
