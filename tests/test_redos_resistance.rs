//! Pattern-based transforms must stay fast on adversarial markup
//!
//! The `regex` crate runs in linear time, but the transforms chain several
//! passes and some build patterns at runtime, so each is timed on inputs that
//! would blow up a backtracking engine.

use description_editor::html_helper::{
    br_remove, center_image, header_to_bold, html_format_remove, markdown_to_html,
    steam_remove_about, strip_tag,
};
use std::time::Instant;

fn assert_fast(label: &str, run: impl FnOnce()) {
    let start = Instant::now();
    run();
    let elapsed = start.elapsed();

    println!("{label}: {elapsed:?}");
    assert!(
        elapsed.as_millis() < 500,
        "{label} took {elapsed:?} on adversarial input"
    );
}

#[test]
fn test_unclosed_tag() {
    let adversarial = "<img ".to_string() + &"a".repeat(20_000);
    assert_fast("strip_tag", || {
        let _ = strip_tag(&adversarial, "img");
    });
    assert_fast("center_image", || {
        let _ = center_image(&adversarial);
    });
}

#[test]
fn test_unclosed_header() {
    let adversarial = "<h1 ".to_string() + &" x".repeat(10_000);
    assert_fast("header_to_bold", || {
        let _ = header_to_bold(&adversarial);
    });
}

#[test]
fn test_whitespace_runs() {
    let adversarial = " \t\n".repeat(10_000) + "<p>";
    assert_fast("html_format_remove", || {
        let _ = html_format_remove(&adversarial);
    });
}

#[test]
fn test_long_break_runs() {
    let adversarial = "<br>".repeat(10_000) + "<br";
    assert_fast("br_remove", || {
        let _ = br_remove(&adversarial, 3, 1);
    });
}

#[test]
fn test_partial_header_repeats() {
    let adversarial = "<h1>About the Gam".repeat(2_000);
    assert_fast("steam_remove_about", || {
        let _ = steam_remove_about(&adversarial);
    });
}

#[test]
fn test_unterminated_markdown_image() {
    let adversarial = "![".repeat(1_000) + "](https://example.com/" + &"a".repeat(5_000);
    assert_fast("markdown_to_html", || {
        let _ = markdown_to_html(&adversarial);
    });
}
