use anyhow::anyhow;

use daily_quiz_bot::utils::report::{
    build_error_report, chunk_text, escape_html, pack_sections, TELEGRAM_MESSAGE_LIMIT,
};

#[test]
fn chunk_text_respects_limit_without_losing_content() {
    let text = "0123456789".repeat(50);
    let chunks = chunk_text(&text, 64);

    assert!(chunks.iter().all(|c| c.chars().count() <= 64));
    assert_eq!(chunks.concat(), text);
}

#[test]
fn chunk_text_counts_characters_not_bytes() {
    // Multibyte text must split on character boundaries.
    let text = "котик".repeat(20);
    let chunks = chunk_text(&text, 7);

    assert!(chunks.iter().all(|c| c.chars().count() <= 7));
    assert_eq!(chunks.concat(), text);
}

#[test]
fn pack_sections_stays_under_limit() {
    let sections = vec![
        "summary line".to_string(),
        "x".repeat(300),
        "y".repeat(300),
    ];
    let messages = pack_sections(&sections, 128);

    assert!(!messages.is_empty());
    assert!(messages.iter().all(|m| m.chars().count() <= 128));
}

#[test]
fn pack_sections_preserves_section_content() {
    let big = "line with <tags> & ampersands\n".repeat(40);
    let sections = vec!["head".to_string(), big.clone()];
    let messages = pack_sections(&sections, 256);

    let mut joined = messages.concat();
    // The head goes out as plain text with a trailing newline.
    joined = joined
        .strip_prefix("head\n")
        .expect("head section first")
        .to_string();
    let body: String = joined
        .replace("<pre>", "")
        .replace("</pre>\n\n", "");
    assert_eq!(body, escape_html(&big));
}

#[test]
fn pack_sections_merges_small_sections() {
    let sections = vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
    ];
    let messages = pack_sections(&sections, TELEGRAM_MESSAGE_LIMIT);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], "a\n<pre>b</pre>\n\n<pre>c</pre>\n\n");
}

#[test]
fn pre_blocks_escape_html() {
    let sections = vec![
        "head".to_string(),
        "<script>alert(1)</script>".to_string(),
    ];
    let messages = pack_sections(&sections, TELEGRAM_MESSAGE_LIMIT);

    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("&lt;script&gt;"));
    assert!(!messages[0].contains("<script>"));
}

#[test]
fn error_report_fits_telegram_messages() {
    let error = anyhow!("outer failure").context("z".repeat(10_000));
    let messages = build_error_report("a callback query", "dq_05.05.2024_correct", &error);

    assert!(messages.len() > 1);
    assert!(messages
        .iter()
        .all(|m| m.chars().count() <= TELEGRAM_MESSAGE_LIMIT));
    assert!(messages[0].starts_with("An error occurred while handling a callback query"));
    assert!(messages[0].contains("dq_05.05.2024_correct"));
}
