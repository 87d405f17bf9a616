//! Formats operator-facing error reports and splits them into messages that
//! fit the transport's size limit.

/// Maximum characters Telegram accepts in a single message.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>\n\n";
// "<pre>" + "</pre>\n\n"
const PRE_WRAPPER_LEN: usize = 13;

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Splits `text` into chunks of at most `limit` characters.
///
/// Concatenating the chunks reproduces the input exactly. When a cut would
/// land inside an HTML entity such as `&amp;`, the cut moves back to just
/// before the `&` so no chunk carries a broken entity (unless the entity
/// itself is longer than the limit).
pub fn chunk_text(text: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let mut end = usize::min(start + limit, chars.len());
        if end < chars.len() {
            if let Some(offset) = chars[start..end].iter().rposition(|&c| c == '&') {
                let amp = start + offset;
                if end - amp < 6 && !chars[amp..end].contains(&';') && amp > start {
                    end = amp;
                }
            }
        }
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }

    chunks
}

/// Renders report sections into HTML messages, each at most `limit`
/// characters. The first section is sent as plain text, the rest are escaped
/// and wrapped in `<pre>` blocks. Consecutive pieces are packed into one
/// message while they fit.
pub fn pack_sections(sections: &[String], limit: usize) -> Vec<String> {
    debug_assert!(limit > PRE_WRAPPER_LEN);

    let mut messages: Vec<String> = Vec::new();

    for (idx, section) in sections.iter().enumerate() {
        let pieces: Vec<String> = if idx == 0 {
            chunk_text(&format!("{section}\n"), limit)
        } else {
            let budget = limit.saturating_sub(PRE_WRAPPER_LEN).max(1);
            chunk_text(&escape_html(section), budget)
                .into_iter()
                .map(|part| format!("{PRE_OPEN}{part}{PRE_CLOSE}"))
                .collect()
        };

        for piece in pieces {
            match messages.last_mut() {
                Some(last) if last.chars().count() + piece.chars().count() <= limit => {
                    last.push_str(&piece);
                }
                _ => messages.push(piece),
            }
        }
    }

    messages
}

/// Builds the admin report for a failed operation: a summary line, the
/// triggering payload, and the full error chain.
pub fn build_error_report(event: &str, payload: &str, error: &anyhow::Error) -> Vec<String> {
    let sections = [
        format!("An error occurred while handling {event}"),
        format!("payload = {payload}"),
        format!("{error:?}"),
    ];
    pack_sections(&sections, TELEGRAM_MESSAGE_LIMIT)
}
