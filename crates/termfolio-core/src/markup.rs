//! Inline markup carried by terminal lines.
//!
//! Output lines may contain a small whitelist of markup: `<br>` line breaks
//! and `<span class='...'>` accents. The web front end renders it as HTML;
//! [`to_plain`] flattens it for text-only consumers such as the CLI.

use std::sync::LazyLock;

use regex::Regex;

/// Marker substituted for every newline in file content.
pub const LINE_BREAK: &str = "<br>";

// ASCII-only case folding: the workspace builds `regex` without Unicode tables
static BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)<br\s*/?>").expect("line break pattern is valid"));

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("tag pattern is valid"));

/// Replace every `\n` with [`LINE_BREAK`].
pub fn line_breaks(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

/// Flatten markup to plain text.
///
/// `<br>` becomes a newline, other tags are dropped and the basic HTML
/// entities are decoded. Text that only looks like markup (no tag name
/// after `<`) is left alone.
pub fn to_plain(markup: &str) -> String {
    let text = BREAK_TAG.replace_all(markup, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    // `&amp;` last so `&amp;lt;` stays `&lt;`
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
