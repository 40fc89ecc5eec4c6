//! Text cleanup for API fields: mojibake repair, typographic character
//! normalization and HTML stripping for transcription bodies.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Ordered literal substitutions applied after mojibake repair. Residual
/// typographic Unicode characters are mapped to ASCII equivalents.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2013}", "-"),   // En dash to hyphen
    ("\u{2014}", "--"),  // Em dash to double hyphen
    ("\u{2018}", "'"),   // Left single quote
    ("\u{2019}", "'"),   // Right single quote
    ("\u{201c}", "\""),  // Left double quote
    ("\u{201d}", "\""),  // Right double quote
    ("\u{2026}", "..."), // Ellipsis
    ("\u{200b}", ""),    // Zero-width space
    ("\u{00a0}", " "),   // Non-breaking space
];

/// True if the text carries the telltale byte sequences of UTF-8 decoded as
/// Latin-1/Windows-1252.
fn has_mojibake_markers(text: &str) -> bool {
    text.contains('\u{00c3}') || text.contains('\u{00e2}') || text.contains('\u{fffd}')
}

/// Repair text whose UTF-8 bytes were decoded as Windows-1252/Latin-1,
/// possibly more than once. A pass only takes effect when the whole
/// string encodes back to Windows-1252 bytes that form valid UTF-8;
/// mixed content (legitimate accented characters next to real Unicode
/// punctuation) is left alone. Clean text passes through unchanged,
/// which keeps the repair idempotent.
fn repair_mojibake(text: &str) -> String {
    if !has_mojibake_markers(text) {
        return text.to_string();
    }

    let mut current = text.to_string();
    for _ in 0..3 {
        // Reinterpret the chars as the Windows-1252 bytes they came from
        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1252.encode(&current);
        if had_errors {
            break;
        }

        let redecoded = match String::from_utf8(bytes.into_owned()) {
            Ok(s) => s,
            // Not a misdecoded UTF-8 byte sequence after all
            Err(_) => break,
        };

        if redecoded == current {
            break;
        }
        current = redecoded;
        if !has_mojibake_markers(&current) {
            break;
        }
    }

    current
}

/// Fix encoding issues via mojibake repair and specific character
/// replacements. Idempotent: already-fixed text comes back unchanged.
pub fn fix_encoding(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut fixed_text = repair_mojibake(text);

    for (pattern, replacement) in REPLACEMENTS {
        fixed_text = fixed_text.replace(pattern, replacement);
    }

    fixed_text
}

/// Clean HTML content from a speech transcription down to plain text.
///
/// Entities are decoded first, then encoding issues fixed, then tags
/// stripped with a naive non-nested scanner. A literal `>` inside an
/// attribute value ends the tag early; known limitation, kept for
/// compatibility with existing exports. One divergence from earlier
/// exports: a tag broken across a newline is stripped here too, so the
/// tag-free guarantee holds unconditionally.
pub fn clean_html(html_content: &str) -> String {
    if html_content.is_empty() {
        return String::new();
    }

    let decoded_html = html_escape::decode_html_entities(html_content);

    let fixed_html = fix_encoding(&decoded_html);

    // Remove HTML tags
    let clean_text = HTML_TAG_RE.replace_all(&fixed_html, " ");

    // Replace non-breaking spaces
    let clean_text = clean_text.replace('\u{00a0}', " ");

    // Normalize whitespace (remove multiple spaces)
    let clean_text = WHITESPACE_RE.replace_all(&clean_text, " ");

    clean_text.trim().to_string()
}
