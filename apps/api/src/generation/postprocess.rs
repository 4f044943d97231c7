//! Converts markdown-flavored model output into plain text.
//!
//! The generation prompt asks for plain text, but models still emit markdown
//! often enough that the job-description path always runs this cleanup. The
//! transformation order is fixed and each step is idempotent on already-clean
//! text, so re-running the whole pipeline is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+").unwrap());
static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").unwrap());
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__([^\n]+?)__").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_\n]+)_").unwrap());
static FENCED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static BULLET_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap());
static NUMBERED_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());
static EXTRA_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Strips markdown from generated text, in fixed order: headers, paired
/// emphasis markers, fenced code blocks (removed entirely), inline code
/// spans, bullet markers (normalized to `•`), numbered-list markers, newline
/// runs (collapsed to two), horizontal-whitespace runs (collapsed to one
/// space), surrounding whitespace.
pub fn markdown_to_plain_text(input: &str) -> String {
    let text = HEADERS.replace_all(input, "");
    let text = BOLD_STARS.replace_all(&text, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORES.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    let text = FENCED_CODE.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = BULLET_MARKERS.replace_all(&text, "• ");
    let text = NUMBERED_MARKERS.replace_all(&text, "");
    let text = EXTRA_NEWLINES.replace_all(&text, "\n\n");
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    text.trim().to_string()
}
