//! Best-effort RTF to plain text conversion.
//!
//! This is a chain of textual substitutions, not an RTF parser. It handles
//! the common output of word processors well enough for note text to be
//! summarized or quizzed on.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::warn;

/// Leading signature of an RTF document.
pub const RTF_SIGNATURE: &str = "{\\rtf";

struct RtfPatterns {
    hex_escape: Regex,
    control_word: Regex,
    destination_group: Regex,
    braces: Regex,
    unicode_escape: Regex,
    unicode_run: Regex,
    paragraph: Regex,
    line_ending: Regex,
    trailing_space: Regex,
    blank_lines: Regex,
}

impl RtfPatterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            hex_escape: Regex::new(r"\\'[0-9a-fA-F]{2}")?,
            control_word: Regex::new(r"\\[a-zA-Z]+\d* ?")?,
            destination_group: Regex::new(r"\{\\\*\\[^}]+\}")?,
            braces: Regex::new(r"[{}]")?,
            unicode_escape: Regex::new(r"\\u(-?\d+)\?")?,
            unicode_run: Regex::new(r"(?:\\u-?\d+\?)+")?,
            paragraph: Regex::new(r"\\pard?\b ?")?,
            line_ending: Regex::new(r"\r\n|\r")?,
            trailing_space: Regex::new(r"[^\S\n]+\n")?,
            blank_lines: Regex::new(r"\n{3,}")?,
        })
    }

    fn convert(&self, rtf: &str) -> String {
        // Escapes and paragraph marks go first, otherwise the control word
        // pass would swallow them.
        let text = self.hex_escape.replace_all(rtf, |caps: &Captures| {
            let hex = &caps[0][2..];
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        });
        // Adjacent escapes are decoded together so surrogate pairs survive.
        let text = self.unicode_run.replace_all(&text, |caps: &Captures| {
            let units = self
                .unicode_escape
                .captures_iter(&caps[0])
                .filter_map(|unit| unit[1].parse::<i64>().ok())
                .map(utf16_unit);
            decode_utf16_units(units)
        });
        let text = self.paragraph.replace_all(&text, "\n");
        let text = self.destination_group.replace_all(&text, "");
        let text = self.control_word.replace_all(&text, "");
        let text = self.braces.replace_all(&text, "");
        let text = self.line_ending.replace_all(&text, "\n");
        let text = self.trailing_space.replace_all(&text, "\n");
        self.blank_lines.replace_all(&text, "\n\n").into_owned()
    }
}

static PATTERNS: LazyLock<Result<RtfPatterns, regex::Error>> = LazyLock::new(RtfPatterns::compile);

/// RTF stores `\uN` as a signed 16-bit value.
fn utf16_unit(value: i64) -> u16 {
    value.rem_euclid(1 << 16) as u16
}

/// Lone surrogates become U+FFFD.
fn decode_utf16_units(units: impl IntoIterator<Item = u16>) -> String {
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Returns true if `text` looks like an RTF document.
pub fn is_rtf(text: &str) -> bool {
    text.trim_start().starts_with(RTF_SIGNATURE)
}

/// Converts RTF markup to plain text.
///
/// Never fails: if the conversion cannot run, every brace is removed from the
/// input and the rest is returned as is.
pub fn rtf_to_plain(rtf: &str) -> String {
    match PATTERNS.as_ref() {
        Ok(patterns) => patterns.convert(rtf),
        Err(err) => {
            warn!(error = %err, "rtf conversion unavailable, stripping braces only");
            strip_braces(rtf)
        }
    }
}

fn strip_braces(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '{' | '}')).collect()
}
