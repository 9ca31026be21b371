//! Plain text extraction for stored and uploaded notes.

use super::rtf::{is_rtf, rtf_to_plain};

/// Decodes note bytes as text, converting RTF documents to plain text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, so any file
/// yields some text.
pub fn extract_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if is_rtf(&text) {
        rtf_to_plain(&text)
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(extract_text(b"Photosynthesis notes\n"), "Photosynthesis notes\n");
    }

    #[test]
    fn test_rtf_is_converted() {
        let text = extract_text(br"{\rtf1\ansi Cells\par Mitochondria}");
        assert_eq!(text, "Cells\nMitochondria");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text = extract_text(&[b'o', b'k', 0xFF]);
        assert!(text.starts_with("ok"));
        assert!(text.contains(char::REPLACEMENT_CHARACTER));
    }
}
