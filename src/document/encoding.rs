/// Candidate text encodings for the sequential decode chain.
///
/// Latin-1 accepts any byte sequence, so entries after it are normally
/// unreachable in the default chain; the full list is kept because callers
/// can supply their own ordering through `ContentReader::with_encodings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
    Iso8859_1,
}

/// Default decode order: strict UTF-8, then the single-byte fallbacks.
pub const DEFAULT_ENCODING_CHAIN: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
    TextEncoding::Iso8859_1,
];

impl TextEncoding {
    /// Name used in envelope payloads and warning events.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "windows-1252",
            TextEncoding::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decode bytes with this encoding, or `None` when the bytes are not
    /// valid for it.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let (text, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
                (!had_errors).then(|| text.into_owned())
            }
            TextEncoding::Latin1 | TextEncoding::Iso8859_1 => {
                Some(encoding_rs::mem::decode_latin1(bytes).into_owned())
            }
            TextEncoding::Windows1252 => {
                let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
                (!had_errors).then(|| text.into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ENCODING_CHAIN, TextEncoding};

    #[test]
    fn utf8_accepts_valid_bytes() {
        let decoded = TextEncoding::Utf8.decode("résumé".as_bytes());
        assert_eq!(decoded.as_deref(), Some("résumé"));
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        assert_eq!(TextEncoding::Utf8.decode(b"r\xe9sum\xe9"), None);
    }

    #[test]
    fn latin1_decodes_any_byte_sequence() {
        let decoded = TextEncoding::Latin1.decode(b"r\xe9sum\xe9");
        assert_eq!(decoded.as_deref(), Some("résumé"));
    }

    #[test]
    fn iso8859_1_behaves_like_latin1() {
        let decoded = TextEncoding::Iso8859_1.decode(b"Zo\xeb");
        assert_eq!(decoded.as_deref(), Some("Zoë"));
    }

    #[test]
    fn windows1252_maps_smart_punctuation() {
        // 0x93/0x94 are curly quotes in windows-1252 but invalid UTF-8.
        let decoded = TextEncoding::Windows1252.decode(b"\x93skills\x94");
        assert_eq!(decoded.as_deref(), Some("\u{201c}skills\u{201d}"));
    }

    #[test]
    fn default_chain_starts_strict_and_ends_permissive() {
        assert_eq!(DEFAULT_ENCODING_CHAIN[0], TextEncoding::Utf8);
        assert_eq!(DEFAULT_ENCODING_CHAIN[1], TextEncoding::Latin1);
        assert_eq!(DEFAULT_ENCODING_CHAIN.len(), 4);
    }

    #[test]
    fn labels_are_stable() {
        let labels: Vec<&str> = DEFAULT_ENCODING_CHAIN
            .iter()
            .map(|encoding| encoding.label())
            .collect();
        assert_eq!(labels, ["utf-8", "latin-1", "windows-1252", "iso-8859-1"]);
    }
}
