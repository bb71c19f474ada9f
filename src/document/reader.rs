use crate::document::{
    DEFAULT_ENCODING_CHAIN, DecodeMethod, DecodedText, DocumentFormat, RawDocument, TextEncoding,
    pdf,
};
use crate::progress::reporter::report_warning_code;
use std::fmt;
use std::path::{Path, PathBuf};

/// Reads files of unknown encoding into best-effort text.
///
/// Decoding never fails for a readable file: structured PDF extraction is
/// tried first for `.pdf` paths, then the encoding chain in order, then a
/// lossy UTF-8 read that always produces a string.
pub struct ContentReader {
    encodings: Vec<TextEncoding>,
}

impl ContentReader {
    /// Reader with the default encoding chain.
    pub fn new() -> Self {
        Self::with_encodings(DEFAULT_ENCODING_CHAIN.to_vec())
    }

    /// Reader with a caller-supplied encoding chain, tried in order.
    pub fn with_encodings(encodings: Vec<TextEncoding>) -> Self {
        Self { encodings }
    }

    /// Read and decode the file at `path`.
    ///
    /// Fails only at the file level: missing path or unreadable file.
    pub fn read(&self, path: &Path) -> Result<DecodedText, ReadError> {
        let raw = RawDocument::open(path)?;
        Ok(self.decode(&raw))
    }

    /// Decode an already-ingested document. Always produces text.
    pub fn decode(&self, raw: &RawDocument) -> DecodedText {
        let path = raw.path.display().to_string();

        if raw.format == DocumentFormat::Pdf {
            match pdf::extract_pdf_text(&raw.path) {
                Ok(content) if !content.trim().is_empty() => {
                    return DecodedText {
                        content,
                        method: DecodeMethod::PdfText,
                    };
                }
                Ok(_) => report_warning_code(
                    &path,
                    Some("W_PDF_FALLBACK"),
                    "pdf text extraction returned empty content, trying text decode",
                ),
                Err(error) => report_warning_code(
                    &path,
                    Some("W_PDF_FALLBACK"),
                    &format!("pdf text extraction failed: {error}"),
                ),
            }
        }

        for encoding in &self.encodings {
            if let Some(content) = encoding.decode(&raw.bytes) {
                return DecodedText {
                    content,
                    method: DecodeMethod::Encoded(*encoding),
                };
            }
        }

        report_warning_code(
            &path,
            Some("W_DECODE_DEGRADED"),
            "no chain encoding accepted the bytes, using lossy utf-8",
        );
        DecodedText {
            content: String::from_utf8_lossy(&raw.bytes).into_owned(),
            method: DecodeMethod::LossyUtf8,
        }
    }
}

impl Default for ContentReader {
    fn default() -> Self {
        Self::new()
    }
}

/// File-level failure surfaced to the caller. Decode problems never land
/// here; they degrade inside `ContentReader::decode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    NotFound(PathBuf),
    Io { path: PathBuf, message: String },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Io { path, message } => {
                write!(f, "failed reading '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ReadError {}
