pub mod encoding;
pub mod pdf;
pub mod reader;

pub use encoding::{DEFAULT_ENCODING_CHAIN, TextEncoding};
pub use reader::{ContentReader, ReadError};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Declared or inferred on-disk format of an ingested file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Text,
}

impl DocumentFormat {
    /// Infer the format from the file extension (case-insensitive).
    /// Anything that is not a PDF is treated as text of unknown encoding.
    pub fn from_path(path: &Path) -> Self {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        if extension.eq_ignore_ascii_case("pdf") {
            DocumentFormat::Pdf
        } else {
            DocumentFormat::Text
        }
    }
}

/// Undecoded file contents plus the inferred format.
#[derive(Debug)]
pub struct RawDocument {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl RawDocument {
    /// Read raw bytes from a file.
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        if !path.exists() {
            return Err(ReadError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
            _ => ReadError::Io {
                path: path.to_path_buf(),
                message: error.to_string(),
            },
        })?;

        Ok(RawDocument {
            path: path.to_path_buf(),
            bytes,
            format: DocumentFormat::from_path(path),
        })
    }
}

/// Best-effort textual rendering of a `RawDocument`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub content: String,
    pub method: DecodeMethod,
}

impl DecodedText {
    /// True when content was recovered through the lossy terminal fallback.
    pub fn is_degraded(&self) -> bool {
        self.method == DecodeMethod::LossyUtf8
    }
}

/// How the text was obtained from the raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMethod {
    /// Structured page-by-page PDF text extraction.
    PdfText,
    /// Clean decode with one of the chain encodings.
    Encoded(TextEncoding),
    /// Terminal fallback: UTF-8 with replacement characters.
    LossyUtf8,
}

impl DecodeMethod {
    /// Name used in envelope payloads and warning events.
    pub fn label(self) -> &'static str {
        match self {
            DecodeMethod::PdfText => "pdf-text",
            DecodeMethod::Encoded(encoding) => encoding.label(),
            DecodeMethod::LossyUtf8 => "utf-8-lossy",
        }
    }
}
