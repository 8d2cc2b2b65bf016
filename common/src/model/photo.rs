//! Data URL handling for photos.
//!
//! Photos are stored as self-contained `data:<mime>;base64,<payload>` strings
//! so they can be used directly as an `<img>` source. The frontend builds them
//! from the bytes of a picked file; the importer parses them back to write the
//! images out.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use thiserror::Error;

static DATA_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^data:(?P<mime>[^;,]+);base64,(?P<data>.+)$").unwrap()
});

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("not a base64 data URL")]
    NotDataUrl,
    #[error("invalid base64 payload: {0}")]
    Payload(#[from] base64::DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub payload: String,
}

impl DataUrl {
    /// Encodes raw file content. An empty media type falls back to
    /// `application/octet-stream`, as browsers do for untyped files.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let mime = mime.trim();
        Self {
            mime: if mime.is_empty() {
                FALLBACK_MIME.to_string()
            } else {
                mime.to_string()
            },
            payload: general_purpose::STANDARD.encode(bytes),
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        Ok(general_purpose::STANDARD.decode(self.payload.trim())?)
    }

    /// File extension used when writing the image to disk.
    pub fn extension(&self) -> &'static str {
        match self.mime.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}

impl FromStr for DataUrl {
    type Err = DataUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATA_URL_RE.captures(s).ok_or(DataUrlError::NotDataUrl)?;
        Ok(Self {
            mime: caps["mime"].to_string(),
            payload: caps["data"].to_string(),
        })
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_an_img_source() {
        let url = DataUrl::from_bytes("image/png", b"\x89PNG");
        assert_eq!(url.to_string(), "data:image/png;base64,iVBORw==");
        assert_eq!(DataUrl::from_bytes("", b"x").mime, FALLBACK_MIME);
    }

    #[test]
    fn parses_and_decodes() {
        let url: DataUrl = "DATA:Image/JPEG;base64,aGVsbG8=".parse().unwrap();
        assert_eq!(url.mime, "Image/JPEG");
        assert_eq!(url.extension(), "jpg");
        assert_eq!(url.decode().unwrap(), b"hello");
    }

    #[test]
    fn rejects_non_data_urls() {
        assert!(matches!(
            "https://example.com/a.png".parse::<DataUrl>(),
            Err(DataUrlError::NotDataUrl)
        ));
        assert!(matches!(
            "data:text/plain,hello".parse::<DataUrl>(),
            Err(DataUrlError::NotDataUrl)
        ));
    }

    #[test]
    fn unknown_types_get_bin_extension() {
        let url = DataUrl::from_bytes("image/webp", b"");
        assert_eq!(url.extension(), "bin");
    }
}
