use std::{fmt, str::FromStr};

use base64::{engine::general_purpose::STANDARD as base64_engine, Engine};

use crate::{error::EncodingError, models::InlineData};

/// A base64 `data:` URL holding one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    data: String,
}

impl DataUrl {
    /// Wraps an already base64-encoded payload without touching it.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Base64-encodes raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, base64_engine.encode(bytes))
    }

    /// The declared MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Decodes the payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, EncodingError> {
        base64_engine
            .decode(&self.data)
            .map_err(|e| EncodingError::InvalidDataUrl(format!("payload is not base64: {e}")))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

impl FromStr for DataUrl {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (header, data) = s
            .split_once(',')
            .ok_or_else(|| EncodingError::InvalidDataUrl("missing ',' separator".into()))?;
        let mime_type = header
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime_type, _)| mime_type)
            .filter(|mime_type| !mime_type.is_empty())
            .ok_or_else(|| {
                EncodingError::InvalidDataUrl(format!("could not parse MIME type from {header:?}"))
            })?;

        Ok(Self::new(mime_type, data))
    }
}

impl From<InlineData> for DataUrl {
    fn from(inline_data: InlineData) -> Self {
        Self::new(inline_data.mime_type, inline_data.data)
    }
}

impl From<DataUrl> for InlineData {
    fn from(data_url: DataUrl) -> Self {
        Self {
            mime_type: data_url.mime_type,
            data: data_url.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_data_url() {
        assert_eq!(
            DataUrl::new("image/png", "AAAA").to_string(),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn parses_header_and_payload() {
        let url: DataUrl = "data:image/webp;base64,UklGRg==".parse().unwrap();
        assert_eq!(url.mime_type(), "image/webp");
        assert_eq!(url.data(), "UklGRg==");
        assert_eq!(url.decode().unwrap(), b"RIFF");
    }

    #[test]
    fn rejects_urls_without_type_or_separator() {
        for bad in [
            "data:image/png;base64",
            "data:;base64,AAAA",
            "image/png;base64,AAAA",
            "data:image/png,AAAA",
            "",
        ] {
            assert!(
                matches!(bad.parse::<DataUrl>(), Err(EncodingError::InvalidDataUrl(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn decode_rejects_non_base64() {
        assert!(DataUrl::new("image/png", "***").decode().is_err());
    }
}
