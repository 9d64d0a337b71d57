//! Local image resources and their encoding into inline request parts.

mod data_url;

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use mime::Mime;

use crate::{error::EncodingError, models::InlineData};

pub use data_url::DataUrl;

/// An image supplied by the caller, either held in memory or read from disk on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResource {
    /// Raw bytes with a declared MIME type.
    Memory {
        /// The encoded image file contents
        bytes: Vec<u8>,
        /// The declared MIME type
        mime_type: String,
    },
    /// A file whose MIME type is guessed from its extension.
    File {
        /// Location of the image file
        path: PathBuf,
    },
}

impl ImageResource {
    /// Creates a resource from bytes already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self::Memory {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Creates a resource backed by a file. Nothing is read until it is encoded.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::File {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a resource from a `data:<type>;base64,<data>` URL, such as a previous result.
    pub fn from_data_url(data_url: &str) -> Result<Self, EncodingError> {
        let data_url: DataUrl = data_url.parse()?;
        let bytes = data_url.decode()?;
        Ok(Self::from_bytes(bytes, data_url.mime_type()))
    }
}

/// Reads an image resource and encodes it as an inline data part.
///
/// # Errors
///
/// Returns [`EncodingError::Read`] if a file-backed resource cannot be read and
/// [`EncodingError::MimeType`] if no concrete `image/*` type can be determined.
pub async fn encode_image(resource: &ImageResource) -> Result<InlineData, EncodingError> {
    let (mime_type, bytes) = match resource {
        ImageResource::Memory { bytes, mime_type } => {
            (parse_mime(mime_type)?, Cow::Borrowed(bytes.as_slice()))
        }
        ImageResource::File { path } => {
            let guessed = mime_guess::from_path(path).first().ok_or_else(|| {
                EncodingError::MimeType(format!("unknown MIME type for {}", path.display()))
            })?;
            let mime_type = parse_mime(guessed.as_ref())?;
            (mime_type, Cow::Owned(tokio::fs::read(path).await?))
        }
    };

    Ok(DataUrl::from_bytes(mime_type.essence_str(), &bytes).into())
}

fn parse_mime(declared: &str) -> Result<Mime, EncodingError> {
    let parsed: Mime = declared
        .trim()
        .parse()
        .map_err(|e| EncodingError::MimeType(format!("{declared:?}: {e}")))?;
    if parsed.type_() == mime::STAR || parsed.subtype() == mime::STAR {
        return Err(EncodingError::MimeType(format!(
            "{declared:?} is not a concrete type"
        )));
    }
    if parsed.type_() != mime::IMAGE {
        return Err(EncodingError::MimeType(format!("{declared:?} is not an image type")));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn encodes_memory_resource() {
        let resource = ImageResource::from_bytes(b"GIF89a".to_vec(), "image/gif");
        let part = encode_image(&resource).await.unwrap();
        assert_eq!(part.mime_type, "image/gif");
        assert_eq!(part.data, "R0lGODlh");
    }

    #[tokio::test]
    async fn mime_parameters_are_dropped() {
        let resource = ImageResource::from_bytes(vec![1, 2, 3], "image/jpeg; q=0.9");
        assert_eq!(encode_image(&resource).await.unwrap().mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn rejects_missing_or_malformed_mime_type() {
        for declared in ["", "png", "image/*", "*/*", "application/pdf", "text/plain"] {
            let resource = ImageResource::from_bytes(vec![0u8; 4], declared);
            assert!(
                matches!(
                    encode_image(&resource).await,
                    Err(EncodingError::MimeType(_))
                ),
                "{declared:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let resource = ImageResource::from_path("/definitely/not/here.png");
        assert!(matches!(
            encode_image(&resource).await,
            Err(EncodingError::Read(_))
        ));
    }

    #[tokio::test]
    async fn unknown_extension_is_a_mime_error() {
        let resource = ImageResource::from_path("photo.notanimage");
        assert!(matches!(
            encode_image(&resource).await,
            Err(EncodingError::MimeType(_))
        ));
    }

    #[tokio::test]
    async fn non_image_file_is_rejected_before_reading() {
        for path in ["notes.txt", "scan.pdf"] {
            let resource = ImageResource::from_path(path);
            assert!(
                matches!(
                    encode_image(&resource).await,
                    Err(EncodingError::MimeType(_))
                ),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn data_url_resource_round_trips() {
        let resource = ImageResource::from_data_url("data:image/png;base64,AAAA").unwrap();
        assert_eq!(resource, ImageResource::from_bytes(vec![0, 0, 0], "image/png"));
        assert!(ImageResource::from_data_url("not a data url").is_err());
    }
}
