use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Display reference for a consultant's picture. The ledger stores it as-is
/// and never looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRef(String);

impl AvatarRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarError {
    #[error("empty image payload")]
    Empty,
    #[error("unsupported image format (expected png or jpeg)")]
    UnsupportedFormat,
}

/// Turns an uploaded image into something the presentation layer can show.
pub trait AvatarStore {
    fn store(&mut self, consultant_id: &str, payload: &[u8]) -> Result<AvatarRef, AvatarError>;
}

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Inlines PNG and JPEG images as `data:` URLs.
#[derive(Debug, Default)]
pub struct DataUrlAvatarStore;

impl DataUrlAvatarStore {
    fn mime_of(payload: &[u8]) -> Result<&'static str, AvatarError> {
        if payload.is_empty() {
            return Err(AvatarError::Empty);
        }
        if payload.starts_with(PNG_MAGIC) {
            Ok("image/png")
        } else if payload.starts_with(JPEG_MAGIC) {
            Ok("image/jpeg")
        } else {
            Err(AvatarError::UnsupportedFormat)
        }
    }
}

impl AvatarStore for DataUrlAvatarStore {
    fn store(&mut self, consultant_id: &str, payload: &[u8]) -> Result<AvatarRef, AvatarError> {
        let mime = Self::mime_of(payload)?;
        tracing::debug!(
            consultant = consultant_id,
            mime,
            bytes = payload.len(),
            "avatar encoded"
        );
        Ok(AvatarRef(format!(
            "data:{mime};base64,{}",
            STANDARD.encode(payload)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_becomes_data_url() {
        let mut store = DataUrlAvatarStore;
        let payload = [PNG_MAGIC, b"rest".as_slice()].concat();
        let avatar = store.store("consultant-0", &payload).unwrap();

        assert!(avatar.as_str().starts_with("data:image/png;base64,"));
        assert!(avatar.as_str().ends_with(&STANDARD.encode(&payload)));
    }

    #[test]
    fn jpeg_is_accepted() {
        let mut store = DataUrlAvatarStore;
        let avatar = store
            .store("consultant-0", &[0xFF, 0xD8, 0xFF, 0xE0, 0x00])
            .unwrap();
        assert!(avatar.as_str().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn other_formats_are_rejected() {
        let mut store = DataUrlAvatarStore;
        assert_eq!(
            store.store("consultant-0", b"GIF89a...."),
            Err(AvatarError::UnsupportedFormat)
        );
        assert_eq!(store.store("consultant-0", &[]), Err(AvatarError::Empty));
    }
}
