// File: crates/glow-client/src/upload.rs
// Summary: Selfie upload validation.
// Notes: The MIME type is sniffed from the file's magic bytes with
//        `image::guess_format`; the file extension is only consulted when the
//        bytes are not a recognised image. Type is checked before size.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File type not supported. Please upload: {}", .accepted.join(", "))]
    UnsupportedType { found: Option<String>, accepted: Vec<String> },
    #[error("File size exceeds {limit_mb}MB limit")]
    TooLarge { size: u64, limit_mb: u64 },
}

/// What the uploader accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadPolicy {
    pub max_size_mb: u64,
    pub accepted_types: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_size_mb: 10,
            accepted_types: vec!["image/jpeg".into(), "image/png".into(), "image/webp".into()],
        }
    }
}

impl UploadPolicy {
    pub fn max_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(MB)
    }

    pub fn accepts(&self, mime: &str) -> bool {
        self.accepted_types.iter().any(|t| t.eq_ignore_ascii_case(mime))
    }

    pub fn validate(&self, upload: &ImageUpload) -> Result<(), UploadError> {
        match upload.mime.as_deref() {
            Some(mime) if self.accepts(mime) => {}
            found => {
                return Err(UploadError::UnsupportedType {
                    found: found.map(str::to_string),
                    accepted: self.accepted_types.clone(),
                })
            }
        }
        let size = upload.size();
        if size > self.max_bytes() {
            return Err(UploadError::TooLarge { size, limit_mb: self.max_size_mb });
        }
        Ok(())
    }
}

/// An image file held in memory, ready to be posted as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = sniff_mime(&file_name, &bytes);
        Self { file_name, mime, bytes }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn sniff_mime(file_name: &str, bytes: &[u8]) -> Option<String> {
    image::guess_format(bytes)
        .or_else(|_| image::ImageFormat::from_path(file_name))
        .ok()
        .map(|format| format.to_mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0];

    #[test]
    fn sniffs_bytes_before_extension() {
        let up = ImageUpload::new("selfie.txt", PNG_MAGIC.to_vec());
        assert_eq!(up.mime.as_deref(), Some("image/png"));
        assert!(UploadPolicy::default().validate(&up).is_ok());
    }

    #[test]
    fn falls_back_to_extension() {
        let up = ImageUpload::new("selfie.jpg", b"not really".to_vec());
        assert_eq!(up.mime.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn rejects_unknown_type_with_allow_list() {
        let up = ImageUpload::new("notes.txt", b"hello".to_vec());
        let err = UploadPolicy::default().validate(&up).unwrap_err();
        assert_eq!(err.to_string(), "File type not supported. Please upload: image/jpeg, image/png, image/webp");
    }

    #[test]
    fn rejects_known_but_disallowed_type() {
        let up = ImageUpload::new("face.gif", b"GIF89a......".to_vec());
        assert_eq!(up.mime.as_deref(), Some("image/gif"));
        assert!(matches!(
            UploadPolicy::default().validate(&up),
            Err(UploadError::UnsupportedType { found: Some(_), .. })
        ));
    }

    #[test]
    fn size_limit_is_inclusive() {
        let policy = UploadPolicy { max_size_mb: 1, ..UploadPolicy::default() };
        let mut bytes = JPEG_MAGIC.to_vec();
        bytes.resize(MB as usize, 0);
        assert!(policy.validate(&ImageUpload::new("a.jpg", bytes.clone())).is_ok());

        bytes.push(0);
        let err = policy.validate(&ImageUpload::new("a.jpg", bytes)).unwrap_err();
        assert_eq!(err.to_string(), "File size exceeds 1MB limit");
    }

    #[test]
    fn type_is_checked_before_size() {
        let policy = UploadPolicy { max_size_mb: 0, ..UploadPolicy::default() };
        let err = policy.validate(&ImageUpload::new("a.bin", vec![1, 2, 3])).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();
        let up = ImageUpload::from_path(&path).unwrap();
        assert_eq!(up.file_name, "me.png");
        assert_eq!(up.size(), PNG_MAGIC.len() as u64);
    }
}
