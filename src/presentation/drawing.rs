//! Drawings: shapes that embed binary media (pictures, audio, video).

use super::format::{ImageFormat, media_type_for_extension};
use super::shape::Geometry;
use crate::common::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// What kind of payload a drawing embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawingKind {
    /// A picture
    Image(ImageFormat),
    /// An audio or video clip
    Media {
        mime_type: &'static str,
        extension: String,
    },
}

/// Where the payload of a drawing comes from.
#[derive(Debug, Clone)]
pub enum DrawingSource {
    /// In-memory bytes
    Bytes(Bytes),
    /// A file on disk, read when the picture part is written
    File(PathBuf),
    /// A base64 payload (the part after `base64,` in a data URI)
    Base64(String),
}

/// A shape that embeds binary content.
///
/// Drawings are shared as `Arc<Drawing>`; identity is the allocation, not the
/// content. Placing the same `Arc` on two slides embeds the payload once,
/// while two equal but separately allocated drawings are embedded twice.
#[derive(Debug, Clone)]
pub struct Drawing {
    name: String,
    description: String,
    geometry: Geometry,
    kind: DrawingKind,
    source: DrawingSource,
}

impl Drawing {
    /// Create a picture from in-memory bytes, detecting the image format.
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| Error::InvalidFormat("unrecognized image data".to_string()))?;
        Ok(Self::new(name, DrawingKind::Image(format), DrawingSource::Bytes(data)))
    }

    /// Create a picture or media clip backed by a file.
    ///
    /// The kind is taken from the file extension; the file itself is only
    /// opened when the archive is written.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                Error::InvalidFormat(format!("missing file extension: {}", path.display()))
            })?;

        let kind = if let Some(format) = ImageFormat::from_extension(ext) {
            DrawingKind::Image(format)
        } else if let Some(mime_type) = media_type_for_extension(ext) {
            DrawingKind::Media {
                mime_type,
                extension: ext.to_ascii_lowercase(),
            }
        } else {
            return Err(Error::InvalidFormat(format!(
                "unsupported drawing type: {}",
                path.display()
            )));
        };

        Ok(Self::new(name, kind, DrawingSource::File(path.to_path_buf())))
    }

    /// Create a picture from a `data:image/...;base64,...` URI.
    pub fn from_data_uri(name: impl Into<String>, uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidFormat("not a data URI".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidFormat("data URI without payload".to_string()))?;
        let mime = header.strip_suffix(";base64").ok_or_else(|| {
            Error::InvalidFormat("only base64 data URIs are supported".to_string())
        })?;
        let format = ImageFormat::from_mime_type(mime)
            .ok_or_else(|| Error::InvalidFormat(format!("unsupported image type: {}", mime)))?;

        Ok(Self::new(
            name,
            DrawingKind::Image(format),
            DrawingSource::Base64(payload.to_string()),
        ))
    }

    fn new(name: impl Into<String>, kind: DrawingKind, source: DrawingSource) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            geometry: Geometry::default(),
            kind,
            source,
        }
    }

    /// Set the position and size on the slide.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the alternative text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn kind(&self) -> &DrawingKind {
        &self.kind
    }

    pub fn source(&self) -> &DrawingSource {
        &self.source
    }

    /// Whether this drawing is an audio/video clip rather than a picture.
    pub fn is_media(&self) -> bool {
        matches!(self.kind, DrawingKind::Media { .. })
    }

    /// File extension used for the embedded part.
    pub fn extension(&self) -> &str {
        match &self.kind {
            DrawingKind::Image(format) => format.extension(),
            DrawingKind::Media { extension, .. } => extension,
        }
    }

    /// MIME type recorded in the package manifest.
    pub fn mime_type(&self) -> &'static str {
        match &self.kind {
            DrawingKind::Image(format) => format.mime_type(),
            DrawingKind::Media { mime_type, .. } => *mime_type,
        }
    }

    /// Open the payload for reading.
    ///
    /// Base64 payloads are decoded on the fly.
    pub fn open(&self) -> Result<Box<dyn Read + '_>> {
        let reader: Box<dyn Read + '_> = match &self.source {
            DrawingSource::Bytes(data) => Box::new(Cursor::new(data.as_ref())),
            DrawingSource::File(path) => Box::new(std::fs::File::open(path)?),
            DrawingSource::Base64(payload) => Box::new(base64::read::DecoderReader::new(
                Cursor::new(payload.as_bytes()),
                &STANDARD,
            )),
        };
        Ok(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_from_bytes_detects_format() {
        let drawing = Drawing::from_bytes("logo", PNG_HEADER.to_vec()).unwrap();
        assert_eq!(drawing.kind(), &DrawingKind::Image(ImageFormat::Png));
        assert_eq!(drawing.extension(), "png");
        assert!(!drawing.is_media());

        assert!(Drawing::from_bytes("junk", b"nope".to_vec()).is_err());
    }

    #[test]
    fn test_from_file_media() {
        let drawing = Drawing::from_file("clip", "movies/intro.MP4").unwrap();
        assert!(drawing.is_media());
        assert_eq!(drawing.extension(), "mp4");
        assert_eq!(drawing.mime_type(), "video/mp4");

        assert!(Drawing::from_file("x", "notes.txt").is_err());
        assert!(Drawing::from_file("x", "no_extension").is_err());
    }

    #[test]
    fn test_data_uri_roundtrip() {
        // "hello" in base64
        let drawing = Drawing::from_data_uri("inline", "data:image/gif;base64,aGVsbG8=").unwrap();
        assert_eq!(drawing.extension(), "gif");

        let mut out = Vec::new();
        drawing.open().unwrap().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"hello");

        assert!(Drawing::from_data_uri("x", "data:image/gif,plain").is_err());
        assert!(Drawing::from_data_uri("x", "http://example.com/a.png").is_err());
    }
}
