//! Rendered chart payloads.

use base64::{engine::general_purpose, Engine as _};

/// An encoded chart image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    mime: &'static str,
    bytes: Vec<u8>,
}

impl ChartImage {
    pub(crate) fn svg(document: String) -> Self {
        Self {
            mime: "image/svg+xml",
            bytes: document.into_bytes(),
        }
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:` URI embedding the whole image, usable as an `<img src>`.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        let image = ChartImage::svg("<svg/>".to_string());
        assert_eq!(image.mime(), "image/svg+xml");
        assert_eq!(image.data_uri(), "data:image/svg+xml;base64,PHN2Zy8+");
        assert!(!image.is_empty());
    }
}
