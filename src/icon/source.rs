use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::{IconError, Result};

/// Prefix of an inline base64-encoded SVG data URI.
const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Where an icon's pixels come from: an inline data URI or a remote URL.
///
/// Vector icons are stored as `data:image/svg+xml;base64,…` URIs built
/// from literal SVG markup. The encoding is pure and deterministic, so
/// the same markup always produces the same URI byte-for-byte. Bitmap
/// icons keep their remote HTTPS URL verbatim; this library never
/// fetches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconSource(String);

impl IconSource {
    /// Encodes literal SVG markup into an inline data URI
    pub fn svg(markup: &str) -> Self {
        #[cfg(feature = "debug")]
        log::trace!("encoding {} bytes of SVG markup as data URI", markup.len());
        Self(format!("{}{}", SVG_DATA_URI_PREFIX, BASE64.encode(markup)))
    }

    /// Wraps a remote image URL without modification
    pub fn url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Gets the URI string handed to the mapping library
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether this source is an inline SVG data URI
    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with(SVG_DATA_URI_PREFIX)
    }

    /// Decodes an inline SVG data URI back to its original markup.
    ///
    /// Errors on remote sources, since their bytes are not embedded.
    pub fn decode_svg(&self) -> Result<String> {
        let payload = self
            .0
            .strip_prefix(SVG_DATA_URI_PREFIX)
            .ok_or_else(|| IconError::NotDataUri(self.0.clone()))?;
        let bytes = BASE64.decode(payload)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl std::fmt::Display for IconSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_round_trip() {
        let markup = r##"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0h1v1z" fill="#FFD700"/></svg>"##;
        let source = IconSource::svg(markup);
        assert!(source.is_data_uri());
        assert_eq!(source.decode_svg().unwrap(), markup);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let markup = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        assert_eq!(IconSource::svg(markup), IconSource::svg(markup));
    }

    #[test]
    fn test_remote_url_is_kept_verbatim() {
        let url = "https://example.com/marker-icon-green.png";
        let source = IconSource::url(url);
        assert_eq!(source.as_str(), url);
        assert!(!source.is_data_uri());
    }

    #[test]
    fn test_decode_rejects_remote_source() {
        let source = IconSource::url("https://example.com/pin.png");
        assert!(matches!(
            source.decode_svg(),
            Err(crate::IconError::NotDataUri(_))
        ));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let source = IconSource::url("https://example.com/pin.png");
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json, serde_json::json!("https://example.com/pin.png"));
    }
}
