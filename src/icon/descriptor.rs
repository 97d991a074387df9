use serde::Serialize;

use crate::{
    core::pixel::{PixelPoint, PixelSize},
    icon::source::IconSource,
    Result,
};

/// A map marker icon descriptor.
///
/// Bundles an image source with the sizing and anchor metadata a
/// mapping library needs to place the image on a marker. Descriptors
/// are immutable values: built once, then handed to the host library's
/// marker-creation call. Field names serialize in the camelCase form
/// Leaflet's `L.icon(...)` expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    icon_url: IconSource,
    icon_size: PixelSize,
    icon_anchor: PixelPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    popup_anchor: Option<PixelPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shadow_url: Option<IconSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shadow_size: Option<PixelSize>,
}

impl Icon {
    /// Creates a vector icon by encoding SVG markup into a data URI
    pub fn svg(markup: &str, icon_size: PixelSize, icon_anchor: PixelPoint) -> Self {
        Self::from_source(IconSource::svg(markup), icon_size, icon_anchor)
    }

    /// Creates a bitmap icon referencing a remote image URL
    pub fn image(url: impl Into<String>, icon_size: PixelSize, icon_anchor: PixelPoint) -> Self {
        Self::from_source(IconSource::url(url), icon_size, icon_anchor)
    }

    fn from_source(icon_url: IconSource, icon_size: PixelSize, icon_anchor: PixelPoint) -> Self {
        Self {
            icon_url,
            icon_size,
            icon_anchor,
            popup_anchor: None,
            shadow_url: None,
            shadow_size: None,
        }
    }

    /// Sets the offset from the anchor where an attached popup opens
    pub fn with_popup_anchor(mut self, anchor: PixelPoint) -> Self {
        self.popup_anchor = Some(anchor);
        self
    }

    /// Attaches a separate shadow image, typical for bitmap pin icons
    pub fn with_shadow(mut self, url: impl Into<String>, size: PixelSize) -> Self {
        self.shadow_url = Some(IconSource::url(url));
        self.shadow_size = Some(size);
        self
    }

    pub fn icon_url(&self) -> &IconSource {
        &self.icon_url
    }

    pub fn icon_size(&self) -> PixelSize {
        self.icon_size
    }

    pub fn icon_anchor(&self) -> PixelPoint {
        self.icon_anchor
    }

    pub fn popup_anchor(&self) -> Option<PixelPoint> {
        self.popup_anchor
    }

    pub fn shadow_url(&self) -> Option<&IconSource> {
        self.shadow_url.as_ref()
    }

    pub fn shadow_size(&self) -> Option<PixelSize> {
        self.shadow_size
    }

    /// Checks the convention that the anchor point lies on the image.
    ///
    /// Leaflet does not enforce this; an out-of-bounds anchor simply
    /// renders the marker offset from its coordinate.
    pub fn anchor_in_bounds(&self) -> bool {
        self.icon_anchor.within(self.icon_size)
    }

    /// Builds the option object passed to the mapping library's
    /// marker-creation call, with absent optionals omitted.
    pub fn options(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
