use serde::{Deserialize, Serialize};

/// Rendered footprint of an icon image, in CSS pixels.
///
/// Serializes as a two-element array (`[width, height]`), which is the
/// form Leaflet's `L.icon` options expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSize(pub u32, pub u32);

impl PixelSize {
    /// Creates a new size from width and height
    pub fn new(width: u32, height: u32) -> Self {
        Self(width, height)
    }

    /// Gets the width in pixels
    pub fn width(&self) -> u32 {
        self.0
    }

    /// Gets the height in pixels
    pub fn height(&self) -> u32 {
        self.1
    }
}

/// A pixel offset within (or relative to) an icon image.
///
/// Anchors point into the image and are non-negative by convention;
/// popup anchors are offsets from the icon anchor and may be negative.
/// Serializes as a two-element array (`[x, y]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint(pub i32, pub i32);

impl PixelPoint {
    /// Creates a new point from x and y offsets
    pub fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }

    /// Gets the x offset in pixels
    pub fn x(&self) -> i32 {
        self.0
    }

    /// Gets the y offset in pixels
    pub fn y(&self) -> i32 {
        self.1
    }

    /// Checks whether the point lies within a rectangle of the given size
    pub fn within(&self, size: PixelSize) -> bool {
        self.0 >= 0
            && self.1 >= 0
            && self.0 <= size.width() as i32
            && self.1 <= size.height() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_accessors() {
        let size = PixelSize::new(40, 20);
        assert_eq!(size.width(), 40);
        assert_eq!(size.height(), 20);
    }

    #[test]
    fn test_point_within_bounds() {
        let size = PixelSize::new(30, 30);
        assert!(PixelPoint::new(15, 15).within(size));
        assert!(PixelPoint::new(0, 30).within(size));
        assert!(!PixelPoint::new(-1, 10).within(size));
        assert!(!PixelPoint::new(31, 10).within(size));
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(PixelSize::new(25, 41)).unwrap();
        assert_eq!(json, serde_json::json!([25, 41]));
        let json = serde_json::to_value(PixelPoint::new(1, -34)).unwrap();
        assert_eq!(json, serde_json::json!([1, -34]));
    }
}
