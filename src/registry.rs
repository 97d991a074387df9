//! Ready-to-use marker icons built once per process.
//!
//! Each icon is a lazily constructed process-wide constant; nothing is
//! ever written after construction, so sharing across threads is safe.
//! The embedded SVG payloads are kept byte-for-byte stable (leading and
//! trailing whitespace included) so the encoded data URIs stay
//! compatible with previously rendered markers.

use once_cell::sync::Lazy;

use crate::{
    core::pixel::{PixelPoint, PixelSize},
    icon::descriptor::Icon,
};

/// Sports car silhouette: red body, grey windshield, two wheels with
/// hubs, and a red mirror stroke on each side.
const SUPER_SPORTS_CAR_SVG: &str = r##"
    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 32" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
      <path d="M2 22h60l-12-14H18l-16 14z" fill="#e10600"/>
      <path d="M20 8h22l4 10H20z" fill="#e0e0e0"/>
      <circle cx="18" cy="26" r="6" fill="black"/>
      <circle cx="46" cy="26" r="6" fill="black"/>
      <circle cx="18" cy="26" r="3" fill="gray"/>
      <circle cx="46" cy="26" r="3" fill="gray"/>
      <path d="M10 10l-6 4" stroke="#ff0000" stroke-width="1.5"/>
      <path d="M54 10l6 4" stroke="#ff0000" stroke-width="1.5"/>
    </svg>
  "##;

/// Five-point gold star.
const STAR_SVG: &str = r##"
    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="#FFD700">
      <path d="M12 2l3 7 7 .5-5 5 1.5 7L12 18l-6.5 3.5L7 14 2 9.5 9 9z"/>
    </svg>
  "##;

/// Green variant of the standard Leaflet pin, served from the
/// leaflet-color-markers asset collection.
const FAVORITE_ICON_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-green.png";

/// Stock Leaflet marker shadow, shared by all pin color variants.
const FAVORITE_SHADOW_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png";

/// Vector icon for distinguished markers.
pub static SUPER_SPORTS_CAR: Lazy<Icon> = Lazy::new(|| {
    Icon::svg(
        SUPER_SPORTS_CAR_SVG,
        PixelSize::new(40, 20),
        PixelPoint::new(20, 10),
    )
    .with_popup_anchor(PixelPoint::new(0, -10))
});

/// Vector icon for highlighted/featured markers.
pub static STAR: Lazy<Icon> =
    Lazy::new(|| Icon::svg(STAR_SVG, PixelSize::new(30, 30), PixelPoint::new(15, 15)));

/// Bitmap pin icon for markers representing user-saved items.
pub static FAVORITE: Lazy<Icon> = Lazy::new(|| {
    Icon::image(
        FAVORITE_ICON_URL,
        PixelSize::new(25, 41),
        PixelPoint::new(12, 41),
    )
    .with_popup_anchor(PixelPoint::new(1, -34))
    .with_shadow(FAVORITE_SHADOW_URL, PixelSize::new(41, 41))
});
