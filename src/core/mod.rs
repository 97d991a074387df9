pub mod pixel;

pub use pixel::{PixelPoint, PixelSize};
