mod color;
mod wave;

pub use color::{golden_hue, hsv_to_rgb, Color};
pub use wave::{oscillate, wrap};
