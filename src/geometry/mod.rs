pub mod spiral;

pub use spiral::{PointCount, SpiralPoints};
