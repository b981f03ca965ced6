//! Presentation for the simulation
//!
//! Physics never sees colors or outlines. The shell keeps an `Appearance` per
//! `BodyId` in a `Palette` and builds CPU-side vertex lists each frame.

pub mod appearance;
pub mod shapes;
pub mod vertex;

pub use appearance::{Appearance, Palette};
pub use shapes::build_frame;
pub use vertex::Vertex;
