//! Rendering module
//!
//! Tessellates blocks and fragments into a coloured triangle list; any GPU or
//! canvas backend can upload it as-is.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::draw_frame;
pub use vertex::Vertex;
