//! Platform abstraction layer
//!
//! The simulation never talks to a browser or window directly. A host wires
//! it to:
//! - a frame scheduler (requestAnimationFrame, a native loop, a test driver)
//! - a renderer that receives each frame's geometry
//! - a score display

pub mod app;
pub mod headless;

pub use app::App;
pub use headless::{HeadlessScheduler, LogScoreSink, NullRenderer, VertexRenderer};

use crate::sim::GameState;

/// Recurring per-frame callback registration
pub trait FrameScheduler {
    /// (Re-)register the frame loop
    fn start(&mut self);
    /// Deregister the frame loop
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Draws the current blocks and fragments
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Shows the score after every landed layer
pub trait ScoreSink {
    fn score_changed(&mut self, score: u32);
}
