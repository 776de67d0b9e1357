//! Collaborators for running without a window (demo binary, tests)

use super::{FrameScheduler, Renderer, ScoreSink};
use crate::renderer::{Vertex, draw_frame};
use crate::sim::GameState;

/// Scheduler driven by hand: the caller keeps calling `App::frame` while
/// `is_running` holds
#[derive(Debug, Clone, Default)]
pub struct HeadlessScheduler {
    running: bool,
    /// How many times the loop was (re-)registered
    pub starts: u32,
    pub stops: u32,
}

impl FrameScheduler for HeadlessScheduler {
    fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.starts += 1;
        }
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

/// Draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}

/// Keeps the last tessellated frame
#[derive(Debug, Clone, Default)]
pub struct VertexRenderer {
    pub vertices: Vec<Vertex>,
    pub frames: u64,
}

impl Renderer for VertexRenderer {
    fn draw(&mut self, state: &GameState) {
        self.vertices = draw_frame(state);
        self.frames += 1;
    }
}

/// Logs score changes and remembers the latest one
#[derive(Debug, Clone, Default)]
pub struct LogScoreSink {
    pub last: Option<u32>,
}

impl ScoreSink for LogScoreSink {
    fn score_changed(&mut self, score: u32) {
        log::info!("Score: {score}");
        self.last = Some(score);
    }
}
