//! Game state and core simulation types
//!
//! Everything a frame needs to draw or a save needs to restore lives here.

use serde::{Deserialize, Serialize};

use super::block::{Block, Direction};
use super::fragment::FragmentSet;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap
    #[default]
    Idle,
    /// Moving block oscillates, taps drop it
    Playing,
    /// A drop missed; only a reset gets out of here
    Over,
}

/// Size of the drawable area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(400.0, 600.0)
    }
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First tap: the first moving block has spawned
    Started,
    /// A drop landed
    Placed { score: u32, offcuts: usize },
    /// Difficulty went up
    SpeedUp { speed: f32 },
    /// The tower shifted down one layer to stay in view
    Scrolled,
    /// A drop missed and the session is over
    Missed { score: u32 },
    Reset,
}

/// Undrained events beyond this drop the oldest
pub const MAX_EVENTS: usize = 64;

/// Complete session state (deterministic given the random source, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub tuning: Tuning,
    /// Base first, newest last; only the last block may be mobile
    pub blocks: Vec<Block>,
    pub fragments: FragmentSet,
    pub score: u32,
    /// Horizontal speed of the moving block (units/tick)
    pub speed: f32,
    /// Height of the placed layers above the base plate's top
    pub stack_height: f32,
    /// Shared by every moving block of the session
    pub direction: Direction,
    pub phase: GamePhase,
    /// Ticks spent in `Playing`
    pub time_ticks: u64,
    /// Undrained events, newest last, capped at `MAX_EVENTS` (not persisted)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session: a single plate centered at the bottom of the view
    pub fn new(viewport: Viewport, tuning: Tuning) -> Self {
        let mut state = Self {
            viewport,
            tuning,
            blocks: Vec::new(),
            fragments: FragmentSet::new(),
            score: 0,
            speed: 0.0,
            stack_height: 0.0,
            direction: Direction::Right,
            phase: GamePhase::Idle,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.init_session();
        state
    }

    fn init_session(&mut self) {
        let base_width = self.viewport.width * self.tuning.base_width_ratio;
        self.blocks.clear();
        self.blocks.push(Block::base(
            self.viewport.width,
            self.viewport.height,
            base_width,
            self.tuning.block_height,
        ));
        self.fragments.clear();
        self.score = 0;
        self.speed = self.tuning.start_speed;
        self.stack_height = 0.0;
        self.direction = Direction::Right;
        self.phase = GamePhase::Idle;
        self.time_ticks = 0;
    }

    /// Back to the initial state, from any phase
    pub fn reset(&mut self) {
        self.init_session();
        self.push_event(GameEvent::Reset);
        log::info!(
            "Session reset ({}x{} viewport)",
            self.viewport.width,
            self.viewport.height
        );
    }

    /// The block currently oscillating, if any
    pub fn moving_block(&self) -> Option<&Block> {
        self.blocks.last().filter(|b| !b.immobile)
    }

    /// The block the moving one would land on
    pub fn landing_block(&self) -> Option<&Block> {
        self.moving_block()?;
        self.blocks.iter().rev().nth(1)
    }

    /// Fragments at or below this y are gone
    pub fn fragment_floor(&self) -> f32 {
        self.viewport.height + self.tuning.offscreen_margin
    }

    /// Stack height past which placements scroll the tower down
    pub fn scroll_threshold(&self) -> f32 {
        self.viewport.height * self.tuning.scroll_ratio
    }

    /// Queue an event for the host; a host that never drains only keeps the
    /// most recent `MAX_EVENTS`
    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Adapt to a new viewport without losing progress.
    ///
    /// Horizontal geometry scales with the width. Vertically the tower is laid
    /// out again from the bottom edge: the top placed layer sits
    /// `stack_height` above the plate position, then the tower scrolls down
    /// until it fits under the scroll threshold of the new height. Layer
    /// heights are untouched. Returns false (and leaves the state alone) for a
    /// degenerate viewport.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !viewport.is_valid() {
            log::warn!(
                "Ignoring resize to {}x{}",
                viewport.width,
                viewport.height
            );
            return false;
        }

        let old = self.viewport;
        self.viewport = viewport;

        if self.blocks.is_empty() {
            self.reset();
            return true;
        }

        let block_height = self.tuning.block_height;
        let sx = viewport.width / old.width;

        // Anchor on the highest placed layer; the rest keep their spacing
        let landed = self.blocks.iter().rposition(|b| b.immobile).unwrap_or(0);
        let mut dy = viewport.height - block_height - self.stack_height - self.blocks[landed].y;
        while self.stack_height > self.scroll_threshold() {
            self.stack_height -= block_height;
            dy += block_height;
        }

        for block in &mut self.blocks {
            block.x *= sx;
            block.width *= sx;
            block.y += dy;
        }
        self.fragments.rescale(sx, dy);

        log::debug!(
            "Resized {}x{} -> {}x{} (score {})",
            old.width,
            old.height,
            viewport.width,
            viewport.height,
            self.score
        );
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Viewport::default(), Tuning::default())
    }
}
