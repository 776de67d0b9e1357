//! Cake Tower - a stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (block motion, overlap trimming, falling fragments)
//! - `renderer`: Tessellation of a frame into coloured triangles
//! - `platform`: Scheduler/renderer/score collaborators and the `App` host
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::App;
pub use sim::{GamePhase, GameState, TickInput, Viewport, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Height of every cake layer (and of the base plate)
    pub const BLOCK_HEIGHT: f32 = 30.0;
    /// Base plate width as a fraction of the viewport width
    pub const BASE_WIDTH_RATIO: f32 = 0.4;

    /// Horizontal speed of the moving block at session start (units/tick)
    pub const START_SPEED: f32 = 2.0;
    /// Speed added at every difficulty step
    pub const SPEED_STEP: f32 = 0.5;
    /// Difficulty increases every N points
    pub const SPEED_UP_EVERY: u32 = 5;
    /// Speed never exceeds this
    pub const MAX_SPEED: f32 = 5.0;

    /// Stack height (fraction of viewport height) past which the view scrolls
    pub const SCROLL_RATIO: f32 = 0.6;

    /// Fragment initial vertical velocity range [min, max)
    pub const FRAGMENT_VELOCITY_Y: (f32, f32) = (1.0, 3.0);
    /// Fragment initial horizontal velocity range [min, max)
    pub const FRAGMENT_VELOCITY_X: (f32, f32) = (-1.5, 1.5);
    /// Fragment rotation speed range [min, max) in radians/tick
    pub const FRAGMENT_ROTATION_SPEED: (f32, f32) = (-0.1, 0.1);
    /// Fragment gravity range [min, max)
    pub const FRAGMENT_GRAVITY: (f32, f32) = (0.2, 0.3);
    /// Fragments are dropped once this far below the viewport bottom
    pub const FRAGMENT_OFFSCREEN_MARGIN: f32 = 100.0;

    /// Autoplay places when the moving block is this close to the one below
    pub const AUTOPLAY_TOLERANCE: f32 = 4.0;
}
