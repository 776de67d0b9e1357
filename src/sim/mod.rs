//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Randomness only through an injected `RandomSource`
//! - No rendering or platform dependencies

pub mod block;
pub mod fragment;
pub mod resolver;
pub mod rng;
pub mod skin;
pub mod state;
pub mod tick;

pub use block::{Block, Direction};
pub use fragment::{Fragment, FragmentSet};
pub use resolver::{Offcut, Placement, resolve};
pub use rng::{RandomSource, SequenceSource, seeded};
pub use skin::{Flavor, FlavorColors, Skin, pick_random_skin};
pub use state::{GameEvent, GamePhase, GameState, Viewport};
pub use tick::{TickInput, autoplay_wants_drop, place, tick};
