//! Per-frame simulation tick
//!
//! One call per rendered frame. Commands in the [`TickInput`] are applied
//! first, as a whole, then the moving block and the fragments advance.

use super::block::Block;
use super::fragment::Fragment;
use super::resolver::{Placement, resolve};
use super::rng::RandomSource;
use super::skin::pick_random_skin;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the moving block (tap/click/space), or start from `Idle`
    pub place: bool,
    /// Start over from any phase
    pub reset: bool,
    /// Demo mode - drop automatically when lined up
    pub autoplay: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) {
    if input.reset {
        state.reset();
    }

    if input.place || (input.autoplay && autoplay_wants_drop(state)) {
        place(state, rng);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let viewport_width = state.viewport.width;
    let (speed, direction) = (state.speed, state.direction);
    if let Some(block) = state.blocks.last_mut() {
        state.direction = block.advance(speed, direction, viewport_width);
    }

    let floor = state.fragment_floor();
    state.fragments.step(floor);
}

/// Handle a placement command.
///
/// From `Idle` this only starts the game. While playing it drops the moving
/// block; in `Over` it does nothing.
pub fn place(state: &mut GameState, rng: &mut impl RandomSource) {
    match state.phase {
        GamePhase::Idle => start(state, rng),
        GamePhase::Playing => drop_block(state, rng),
        GamePhase::Over => log::debug!("Placement ignored: game over"),
    }
}

fn start(state: &mut GameState, rng: &mut impl RandomSource) {
    state.phase = GamePhase::Playing;
    spawn_moving_block(state, rng);
    state.push_event(GameEvent::Started);
    log::info!("Game started");
}

fn drop_block(state: &mut GameState, rng: &mut impl RandomSource) {
    let n = state.blocks.len();
    if n < 2 || state.blocks[n - 1].immobile {
        return;
    }

    match resolve(&state.blocks[n - 1], &state.blocks[n - 2]) {
        Placement::Miss => {
            state.phase = GamePhase::Over;
            state.push_event(GameEvent::Missed { score: state.score });
            log::info!("Missed! Game over with score {}", state.score);
        }
        Placement::Trim { x, width, offcuts } => {
            let landed = &mut state.blocks[n - 1];
            landed.x = x;
            landed.width = width;
            landed.immobile = true;
            let (y, height, skin) = (landed.y, landed.height, landed.skin);

            for offcut in &offcuts {
                let fragment = Fragment::launch(*offcut, y, height, skin, &state.tuning, rng);
                state.fragments.push(fragment);
            }

            state.score += 1;
            let speed = state.tuning.speed_after(state.score, state.speed);
            if speed != state.speed {
                state.speed = speed;
                state.push_event(GameEvent::SpeedUp { speed });
                log::debug!("Speed up to {speed}");
            }

            let block_height = state.tuning.block_height;
            state.stack_height += block_height;
            if state.stack_height > state.scroll_threshold() {
                for block in &mut state.blocks {
                    block.y += block_height;
                }
                state.stack_height -= block_height;
                state.push_event(GameEvent::Scrolled);
            }

            log::debug!(
                "Placed layer {} at x={x:.1} width={width:.1} ({} offcuts)",
                state.score,
                offcuts.len()
            );
            state.push_event(GameEvent::Placed {
                score: state.score,
                offcuts: offcuts.len(),
            });

            spawn_moving_block(state, rng);
        }
    }
}

/// Append a new moving block one layer above the current top
fn spawn_moving_block(state: &mut GameState, rng: &mut impl RandomSource) {
    let Some(top) = state.blocks.last() else {
        return;
    };
    let height = state.tuning.block_height;
    let block = Block::spawn_moving(
        top.y - height,
        top.width,
        height,
        pick_random_skin(rng),
        state.direction,
        state.viewport.width,
    );
    state.blocks.push(block);
}

/// Demo player: start immediately, then drop once lined up with the layer below
pub fn autoplay_wants_drop(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Idle => true,
        GamePhase::Playing => match (state.moving_block(), state.landing_block()) {
            (Some(moving), Some(below)) => {
                (moving.x - below.x).abs() <= state.tuning.autoplay_tolerance
            }
            _ => false,
        },
        GamePhase::Over => false,
    }
}
