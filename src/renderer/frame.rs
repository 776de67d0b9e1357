//! Turn a game state into one triangle list, back to front

use glam::Vec2;

use super::shapes::{circle, gradient_rect, outline, rect, rotated_rect};
use super::vertex::{Vertex, colors};
use crate::sim::skin::{PLATE_DARK, PLATE_GRAIN, PLATE_LIGHT};
use crate::sim::{Block, Fragment, GameState, Skin};

/// Height of the frosting band on top of each layer
pub const FROSTING_HEIGHT: f32 = 3.0;
/// One decorative dot every this many units of layer width
pub const DOT_SPACING: f32 = 20.0;
pub const DOT_RADIUS: f32 = 2.0;
/// Wood grain line spacing on the plate
pub const GRAIN_SPACING: f32 = 10.0;
/// Fragments narrower than this get no dot
pub const FRAGMENT_DOT_MIN_WIDTH: f32 = 15.0;

const DOT_SEGMENTS: u32 = 8;

fn with_alpha(mut color: [f32; 4], alpha: f32) -> [f32; 4] {
    color[3] = alpha;
    color
}

/// Blocks oldest first, then fragments on top
pub fn draw_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(state.blocks.len() * 64 + state.fragments.len() * 32);
    for block in &state.blocks {
        draw_block(block, &mut vertices);
    }
    for fragment in &state.fragments {
        draw_fragment(fragment, &mut vertices);
    }
    vertices
}

pub fn draw_block(block: &Block, out: &mut Vec<Vertex>) {
    let min = Vec2::new(block.x, block.y);
    let size = Vec2::new(block.width, block.height);

    match block.skin {
        Skin::Plate => {
            // Dark edges, light middle
            let half = Vec2::new(size.x, size.y / 2.0);
            out.extend(gradient_rect(min, half, PLATE_DARK, PLATE_LIGHT));
            out.extend(gradient_rect(min + Vec2::new(0.0, half.y), half, PLATE_LIGHT, PLATE_DARK));
            let mut i = 0.0;
            while i < block.width {
                out.extend(rect(
                    Vec2::new(block.x + i, block.y),
                    Vec2::new(0.5, block.height),
                    PLATE_GRAIN,
                ));
                i += GRAIN_SPACING;
            }
        }
        Skin::Cake(flavor) => {
            let c = flavor.colors();
            out.extend(gradient_rect(min, size, c.main, c.gradient));
            out.extend(rect(
                min,
                Vec2::new(block.width, FROSTING_HEIGHT.min(block.height)),
                with_alpha(c.frosting, colors::FROSTING_ALPHA),
            ));

            let dots = (block.width / DOT_SPACING).floor() as u32;
            let cy = block.y + block.height / 2.0;
            for i in 0..dots {
                let cx = block.x + DOT_SPACING / 2.0 + i as f32 * DOT_SPACING;
                out.extend(circle(Vec2::new(cx, cy), DOT_RADIUS, c.dot, DOT_SEGMENTS));
            }

            out.extend(outline(min, size, 0.5, c.gradient));
        }
    }
}

pub fn draw_fragment(fragment: &Fragment, out: &mut Vec<Vertex>) {
    let Skin::Cake(flavor) = fragment.skin else {
        return;
    };
    let c = flavor.colors();
    let size = Vec2::new(fragment.width, fragment.height);
    let center = Vec2::new(fragment.x, fragment.y) + size / 2.0;

    out.extend(rotated_rect(center, size, fragment.rotation, None, c.main, c.gradient));
    let frosting = with_alpha(c.frosting, colors::FROSTING_ALPHA);
    out.extend(rotated_rect(
        center,
        size,
        fragment.rotation,
        Some(FROSTING_HEIGHT),
        frosting,
        frosting,
    ));
    if fragment.width > FRAGMENT_DOT_MIN_WIDTH {
        out.extend(circle(center, DOT_RADIUS, c.dot, DOT_SEGMENTS));
    }
}
