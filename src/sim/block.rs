//! Cake layers and the moving block
//!
//! Coordinates are screen space: x grows right, y grows down, and a block's
//! `(x, y)` is its top-left corner.

use serde::{Deserialize, Serialize};

use super::skin::Skin;

/// Horizontal travel direction of the moving block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    /// +1 for right, -1 for left
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        }
    }
}

/// A single layer of the tower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Placed (or base) blocks never move again
    pub immobile: bool,
    pub skin: Skin,
}

impl Block {
    /// The wooden plate, centered horizontally and resting on the viewport bottom
    pub fn base(viewport_width: f32, viewport_height: f32, width: f32, height: f32) -> Self {
        Self {
            x: viewport_width / 2.0 - width / 2.0,
            y: viewport_height - height,
            width,
            height,
            immobile: true,
            skin: Skin::Plate,
        }
    }

    /// A new moving layer, spawned just off-screen on the side it approaches from
    pub fn spawn_moving(
        y: f32,
        width: f32,
        height: f32,
        skin: Skin,
        direction: Direction,
        viewport_width: f32,
    ) -> Self {
        let x = match direction {
            Direction::Right => -width,
            Direction::Left => viewport_width,
        };
        Self {
            x,
            y,
            width,
            height,
            immobile: false,
            skin,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Advance one tick and return the direction the next tick should use.
    ///
    /// The direction is owned by the session; crossing the right edge turns
    /// it left and crossing the left edge turns it right.
    pub fn advance(&mut self, speed: f32, direction: Direction, viewport_width: f32) -> Direction {
        if self.immobile {
            return direction;
        }
        self.x += speed * direction.sign();

        if self.right() > viewport_width {
            Direction::Left
        } else if self.x < 0.0 {
            Direction::Right
        } else {
            direction
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::skin::Flavor;

    fn moving(x: f32, width: f32) -> Block {
        Block {
            x,
            y: 0.0,
            width,
            height: 30.0,
            immobile: false,
            skin: Skin::Cake(Flavor::Lemon),
        }
    }

    #[test]
    fn test_base_is_centered() {
        let base = Block::base(400.0, 600.0, 160.0, 30.0);
        assert_eq!(base.x, 120.0);
        assert_eq!(base.y, 570.0);
        assert!(base.immobile);
        assert_eq!(base.skin, Skin::Plate);
    }

    #[test]
    fn test_spawn_side_follows_direction() {
        let skin = Skin::Cake(Flavor::Matcha);
        let b = Block::spawn_moving(100.0, 80.0, 30.0, skin, Direction::Right, 400.0);
        assert_eq!(b.x, -80.0);
        let b = Block::spawn_moving(100.0, 80.0, 30.0, skin, Direction::Left, 400.0);
        assert_eq!(b.x, 400.0);
        assert!(!b.immobile);
    }

    #[test]
    fn test_advance_moves_by_speed() {
        let mut b = moving(50.0, 100.0);
        let dir = b.advance(2.5, Direction::Right, 400.0);
        assert_eq!(b.x, 52.5);
        assert_eq!(dir, Direction::Right);

        let dir = b.advance(2.5, Direction::Left, 400.0);
        assert_eq!(b.x, 50.0);
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn test_bounces_off_right_edge() {
        let mut b = moving(298.0, 100.0);
        let dir = b.advance(3.0, Direction::Right, 400.0);
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn test_bounces_off_left_edge() {
        let mut b = moving(1.0, 100.0);
        let dir = b.advance(3.0, Direction::Left, 400.0);
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn test_entering_from_offscreen_keeps_direction() {
        // Spawned at -width while heading right: still heading right
        let mut b = moving(-100.0, 100.0);
        assert_eq!(b.advance(2.0, Direction::Right, 400.0), Direction::Right);

        // Spawned at the right edge while heading left: still heading left
        let mut b = moving(400.0, 100.0);
        assert_eq!(b.advance(2.0, Direction::Left, 400.0), Direction::Left);
    }

    #[test]
    fn test_immobile_does_not_move() {
        let mut b = moving(10.0, 100.0);
        b.immobile = true;
        assert_eq!(b.advance(5.0, Direction::Left, 400.0), Direction::Left);
        assert_eq!(b.x, 10.0);
    }

    #[test]
    fn test_oscillation_stays_bounded() {
        let mut b = moving(-100.0, 100.0);
        let mut dir = Direction::Right;
        let mut flips = 0;
        for _ in 0..2000 {
            let next = b.advance(3.0, dir, 400.0);
            if next != dir {
                flips += 1;
            }
            dir = next;
            assert!(b.x > -101.0 && b.right() < 404.0);
        }
        assert!(flips > 4);
    }
}
