//! Falling cake fragments
//!
//! Offcuts become free bodies that tumble under gravity until they drop out
//! of view. They never collide with anything.

use serde::{Deserialize, Serialize};

use super::resolver::Offcut;
use super::rng::RandomSource;
use super::skin::Skin;
use crate::tuning::Tuning;

/// A trimmed-off piece of cake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub skin: Skin,
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// Radians, about the fragment's centre
    pub rotation: f32,
    pub rotation_speed: f32,
    pub gravity: f32,
}

impl Fragment {
    /// Launch an offcut with randomized physics.
    ///
    /// Draw order: vertical velocity, horizontal velocity, spin, gravity.
    pub fn launch(
        offcut: Offcut,
        y: f32,
        height: f32,
        skin: Skin,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> Self {
        let (vy_lo, vy_hi) = tuning.fragment_velocity_y;
        let (vx_lo, vx_hi) = tuning.fragment_velocity_x;
        let (rs_lo, rs_hi) = tuning.fragment_rotation_speed;
        let (g_lo, g_hi) = tuning.fragment_gravity;
        Self {
            x: offcut.x,
            y,
            width: offcut.width,
            height,
            skin,
            velocity_y: rng.range(vy_lo, vy_hi),
            velocity_x: rng.range(vx_lo, vx_hi),
            rotation: 0.0,
            rotation_speed: rng.range(rs_lo, rs_hi),
            gravity: rng.range(g_lo, g_hi),
        }
    }

    /// Integrate one tick
    pub fn step(&mut self) {
        self.velocity_y += self.gravity;
        self.y += self.velocity_y;
        self.x += self.velocity_x;
        self.rotation += self.rotation_speed;
    }

    /// Whether the fragment has fallen past `floor`
    #[inline]
    pub fn is_gone(&self, floor: f32) -> bool {
        self.y >= floor
    }
}

/// All fragments currently in flight, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FragmentSet {
    fragments: Vec<Fragment>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Step every fragment, then drop the ones at or below `floor`.
    /// Returns how many were removed.
    pub fn step(&mut self, floor: f32) -> usize {
        let before = self.fragments.len();
        for fragment in &mut self.fragments {
            fragment.step();
        }
        self.fragments.retain(|f| !f.is_gone(floor));
        before - self.fragments.len()
    }

    /// Scale horizontally and shift vertically (viewport resize)
    pub fn rescale(&mut self, sx: f32, dy: f32) {
        for fragment in &mut self.fragments {
            fragment.x *= sx;
            fragment.width *= sx;
            fragment.y += dy;
        }
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    pub fn as_slice(&self) -> &[Fragment] {
        &self.fragments
    }
}

impl<'a> IntoIterator for &'a FragmentSet {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceSource;
    use crate::sim::skin::Flavor;

    const SKIN: Skin = Skin::Cake(Flavor::Chocolate);

    fn offcut() -> Offcut {
        Offcut { x: 40.0, width: 20.0 }
    }

    #[test]
    fn test_launch_maps_draws_to_ranges() {
        let tuning = Tuning::default();
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.25, 0.5]);
        let f = Fragment::launch(offcut(), 100.0, 30.0, SKIN, &tuning, &mut rng);

        assert_eq!(f.x, 40.0);
        assert_eq!(f.width, 20.0);
        assert_eq!(f.y, 100.0);
        assert_eq!(f.skin, SKIN);
        assert_eq!(f.velocity_y, 1.0);
        assert_eq!(f.velocity_x, 0.0);
        assert!((f.rotation_speed - -0.05).abs() < 1e-6);
        assert!((f.gravity - 0.25).abs() < 1e-6);
        assert_eq!(f.rotation, 0.0);
    }

    #[test]
    fn test_launch_stays_within_ranges() {
        let tuning = Tuning::default();
        let mut rng = crate::sim::rng::seeded(3);
        for _ in 0..200 {
            let f = Fragment::launch(offcut(), 0.0, 30.0, SKIN, &tuning, &mut rng);
            assert!((1.0..3.0).contains(&f.velocity_y));
            assert!((-1.5..1.5).contains(&f.velocity_x));
            assert!((-0.1..0.1).contains(&f.rotation_speed));
            assert!((0.2..0.3).contains(&f.gravity));
        }
    }

    #[test]
    fn test_step_applies_gravity_before_moving() {
        let tuning = Tuning::default();
        let mut rng = SequenceSource::new(vec![0.5, 1.0 / 3.0, 0.5, 0.0]);
        let mut f = Fragment::launch(offcut(), 0.0, 30.0, SKIN, &tuning, &mut rng);
        let vx = f.velocity_x;
        f.step();
        assert!((f.velocity_y - 2.2).abs() < 1e-5);
        assert!((f.y - 2.2).abs() < 1e-5);
        assert!((f.x - (40.0 + vx)).abs() < 1e-5);
    }

    #[test]
    fn test_set_prunes_at_floor() {
        let tuning = Tuning::default();
        let mut rng = SequenceSource::constant(0.0);
        let mut set = FragmentSet::new();
        set.push(Fragment::launch(offcut(), 690.0, 30.0, SKIN, &tuning, &mut rng));
        set.push(Fragment::launch(offcut(), 0.0, 30.0, SKIN, &tuning, &mut rng));

        // First fragment: vy 1.2 -> y 691.2, past a floor at 691
        let removed = set.step(691.0);
        assert_eq!(removed, 1);
        assert_eq!(set.len(), 1);
        assert!(set.iter().all(|f| f.y < 10.0));
    }

    #[test]
    fn test_every_fragment_terminates() {
        let tuning = Tuning::default();
        let mut rng = crate::sim::rng::seeded(11);
        let mut set = FragmentSet::new();
        for i in 0..20 {
            set.push(Fragment::launch(offcut(), i as f32 * 30.0, 30.0, SKIN, &tuning, &mut rng));
        }
        let mut ticks = 0;
        while !set.is_empty() {
            set.step(700.0);
            ticks += 1;
            assert!(ticks < 200, "fragments never left the view");
        }
    }
}
