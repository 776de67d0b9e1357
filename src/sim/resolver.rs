//! Overlap resolution when the moving block is dropped
//!
//! Pure geometry: given the moving block and the block beneath it, decide
//! whether the drop lands and, if so, what survives and what falls off.
//! Nothing here touches the stack.

use super::block::Block;

/// A sliver cut off the dropped block, in the dropped block's y-band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offcut {
    pub x: f32,
    pub width: f32,
}

/// Outcome of dropping the moving block
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// No usable overlap: the session ends
    Miss,
    /// The block lands as `x`/`width`; `offcuts` lists left then right slivers
    Trim {
        x: f32,
        width: f32,
        offcuts: Vec<Offcut>,
    },
}

impl Placement {
    pub fn is_miss(&self) -> bool {
        matches!(self, Placement::Miss)
    }
}

/// Resolve `current` landing on `below`.
///
/// The landed span is the intersection of the two spans. An intersection of
/// zero or negative width (disjoint or merely touching edges) is a miss,
/// since nothing could be stacked on it.
pub fn resolve(current: &Block, below: &Block) -> Placement {
    let left = current.x.max(below.x);
    let right = current.right().min(below.right());
    let width = right - left;

    if !(width > 0.0) {
        return Placement::Miss;
    }

    let mut offcuts = Vec::with_capacity(2);
    if current.x < below.x {
        offcuts.push(Offcut {
            x: current.x,
            width: below.x - current.x,
        });
    }
    if current.right() > below.right() {
        offcuts.push(Offcut {
            x: below.right(),
            width: current.right() - below.right(),
        });
    }

    Placement::Trim {
        x: left,
        width,
        offcuts,
    }
}
