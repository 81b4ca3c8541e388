use serde::Serialize;

use crate::render::{Point, RectPrimitive};

/// Axis-aligned hit-test box in pixel space.
///
/// Bounds are stored as produced by layout. `top` can exceed `bottom` for bars
/// whose value lies under the axis minimum; containment checks normalize that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Region {
    #[must_use]
    pub fn from_rect(rect: &RectPrimitive) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }

    /// Square of half side `radius` centred on `center`.
    #[must_use]
    pub fn around(center: Point, radius: f64) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (min_x, max_x) = (self.left.min(self.right), self.left.max(self.right));
        let (min_y, max_y) = (self.top.min(self.bottom), self.top.max(self.bottom));
        (min_x..=max_x).contains(&x) && (min_y..=max_y).contains(&y)
    }
}

/// Location of a hit in a [`RegionGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionHit {
    pub set_index: usize,
    pub entry_index: usize,
}

/// Hit-test regions indexed as `[set][entry]`, parallel to the draw primitives.
///
/// Hidden sets keep their slot with an empty region list.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RegionGrid {
    sets: Vec<Vec<Region>>,
}

impl RegionGrid {
    #[must_use]
    pub fn new(sets: Vec<Vec<Region>>) -> Self {
        Self { sets }
    }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn set(&self, set_index: usize) -> Option<&[Region]> {
        self.sets.get(set_index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, set_index: usize, entry_index: usize) -> Option<&Region> {
        self.sets.get(set_index)?.get(entry_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Region]> {
        self.sets.iter().map(Vec::as_slice)
    }

    /// First region containing `(x, y)`, scanning sets in order.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<RegionHit> {
        self.sets.iter().enumerate().find_map(|(set_index, regions)| {
            regions
                .iter()
                .position(|region| region.contains(x, y))
                .map(|entry_index| RegionHit {
                    set_index,
                    entry_index,
                })
        })
    }
}
