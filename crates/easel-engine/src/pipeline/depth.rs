use core::cmp::Ordering;

use crate::core::Attributes;

/// Isometric sort key.
///
/// Ordering rules:
/// 1) `depth` (`y + origin.y`): ascending, so entities further down are drawn later
/// 2) `z_index`: ascending
///
/// Equal keys compare `Equal`; the stable sort keeps registry order for them.
#[derive(Debug, Copy, Clone)]
pub struct DepthKey {
    pub depth: f32,
    pub z_index: f32,
}

impl DepthKey {
    #[inline]
    pub fn new(depth: f32, z_index: f32) -> Self {
        Self { depth, z_index }
    }

    #[inline]
    pub fn of(attributes: &Attributes) -> Self {
        Self::new(attributes.depth(), attributes.z_index)
    }
}

/// Total order on floats with `-0.0 == 0.0`; NaN sorts after everything.
#[inline]
fn cmp_f32(a: f32, b: f32) -> Ordering {
    // Adding zero folds -0.0 into +0.0 before total_cmp sees it.
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl Ord for DepthKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match cmp_f32(self.depth, other.depth) {
            Ordering::Equal => cmp_f32(self.z_index, other.z_index),
            o => o,
        }
    }
}

impl PartialOrd for DepthKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DepthKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DepthKey {}
