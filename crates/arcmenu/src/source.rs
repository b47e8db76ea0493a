//! Capabilities the host hands to the engine.

use crate::geometry::Size;

/// Supplies items to a [`CircularMenu`](crate::CircularMenu).
///
/// Only the first three methods are required. The angle overrides fall back
/// to the engine defaults when they return `None`. All angles are in degrees.
pub trait MenuDataSource {
    /// Host-owned handle for one item. The engine keeps a clone per placed item.
    type Item: Clone;

    fn item_count(&self) -> usize;

    fn item(&self, index: usize) -> Option<Self::Item>;

    fn item_size(&self, index: usize) -> Option<Size>;

    /// Multiplier applied to horizontal drag distance.
    fn speed_ratio(&self) -> Option<f64> {
        None
    }

    fn start_angle_offset(&self) -> Option<f64> {
        None
    }

    fn spacing_angle(&self) -> Option<f64> {
        None
    }

    fn min_angle(&self) -> Option<f64> {
        None
    }

    fn max_angle(&self) -> Option<f64> {
        None
    }
}

pub trait MenuDelegate {
    /// Called once per completed tap with the host's index for the item.
    fn on_item_selected(&self, index: usize);
}
