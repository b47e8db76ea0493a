use crate::geometry::{Point, Rect, Size};
use crate::ring::Ring;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<H> {
    pub handle: H,
    /// Index the data source used for this item; reported on selection.
    pub index: usize,
    /// Position among the placed items, which drives the placement angle.
    pub slot: usize,
    pub size: Size,
    /// Center relative to the container origin, before container rotation.
    pub center: Point,
    /// Local rotation in radians. Always the negation of the container's.
    pub rotation: f64,
    pub hidden: bool,
    pub interactive: bool,
}

impl<H> MenuItem<H> {
    pub fn frame(&self) -> Rect {
        Rect::from_center(self.center, self.size)
    }
}

/// The layer items are placed on. It is rotated as a whole by drags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemsContainer {
    /// Ring center in view coordinates; container-local (0, 0) maps here.
    pub origin: Point,
    pub size: Size,
    pub corner_radius: f64,
    pub rotation: f64,
}

impl ItemsContainer {
    pub fn for_ring(ring: &Ring) -> Self {
        let size = ring.size();
        Self {
            origin: ring.center(),
            size: Size::new(size.width, size.height * 2.0),
            corner_radius: size.width / 2.0,
            rotation: 0.0,
        }
    }

    pub fn to_view(&self, local: Point) -> Point {
        let p = local.rotated(self.rotation);
        self.origin.offset(p.x, p.y)
    }

    pub fn to_local(&self, view: Point) -> Point {
        Point::new(view.x - self.origin.x, view.y - self.origin.y).rotated(-self.rotation)
    }

    /// Container bounds in view coordinates, ignoring rotation.
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.origin, self.size)
    }
}
