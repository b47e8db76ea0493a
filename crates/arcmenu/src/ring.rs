use crate::geometry::{Point, Size};
use std::f64::consts::PI;
use strum::Display as StrumDisplay;

/// Direction an arc is swept in. With the y axis pointing down, `Positive`
/// (increasing angle) runs clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Sweep {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        sweep: Sweep,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RingPath {
    pub elements: Vec<PathElement>,
}

impl RingPath {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// The half annulus the menu is drawn on. It is centered on the bottom edge of
/// the view and opens upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ring {
    size: Size,
    thickness: f64,
}

impl Ring {
    pub fn new(size: Size, thickness: f64) -> Self {
        let max = (size.width / 2.0).max(0.0);
        let clamped = if thickness.is_finite() {
            thickness.clamp(0.0, max)
        } else {
            max
        };
        if clamped != thickness {
            log::debug!(
                "ring thickness {} clamped to {} for width {}",
                thickness,
                clamped,
                size.width
            );
        }
        Self {
            size,
            thickness: clamped,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height)
    }

    pub fn outer_radius(&self) -> f64 {
        self.size.width / 2.0
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() - self.thickness
    }

    /// Radius of the circle running through the middle of the band.
    pub fn item_radius(&self) -> f64 {
        self.outer_radius() - self.thickness / 2.0
    }

    pub fn path(&self) -> RingPath {
        let (w, h) = (self.size.width, self.size.height);
        let center = self.center();
        RingPath {
            elements: vec![
                PathElement::MoveTo(Point::new(0.0, h)),
                PathElement::Arc {
                    center,
                    radius: self.outer_radius(),
                    start: PI,
                    end: 2.0 * PI,
                    sweep: Sweep::Positive,
                },
                PathElement::LineTo(Point::new(w - self.thickness, h)),
                PathElement::Arc {
                    center,
                    radius: self.inner_radius(),
                    start: 2.0 * PI,
                    end: PI,
                    sweep: Sweep::Negative,
                },
                PathElement::LineTo(Point::new(0.0, h)),
                PathElement::Close,
            ],
        }
    }

    /// Whether `p` lies on the band. Only the upper half exists.
    pub fn contains(&self, p: Point) -> bool {
        let center = self.center();
        if p.y > center.y {
            return false;
        }
        let dist = p.distance(center);
        dist >= self.inner_radius() && dist <= self.outer_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::approx_eq;

    #[test]
    fn test_path_traces_outer_then_inner_arc() {
        let ring = Ring::new(Size::new(300.0, 150.0), 80.0);
        let path = ring.path();
        assert_eq!(path.elements.len(), 6);
        assert_eq!(path.elements[0], PathElement::MoveTo(Point::new(0.0, 150.0)));
        match path.elements[1] {
            PathElement::Arc {
                center,
                radius,
                start,
                end,
                sweep,
            } => {
                assert_eq!(center, Point::new(150.0, 150.0));
                assert!(approx_eq(radius, 150.0));
                assert!(approx_eq(start, PI));
                assert!(approx_eq(end, 2.0 * PI));
                assert_eq!(sweep, Sweep::Positive);
            }
            other => panic!("expected outer arc, got {other:?}"),
        }
        assert_eq!(
            path.elements[2],
            PathElement::LineTo(Point::new(220.0, 150.0))
        );
        match path.elements[3] {
            PathElement::Arc { radius, sweep, .. } => {
                assert!(approx_eq(radius, 70.0));
                assert_eq!(sweep, Sweep::Negative);
            }
            other => panic!("expected inner arc, got {other:?}"),
        }
        assert_eq!(path.elements[5], PathElement::Close);
    }

    #[test]
    fn test_thickness_is_clamped_to_half_width() {
        let ring = Ring::new(Size::new(100.0, 50.0), 80.0);
        assert!(approx_eq(ring.thickness(), 50.0));
        assert!(approx_eq(ring.inner_radius(), 0.0));

        let ring = Ring::new(Size::new(100.0, 50.0), -5.0);
        assert!(approx_eq(ring.thickness(), 0.0));

        let ring = Ring::new(Size::new(100.0, 50.0), f64::NAN);
        assert!(approx_eq(ring.thickness(), 50.0));
    }

    #[test]
    fn test_item_radius_is_mid_band() {
        let ring = Ring::new(Size::new(300.0, 150.0), 80.0);
        assert!(approx_eq(ring.item_radius(), 110.0));
    }

    #[test]
    fn test_contains_only_upper_band() {
        let ring = Ring::new(Size::new(300.0, 150.0), 80.0);
        assert!(ring.contains(Point::new(150.0, 40.0)));
        assert!(!ring.contains(Point::new(150.0, 100.0)));
        assert!(!ring.contains(Point::new(150.0, 200.0)));
        assert!(ring.contains(Point::new(10.0, 149.0)));
    }
}
