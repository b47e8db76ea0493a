use crate::geometry::Point;
use crate::source::MenuDataSource;
use std::f64::consts::PI;

pub const DEFAULT_SPACING_ANGLE: f64 = 25.0;
pub const DEFAULT_START_ANGLE_OFFSET: f64 = 25.0;
pub const DEFAULT_SPEED_RATIO: f64 = 1.0;

/// Angular layout knobs, all in degrees. Resolved from the data source on
/// every use so hosts can change them between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSettings {
    pub spacing: f64,
    pub start_offset: f64,
    pub speed_ratio: f64,
    pub min_angle: Option<f64>,
    pub max_angle: Option<f64>,
}

impl Default for AngleSettings {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING_ANGLE,
            start_offset: DEFAULT_START_ANGLE_OFFSET,
            speed_ratio: DEFAULT_SPEED_RATIO,
            min_angle: None,
            max_angle: None,
        }
    }
}

impl AngleSettings {
    pub fn resolve<S>(source: Option<&S>) -> Self
    where
        S: MenuDataSource + ?Sized,
    {
        let defaults = Self::default();
        let Some(source) = source else {
            return defaults;
        };
        let finite = |v: Option<f64>| v.filter(|v| v.is_finite());
        Self {
            spacing: finite(source.spacing_angle()).unwrap_or(defaults.spacing),
            start_offset: finite(source.start_angle_offset()).unwrap_or(defaults.start_offset),
            speed_ratio: finite(source.speed_ratio()).unwrap_or(defaults.speed_ratio),
            min_angle: finite(source.min_angle()),
            max_angle: finite(source.max_angle()),
        }
    }

    /// Angle of `slot` before any rotation, in degrees, measured from the
    /// left end of the ring.
    pub fn place_angle(&self, slot: usize) -> f64 {
        self.start_offset + slot as f64 * self.spacing
    }
}

/// Placement angle of `slot` in radians. Angle π is the left end of the ring.
pub fn placement_angle(slot: usize, settings: &AngleSettings) -> f64 {
    PI + settings.place_angle(slot).to_radians()
}

/// Center of `slot` relative to the ring center.
pub fn place(slot: usize, radius: f64, settings: &AngleSettings) -> Point {
    let angle = placement_angle(slot, settings);
    Point::new(angle.cos() * radius, angle.sin() * radius)
}

/// Range of rotation, in degrees, the drag gesture may reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleBounds {
    pub min: f64,
    pub max: f64,
}

impl AngleBounds {
    pub fn resolve(item_count: usize, settings: &AngleSettings) -> Self {
        let max = settings.max_angle.unwrap_or(180.0 - settings.spacing);
        let steps = if item_count < 3 { 0 } else { item_count - 2 };
        let min = settings
            .min_angle
            .unwrap_or(-(steps as f64) * settings.spacing);
        Self { min, max }
    }

    /// Whether a rotation of `degrees` stays inside the bounds once shifted by
    /// the start offset. Both ends are inclusive; NaN is never admitted.
    pub fn admits(&self, degrees: f64, offset: f64) -> bool {
        degrees >= self.min - offset && degrees <= self.max - offset
    }
}
