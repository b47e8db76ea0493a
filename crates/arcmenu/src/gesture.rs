use crate::geometry::Point;
use strum::Display as StrumDisplay;

/// Horizontal pointer travel, in pixels, that turns the layout by one radian
/// at a speed ratio of 1.
pub const DRAG_DISTANCE_PER_RADIAN: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum DragPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        origin: Point,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn origin(&self) -> Option<Point> {
        match self {
            Self::Dragging { origin } => Some(*origin),
            Self::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Nothing to rotate, or no drag in progress.
    Ignored,
    /// The move would leave the angle bounds; rotation is unchanged.
    Rejected,
    Rotated { rotation: f64 },
}

impl DragOutcome {
    pub fn rotated(&self) -> bool {
        matches!(self, Self::Rotated { .. })
    }
}

/// Rotation, in radians, a drag of `dx` pixels proposes from `current`.
pub fn candidate_rotation(current: f64, dx: f64, speed_ratio: f64) -> f64 {
    current + dx / DRAG_DISTANCE_PER_RADIAN * speed_ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_scales_with_speed() {
        assert_eq!(candidate_rotation(0.0, 100.0, 1.0), 1.0);
        assert_eq!(candidate_rotation(0.5, -50.0, 2.0), -0.5);
        assert_eq!(candidate_rotation(0.25, 0.0, 3.0), 0.25);
    }

    #[test]
    fn test_origin_only_while_dragging() {
        assert_eq!(DragState::Idle.origin(), None);
        let state = DragState::Dragging {
            origin: Point::new(3.0, 4.0),
        };
        assert!(state.is_dragging());
        assert_eq!(state.origin(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(DragPhase::Began.to_string(), "began");
        assert_eq!(DragPhase::Cancelled.to_string(), "cancelled");
    }
}
