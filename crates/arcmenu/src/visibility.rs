/// Slack past either end of the visible window so items near the edge do
/// not flicker while dragging.
pub const VISIBILITY_MARGIN_DEGREES: f64 = 10.0;

/// Whether an item placed at `place_angle` is shown while the layout is
/// rotated by `rotation`. Both in degrees; both ends are exclusive.
pub fn is_visible(rotation: f64, place_angle: f64) -> bool {
    rotation > -place_angle - VISIBILITY_MARGIN_DEGREES
        && rotation < 180.0 - place_angle + VISIBILITY_MARGIN_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_inside_window() {
        assert!(is_visible(10.0, 25.0));
        assert!(is_visible(0.0, 25.0));
        assert!(is_visible(164.9, 25.0));
    }

    #[test]
    fn test_hidden_past_either_end() {
        assert!(!is_visible(-40.0, 25.0));
        assert!(!is_visible(166.0, 25.0));
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert!(!is_visible(-35.0, 25.0));
        assert!(!is_visible(165.0, 25.0));
        assert!(is_visible(-34.999, 25.0));
    }

    #[test]
    fn test_later_slots_hide_sooner_when_rotating_forward() {
        // slot 7 at the default spacing sits at 200 degrees
        assert!(!is_visible(0.0, 200.0));
        assert!(is_visible(-40.0, 200.0));
    }
}
