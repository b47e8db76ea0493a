use crate::config::ItemLabel;
use arcmenu::{CircularMenu, DragOutcome, Point, Size};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    pub index: usize,
    pub label: ItemLabel,
    pub center: Point,
    pub rotation_degrees: f64,
    pub hidden: bool,
}

/// Snapshot of a laid out menu, in view coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub size: Size,
    pub rotation_degrees: f64,
    pub min_angle: f64,
    pub max_angle: f64,
    pub items: Vec<ItemReport>,
}

impl LayoutReport {
    pub fn capture(menu: &CircularMenu<ItemLabel>) -> Self {
        let bounds = menu.angle_bounds();
        Self {
            size: menu.size(),
            rotation_degrees: menu.rotation().to_degrees(),
            min_angle: bounds.min,
            max_angle: bounds.max,
            items: menu
                .items()
                .iter()
                .map(|item| ItemReport {
                    index: item.index,
                    label: item.handle.clone(),
                    center: menu.item_view_frame(item).center(),
                    rotation_degrees: item.rotation.to_degrees(),
                    hidden: item.hidden,
                })
                .collect(),
        }
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}x{} rotation {:.1} deg (bounds {:.1}..{:.1})",
            self.size.width, self.size.height, self.rotation_degrees, self.min_angle, self.max_angle
        )?;
        for item in &self.items {
            writeln!(
                f,
                "  [{}] {:<12} ({:7.1}, {:7.1}) rot {:6.1}{}",
                item.index,
                item.label,
                item.center.x,
                item.center.y,
                item.rotation_degrees,
                if item.hidden { " hidden" } else { "" }
            )?;
        }
        Ok(())
    }
}

/// Replays a horizontal drag of `dx` pixels starting at the top of the ring.
pub fn replay_drag(menu: &mut CircularMenu<ItemLabel>, dx: f64) -> DragOutcome {
    let ring = menu.ring();
    let start = ring.center().offset(0.0, -ring.item_radius());
    if !menu.drag_began(start) {
        return DragOutcome::Ignored;
    }
    let outcome = menu.drag_moved(start.offset(dx, 0.0));
    menu.drag_ended();
    outcome
}
