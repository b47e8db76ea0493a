//! Layout and gesture core for a half-ring menu.
//!
//! Items sit along the band of a half annulus that opens upward from the
//! bottom edge of the view. Dragging horizontally turns the whole layer of
//! items about the ring center, within bounds derived from the item count.
//! Each item counter-rotates so its content stays upright. Items that turn
//! past either end of the band are hidden.
//!
//! The crate draws nothing. A host supplies items through [`MenuDataSource`],
//! forwards resize, drag and tap events to [`CircularMenu`], and renders the
//! [`RingPath`] and the placed [`MenuItem`]s however it likes.

pub mod config;
pub mod engine;
pub mod geometry;
pub mod gesture;
pub mod item;
pub mod placement;
pub mod ring;
pub mod source;
pub mod visibility;

pub use config::{ColorError, MenuConfig, RingColor};
pub use engine::CircularMenu;
pub use geometry::{Point, Rect, Size};
pub use gesture::{DragOutcome, DragPhase, DragState};
pub use item::{ItemsContainer, MenuItem};
pub use placement::{AngleBounds, AngleSettings};
pub use ring::{PathElement, Ring, RingPath, Sweep};
pub use source::{MenuDataSource, MenuDelegate};
