use crate::config::{MenuConfig, RingColor};
use crate::geometry::{Point, Rect, Size};
use crate::gesture::{DragOutcome, DragPhase, DragState, candidate_rotation};
use crate::item::{ItemsContainer, MenuItem};
use crate::placement::{AngleBounds, AngleSettings, place};
use crate::ring::{Ring, RingPath};
use crate::source::{MenuDataSource, MenuDelegate};
use crate::visibility::is_visible;
use std::rc::{Rc, Weak};

/// Layout and gesture state for one circular menu.
///
/// The host feeds it size changes, drag events and taps on the UI thread, and
/// reads back the ring path, the container transform and the placed items.
/// The data source and delegate are held weakly; once dropped they count as
/// absent and the menu behaves as if it were empty.
pub struct CircularMenu<H> {
    config: MenuConfig,
    data_source: Option<Weak<dyn MenuDataSource<Item = H>>>,
    delegate: Option<Weak<dyn MenuDelegate>>,
    size: Size,
    ring: Ring,
    container: ItemsContainer,
    items: Vec<MenuItem<H>>,
    drag: DragState,
    needs_layout: bool,
}

impl<H: Clone + 'static> Default for CircularMenu<H> {
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}

impl<H: Clone + 'static> CircularMenu<H> {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            data_source: None,
            delegate: None,
            size: Size::ZERO,
            ring: Ring::default(),
            container: ItemsContainer::default(),
            items: Vec::new(),
            drag: DragState::Idle,
            needs_layout: true,
        }
    }

    pub fn set_data_source<S>(&mut self, source: &Rc<S>)
    where
        S: MenuDataSource<Item = H> + 'static,
    {
        let weak: Weak<S> = Rc::downgrade(source);
        self.data_source = Some(weak);
        self.needs_layout = true;
    }

    pub fn clear_data_source(&mut self) {
        self.data_source = None;
        self.needs_layout = true;
    }

    pub fn set_delegate<D>(&mut self, delegate: &Rc<D>)
    where
        D: MenuDelegate + 'static,
    {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn source(&self) -> Option<Rc<dyn MenuDataSource<Item = H>>> {
        self.data_source.as_ref().and_then(Weak::upgrade)
    }

    fn settings(&self) -> AngleSettings {
        AngleSettings::resolve(self.source().as_deref())
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MenuConfig) {
        self.config = config;
        self.needs_layout = true;
    }

    pub fn set_ring_color(&mut self, color: RingColor) {
        self.config.ring_color = color;
        self.needs_layout = true;
    }

    pub fn set_ring_thickness(&mut self, thickness: f64) {
        self.config.ring_thickness = thickness;
        self.needs_layout = true;
    }

    /// Schedules a full relayout on the next [`layout_if_needed`](Self::layout_if_needed).
    pub fn reload(&mut self) {
        self.needs_layout = true;
    }

    /// Records a new view size. Returns whether it differed from the last one,
    /// in which case a relayout is scheduled.
    pub fn resize(&mut self, size: Size) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.needs_layout = true;
        true
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn layout_if_needed(&mut self) -> bool {
        if !self.needs_layout {
            return false;
        }
        self.layout();
        true
    }

    /// Rebuilds the ring and item placement from scratch and resets rotation.
    pub fn layout(&mut self) {
        self.needs_layout = false;
        self.ring = Ring::new(self.size, self.config.ring_thickness);
        self.container = ItemsContainer::for_ring(&self.ring);
        self.items.clear();

        let Some(source) = self.source() else {
            log::debug!("layout skipped: no data source");
            return;
        };

        let settings = AngleSettings::resolve(Some(&*source));
        let radius = self.ring.item_radius();
        let interactive = !self.drag.is_dragging();

        for index in 0..source.item_count() {
            let (Some(handle), Some(size)) = (source.item(index), source.item_size(index)) else {
                log::debug!("skipping item {}: no handle or size", index);
                continue;
            };
            if !size.is_valid() {
                log::debug!("skipping item {}: invalid size {:?}", index, size);
                continue;
            }
            let slot = self.items.len();
            self.items.push(MenuItem {
                handle,
                index,
                slot,
                size,
                center: place(slot, radius, &settings),
                rotation: 0.0,
                hidden: false,
                interactive,
            });
        }

        self.update_visibility(&settings);
        log::debug!(
            "laid out {} items on a {}x{} ring",
            self.items.len(),
            self.size.width,
            self.size.height
        );
    }

    fn update_visibility(&mut self, settings: &AngleSettings) {
        let angle = self.container.rotation.to_degrees();
        for item in &mut self.items {
            item.hidden = !is_visible(angle, settings.place_angle(item.slot));
        }
    }

    fn set_interactive(&mut self, interactive: bool) {
        for item in &mut self.items {
            item.interactive = interactive;
        }
    }

    /// Starts a drag at `point`. Returns false, leaving the menu idle, when
    /// there is nothing to rotate.
    pub fn drag_began(&mut self, point: Point) -> bool {
        if self.items.is_empty() || self.source().is_none() {
            return false;
        }
        log::trace!("drag {} at ({}, {})", DragPhase::Began, point.x, point.y);
        self.drag = DragState::Dragging { origin: point };
        self.set_interactive(false);
        true
    }

    /// Rotates by the horizontal distance moved since the previous event.
    pub fn drag_moved(&mut self, point: Point) -> DragOutcome {
        let Some(origin) = self.drag.origin() else {
            return DragOutcome::Ignored;
        };
        if self.items.is_empty() {
            return DragOutcome::Ignored;
        }
        let Some(source) = self.source() else {
            return DragOutcome::Ignored;
        };

        self.set_interactive(false);
        let settings = AngleSettings::resolve(Some(&*source));
        let outcome = self.rotate_by(point.x - origin.x, &settings);
        self.drag = DragState::Dragging { origin: point };
        outcome
    }

    fn rotate_by(&mut self, dx: f64, settings: &AngleSettings) -> DragOutcome {
        let candidate = candidate_rotation(self.container.rotation, dx, settings.speed_ratio);
        let degrees = candidate.to_degrees();
        let bounds = AngleBounds::resolve(self.items.len(), settings);
        if !bounds.admits(degrees, settings.start_offset) {
            log::trace!(
                "drag {} rejected: {:.2} outside [{:.2}, {:.2}]",
                DragPhase::Moved,
                degrees,
                bounds.min - settings.start_offset,
                bounds.max - settings.start_offset
            );
            return DragOutcome::Rejected;
        }

        self.container.rotation = candidate;
        for item in &mut self.items {
            item.rotation = -candidate;
        }
        self.update_visibility(settings);
        DragOutcome::Rotated {
            rotation: candidate,
        }
    }

    pub fn drag_ended(&mut self) {
        log::trace!("drag {}", DragPhase::Ended);
        self.finish_drag();
    }

    /// The gesture was interrupted. Same effect as [`drag_ended`](Self::drag_ended).
    pub fn drag_cancelled(&mut self) {
        log::trace!("drag {}", DragPhase::Cancelled);
        self.finish_drag();
    }

    fn finish_drag(&mut self) {
        self.drag = DragState::Idle;
        self.set_interactive(true);
    }

    /// Reports a completed tap on the item with host index `index`. Returns
    /// whether the delegate was notified.
    pub fn tap(&self, index: usize) -> bool {
        let tappable = self
            .items
            .iter()
            .any(|item| item.index == index && item.interactive && !item.hidden);
        if !tappable {
            return false;
        }
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        log::info!("item {} selected", index);
        delegate.on_item_selected(index);
        true
    }

    /// Host index of the topmost tappable item under `point` (view coordinates).
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.items
            .iter()
            .rev()
            .filter(|item| item.interactive && !item.hidden)
            .find(|item| self.item_view_frame(item).contains(point))
            .map(|item| item.index)
    }

    /// Frame of `item` in view coordinates. Items counter-rotate, so the frame
    /// stays axis aligned.
    pub fn item_view_frame(&self, item: &MenuItem<H>) -> Rect {
        Rect::from_center(self.container.to_view(item.center), item.size)
    }

    pub fn items(&self) -> &[MenuItem<H>] {
        &self.items
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn ring_path(&self) -> RingPath {
        self.ring.path()
    }

    pub fn container(&self) -> &ItemsContainer {
        &self.container
    }

    /// Current rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.container.rotation
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn angle_settings(&self) -> AngleSettings {
        self.settings()
    }

    pub fn angle_bounds(&self) -> AngleBounds {
        AngleBounds::resolve(self.items.len(), &self.settings())
    }
}
