use crate::config::ItemLabel;
use crate::gui::theme::ThemeColors;
use arcmenu::{CircularMenu, MenuItem, PathElement, RingPath, Sweep};
use cairo::Context;
use std::f64::consts::PI;

fn trace_path(cr: &Context, path: &RingPath) {
    for element in &path.elements {
        match *element {
            PathElement::MoveTo(p) => cr.move_to(p.x, p.y),
            PathElement::LineTo(p) => cr.line_to(p.x, p.y),
            PathElement::Arc {
                center,
                radius,
                start,
                end,
                sweep: Sweep::Positive,
            } => cr.arc(center.x, center.y, radius, start, end),
            PathElement::Arc {
                center,
                radius,
                start,
                end,
                sweep: Sweep::Negative,
            } => cr.arc_negative(center.x, center.y, radius, start, end),
            PathElement::Close => cr.close_path(),
        }
    }
}

fn draw_ring(cr: &Context, menu: &CircularMenu<ItemLabel>) -> Result<(), cairo::Error> {
    let (r, g, b) = menu.config().ring_color.components();
    cr.set_source_rgb(r, g, b);
    trace_path(cr, &menu.ring_path());
    cr.fill()
}

fn draw_item(
    cr: &Context,
    item: &MenuItem<ItemLabel>,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(item.center.x, item.center.y);
    cr.rotate(item.rotation);

    let radius = item.size.width.min(item.size.height) / 2.0;
    let (r, g, b, a) = colors.item.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    let (r, g, b, a) = colors.label.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(11.0);
    if let Ok(ext) = cr.text_extents(item.handle.as_str()) {
        cr.move_to(-ext.width() / 2.0, ext.height() / 2.0);
        cr.show_text(item.handle.as_str())?;
    }
    cr.restore()
}

/// Paints the ring, then the items on the rotated container layer.
pub fn draw(
    cr: &Context,
    menu: &CircularMenu<ItemLabel>,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    draw_ring(cr, menu)?;

    let container = menu.container();
    cr.save()?;
    cr.translate(container.origin.x, container.origin.y);
    cr.rotate(container.rotation);
    for item in menu.items().iter().filter(|item| !item.hidden) {
        draw_item(cr, item, colors)?;
    }
    cr.restore()
}
