use crate::constants::PRIMARY_BUTTON;
use web_sys as web;

// Pointer coordinates are CSS pixels, the same space the track translation uses.
#[inline]
pub fn pointer_x(ev: &web::PointerEvent) -> f64 {
    ev.client_x() as f64
}

// Only the main button (or a touch/pen contact) starts a drag.
#[inline]
pub fn starts_drag(ev: &web::PointerEvent) -> bool {
    ev.is_primary() && ev.button() == PRIMARY_BUTTON
}
