use crate::core::{ItemSet, PressedLogo};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Delegated click handler: a click on any logo (original or clone) navigates
/// to that logo's link. A click retargeted to the root by pointer capture
/// falls back to the logo the press started on.
///
/// Clicks that end a drag are not filtered out.
pub fn wire_item_select(
    root: &web::HtmlElement,
    items: Rc<ItemSet>,
    pressed: Rc<RefCell<PressedLogo>>,
) -> anyhow::Result<Listener> {
    Listener::new(root, "click", move |ev: web::MouseEvent| {
        let target_id = dom::logo_id_of(ev.target());
        let Some(id) = pressed.borrow_mut().resolve_click(target_id.as_deref()) else {
            return;
        };
        match items.navigation_target(&id) {
            Some(href) => {
                log::info!("[marquee] logo {} -> {}", id, href);
                if let Some(window) = web::window() {
                    _ = window.location().set_href(href);
                }
                ev.prevent_default();
            }
            None => log::debug!("[marquee] logo {} has no link", id),
        }
    })
}
