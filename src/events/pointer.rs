use crate::core::{Intent, MarqueeMotion, PressedLogo};
use crate::dom::{self, Listener};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub root: web::HtmlElement,
    pub motion: Rc<RefCell<MarqueeMotion>>,
    pub pressed: Rc<RefCell<PressedLogo>>,
}

/// Drag and hover handlers on the marquee root. Handlers only enqueue
/// intents; the frame loop applies them.
pub fn wire_pointer_handlers(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointerdown(w)?,
        wire_pointermove(w)?,
        wire_pointerup(w, "pointerup")?,
        wire_pointerup(w, "pointercancel")?,
        wire_pointerenter(w)?,
        wire_pointerleave(w)?,
    ])
}

fn wire_pointerdown(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target = w.root.clone();
    Listener::new(&target, "pointerdown", move |ev: web::PointerEvent| {
        // Recorded before capture retargets the click to the root.
        w.pressed.borrow_mut().press(dom::logo_id_of(ev.target()));
        if !input::starts_drag(&ev) {
            return;
        }
        let x = input::pointer_x(&ev);
        w.motion.borrow_mut().enqueue(Intent::PointerDown { x });
        _ = w.root.set_pointer_capture(ev.pointer_id());
        log::debug!("[marquee] drag start x={:.1}", x);
    })
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target = w.root.clone();
    Listener::new(&target, "pointermove", move |ev: web::PointerEvent| {
        let mut motion = w.motion.borrow_mut();
        // Moves without a drag in flight (or queued) would be ignored anyway.
        let drag_pending = motion
            .pending()
            .iter()
            .any(|i| matches!(i, Intent::PointerDown { .. }));
        if motion.is_dragging() || drag_pending {
            motion.enqueue(Intent::PointerMove {
                x: input::pointer_x(&ev),
            });
            ev.prevent_default();
        }
    })
}

fn wire_pointerup(w: &PointerWiring, event: &'static str) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target = w.root.clone();
    Listener::new(&target, event, move |ev: web::PointerEvent| {
        w.motion.borrow_mut().enqueue(Intent::PointerUp);
        if w.root.has_pointer_capture(ev.pointer_id()) {
            _ = w.root.release_pointer_capture(ev.pointer_id());
        }
    })
}

fn wire_pointerenter(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target = w.root.clone();
    Listener::new(&target, "pointerenter", move |_ev: web::PointerEvent| {
        w.motion.borrow_mut().enqueue(Intent::HoverEnter);
    })
}

fn wire_pointerleave(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target = w.root.clone();
    Listener::new(&target, "pointerleave", move |_ev: web::PointerEvent| {
        let mut motion = w.motion.borrow_mut();
        motion.enqueue(Intent::PointerUp);
        motion.enqueue(Intent::HoverLeave);
    })
}
