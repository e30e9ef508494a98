use crate::constants::{DECAY_ATTR, SPEED_ATTR, TRACK_SELECTOR};
use crate::core::{parse_motion_params, Intent, ItemSet, MarqueeMotion, PressedLogo};
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::{self, FrameContext, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// A mounted logo marquee.
///
/// Owns the frame loop, every listener it registered and the cloned second
/// copy of the logos. Unmounting (or dropping) tears all of them down.
#[wasm_bindgen]
pub struct Marquee {
    motion: Rc<RefCell<MarqueeMotion>>,
    track: web::HtmlElement,
    clones: Vec<web::Element>,
    listeners: Vec<Listener>,
    track_observer: Option<events::TrackObserver>,
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl Marquee {
    /// Mounts the marquee rooted at the element with id `root_id`.
    pub fn mount(root_id: &str) -> Result<Marquee, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        Self::mount_in(&document, root_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    /// Current translation of the strip in CSS pixels.
    pub fn offset(&self) -> f64 {
        self.motion.borrow().offset()
    }

    /// Stops the frame loop and detaches everything; see `Drop`.
    pub fn unmount(self) {}
}

impl Marquee {
    pub fn mount_in(document: &web::Document, root_id: &str) -> anyhow::Result<Self> {
        let root = dom::html_element_by_id(document, root_id)?;
        let track = dom::query_html_element(&root, TRACK_SELECTOR)?;

        let items = dom::read_items(&track);
        if items.is_empty() {
            anyhow::bail!("#{} has no logos", root_id);
        }
        let clones = dom::append_clones(&track)?;
        // Rendered elements per copy, which may include logos the set dropped
        let set_len = clones.len();

        let params = parse_motion_params(
            dom::data_attr(&root, SPEED_ATTR).as_deref(),
            dom::data_attr(&root, DECAY_ATTR).as_deref(),
        );
        let motion = Rc::new(RefCell::new(MarqueeMotion::new(params)));
        let width = dom::measure_set_width(&track, set_len);
        motion.borrow_mut().apply(Intent::Resize { width });
        log::info!(
            "[marquee] mounted #{} logos={} strip={} width={:.1} speed={} decay={}",
            root_id,
            items.len(),
            items.doubled().count(),
            width,
            params.base_speed,
            params.decay
        );

        let listeners = match wire_listeners(&root, &track, set_len, items, &motion) {
            Ok(l) => l,
            Err(e) => {
                for clone in &clones {
                    clone.remove();
                }
                return Err(e);
            }
        };

        // Window resizes still remeasure when the observer is missing.
        let track_observer = events::observe_track(&track, &clones, set_len, motion.clone())
            .map_err(|e| log::warn!("[marquee] {:#}", e))
            .ok();

        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(motion.clone(), track.clone())));
        let frame_loop = frame::start_loop(frame_ctx);

        Ok(Self {
            motion,
            track,
            clones,
            listeners,
            track_observer,
            frame_loop,
        })
    }
}

fn wire_listeners(
    root: &web::HtmlElement,
    track: &web::HtmlElement,
    set_len: usize,
    items: ItemSet,
    motion: &Rc<RefCell<MarqueeMotion>>,
) -> anyhow::Result<Vec<Listener>> {
    let pressed = Rc::new(RefCell::new(PressedLogo::default()));
    let mut listeners = events::wire_pointer_handlers(&events::PointerWiring {
        root: root.clone(),
        motion: motion.clone(),
        pressed: pressed.clone(),
    })?;
    listeners.push(events::wire_resize(track.clone(), set_len, motion.clone())?);
    listeners.push(events::wire_item_select(root, Rc::new(items), pressed)?);
    Ok(listeners)
}

impl Drop for Marquee {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        self.listeners.clear();
        self.track_observer.take();
        for clone in self.clones.drain(..) {
            clone.remove();
        }
        dom::clear_transform(&self.track);
        log::info!("[marquee] unmounted");
    }
}
