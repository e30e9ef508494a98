use crate::core::{Intent, MarqueeMotion};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Remeasures one item set whenever the window resizes.
pub fn wire_resize(
    track: web::HtmlElement,
    set_len: usize,
    motion: Rc<RefCell<MarqueeMotion>>,
) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Listener::new(&window, "resize", move |_ev: web::Event| {
        let width = dom::measure_set_width(&track, set_len);
        motion.borrow_mut().enqueue(Intent::Resize { width });
    })
}

/// Watches the track and its logos for layout changes the window never sees,
/// such as images finishing loading or web fonts swapping in.
/// Disconnects when dropped.
pub struct TrackObserver {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for TrackObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_track(
    track: &web::HtmlElement,
    clones: &[web::Element],
    set_len: usize,
    motion: Rc<RefCell<MarqueeMotion>>,
) -> anyhow::Result<TrackObserver> {
    let measured = track.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        let width = dom::measure_set_width(&measured, set_len);
        motion.borrow_mut().enqueue(Intent::Resize { width });
    });
    let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("ResizeObserver unavailable: {:?}", e))?;
    observer.observe(track);
    // The clones mirror the originals, so their boxes change together.
    for clone in clones {
        observer.observe(clone);
    }
    Ok(TrackObserver {
        observer,
        _callback: callback,
    })
}
