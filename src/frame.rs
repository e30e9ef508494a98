use crate::core::MarqueeMotion;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub motion: Rc<RefCell<MarqueeMotion>>,
    pub track: web::HtmlElement,
    last_published: Option<f64>,
}

impl FrameContext {
    pub fn new(motion: Rc<RefCell<MarqueeMotion>>, track: web::HtmlElement) -> Self {
        Self {
            motion,
            track,
            last_published: None,
        }
    }

    pub fn frame(&mut self) {
        let offset = {
            let mut motion = self.motion.borrow_mut();
            motion.step();
            motion.offset()
        };
        // Paused strips don't need a style write every frame
        if self.last_published != Some(offset) {
            dom::set_translate_x(&self.track, offset);
            self.last_published = Some(offset);
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running requestAnimationFrame chain. Dropping it cancels the pending
/// frame and releases the tick closure.
pub struct FrameLoop {
    tick: TickClosure,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure -> tick Rc cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickClosure, request_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => request_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let request_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let request_id_clone = request_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_id_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &request_id_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &request_id);
    FrameLoop { tick, request_id }
}
