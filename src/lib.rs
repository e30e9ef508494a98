#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod marquee;

pub use marquee::Marquee;

thread_local! {
    // Page-level marquee mounted by `start`; torn down by `unmount_marquee`.
    static MOUNTED: RefCell<Option<Marquee>> = const { RefCell::new(None) };
    static CONTACT: RefCell<Option<dom::Listener>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("marquee-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.get_element_by_id(constants::MARQUEE_ROOT_ID).is_some() {
        match Marquee::mount_in(&document, constants::MARQUEE_ROOT_ID) {
            Ok(marquee) => MOUNTED.with(|m| *m.borrow_mut() = Some(marquee)),
            Err(e) => log::error!("[marquee] mount failed: {:#}", e),
        }
    } else {
        log::info!("[marquee] no #{} on this page", constants::MARQUEE_ROOT_ID);
    }

    let contact = contact::wire_contact_form(&document);
    CONTACT.with(|c| *c.borrow_mut() = contact);
    Ok(())
}

/// Stops the page-level marquee: no further frames, listeners detached.
#[wasm_bindgen]
pub fn unmount_marquee() {
    if let Some(marquee) = MOUNTED.with(|m| m.borrow_mut().take()) {
        marquee.unmount();
    }
}
