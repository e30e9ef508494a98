use crate::constants::{
    CLONE_ATTR, ITEM_HREF_ATTR, ITEM_ID_ATTR, ITEM_ID_SELECTOR, ITEM_LABEL_ATTR,
};
use crate::core::{ItemSet, LogoItem};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Registers `handler` for `event` on `target`. Events that are not an `E`
    /// are skipped.
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", id, e))
}

pub fn query_html_element(root: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    root.query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{} is not an HTML element: {:?}", selector, e))
}

/// Id of the logo element at or above `target`, if any.
pub fn logo_id_of(target: Option<web::EventTarget>) -> Option<String> {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(ITEM_ID_SELECTOR).ok().flatten())
        .and_then(|el| el.get_attribute(ITEM_ID_ATTR))
}

#[inline]
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

/// Reads the server-rendered logos (direct children of the track carrying an
/// id attribute) into an [`ItemSet`].
pub fn read_items(track: &web::Element) -> ItemSet {
    let children = track.children();
    let items = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|el| !el.has_attribute(CLONE_ATTR))
        .filter_map(|el| {
            let id = el.get_attribute(ITEM_ID_ATTR)?;
            let label = el
                .get_attribute(ITEM_LABEL_ATTR)
                .or_else(|| el.text_content())
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            Some(LogoItem::new(id, label, el.get_attribute(ITEM_HREF_ATTR)))
        })
        .collect();
    ItemSet::new(items)
}

/// Appends one hidden copy of every rendered logo so the strip can scroll past
/// its halfway point. Returns the appended clones.
pub fn append_clones(track: &web::Element) -> anyhow::Result<Vec<web::Element>> {
    let children = track.children();
    let originals: Vec<web::Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|el| el.has_attribute(ITEM_ID_ATTR) && !el.has_attribute(CLONE_ATTR))
        .collect();
    let mut clones = Vec::with_capacity(originals.len());
    for el in &originals {
        let node = el
            .clone_node_with_deep(true)
            .map_err(|e| anyhow::anyhow!("clone logo: {:?}", e))?;
        let clone: web::Element = node
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("cloned logo is not an element: {:?}", e))?;
        _ = clone.set_attribute(CLONE_ATTR, "");
        _ = clone.set_attribute("aria-hidden", "true");
        track
            .append_child(&clone)
            .map_err(|e| anyhow::anyhow!("append clone: {:?}", e))?;
        clones.push(clone);
    }
    Ok(clones)
}

/// Width of one (non-doubled) item set: the distance from the first item to
/// the first clone, which includes any gap between items. Falls back to half
/// of the doubled track.
pub fn measure_set_width(track: &web::HtmlElement, set_len: usize) -> f64 {
    let children = track.children();
    let left = |i: usize| {
        children
            .item(i as u32)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| el.offset_left() as f64)
    };
    if set_len > 0 {
        if let (Some(first), Some(nth)) = (left(0), left(set_len)) {
            if nth > first {
                return nth - first;
            }
        }
    }
    track.get_bounding_client_rect().width() / 2.0
}

#[inline]
pub fn set_translate_x(el: &web::HtmlElement, offset_px: f64) {
    _ = el
        .style()
        .set_property("transform", &format!("translate3d({:.3}px, 0, 0)", offset_px));
}

#[inline]
pub fn clear_transform(el: &web::HtmlElement) {
    _ = el.style().remove_property("transform");
}

#[inline]
pub fn set_text(document: &web::Document, selector: &str, text: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        el.set_text_content(Some(text));
    }
}
