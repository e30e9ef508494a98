use crate::constants::{
    CONTACT_ENDPOINT_ATTR, CONTACT_FAILED_TEXT, CONTACT_FIELDS, CONTACT_FORM_ID,
    CONTACT_SENT_TEXT, CONTACT_STATUS_SELECTOR,
};
use crate::core::ContactSubmission;
use crate::dom::{self, Listener};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Hooks the lead-capture form, if the page has one. Returns `None` when the
/// form or its endpoint is missing.
pub fn wire_contact_form(document: &web::Document) -> Option<Listener> {
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)?
        .dyn_into::<web::HtmlFormElement>()
        .ok()?;
    let Some(endpoint) = form.get_attribute(CONTACT_ENDPOINT_ATTR) else {
        log::warn!("[contact] #{} has no {}", CONTACT_FORM_ID, CONTACT_ENDPOINT_ATTR);
        return None;
    };

    let target = form.clone();
    let listener = Listener::new(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let submission = match read_submission(&form) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[contact] not sent: {:#}", e);
                return;
            }
        };
        let form = form.clone();
        let endpoint = endpoint.clone();
        spawn_local(async move {
            let text = match post_json(&endpoint, &submission).await {
                Ok(()) => {
                    log::info!("[contact] sent");
                    form.reset();
                    CONTACT_SENT_TEXT
                }
                Err(e) => {
                    log::error!("[contact] send failed: {:#}", e);
                    CONTACT_FAILED_TEXT
                }
            };
            if let Some(doc) = dom::window_document() {
                dom::set_text(&doc, CONTACT_STATUS_SELECTOR, text);
            }
        });
    });
    match listener {
        Ok(l) => Some(l),
        Err(e) => {
            log::error!("[contact] {:#}", e);
            None
        }
    }
}

fn read_submission(form: &web::HtmlFormElement) -> anyhow::Result<ContactSubmission> {
    let data = web::FormData::new_with_form(form).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let [name, email, subject, message] =
        CONTACT_FIELDS.map(|field| data.get(field).as_string().unwrap_or_default());
    Ok(ContactSubmission::new(&name, &email, &subject, &message)?)
}

async fn post_json(endpoint: &str, submission: &ContactSubmission) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&submission.to_json()?.into());

    let req = web::Request::new_with_str_and_init(endpoint, &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let headers = req.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("relay answered {}", resp.status());
    }
    Ok(())
}
