/// DOM contract between the server-rendered page and the wasm front-end.
///
/// The page owns the markup; these names are the only coupling points.
// Marquee structure
pub const MARQUEE_ROOT_ID: &str = "logo-marquee";
pub const TRACK_SELECTOR: &str = ".marquee-track";

// Per-item attributes
pub const ITEM_ID_ATTR: &str = "data-logo-id";
pub const ITEM_HREF_ATTR: &str = "data-href";
pub const ITEM_LABEL_ATTR: &str = "data-label";
pub const ITEM_ID_SELECTOR: &str = "[data-logo-id]";
pub const CLONE_ATTR: &str = "data-marquee-clone"; // marks the second copy of the set

// Per-instance motion overrides on the root
pub const SPEED_ATTR: &str = "data-speed";
pub const DECAY_ATTR: &str = "data-decay";

// Pointer
pub const PRIMARY_BUTTON: i16 = 0;

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_ENDPOINT_ATTR: &str = "data-endpoint";
pub const CONTACT_STATUS_SELECTOR: &str = "[data-contact-status]";
pub const CONTACT_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];
pub const CONTACT_SENT_TEXT: &str = "Thanks! We'll be in touch shortly.";
pub const CONTACT_FAILED_TEXT: &str = "Sorry, your message could not be sent. Please try again.";
