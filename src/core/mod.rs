pub mod config;
pub mod constants;
pub mod contact;
pub mod items;
pub mod motion;

pub use config::parse_motion_params;
pub use contact::ContactSubmission;
pub use items::{ItemSet, LogoItem, PressedLogo};
pub use motion::{Intent, MarqueeMotion};
