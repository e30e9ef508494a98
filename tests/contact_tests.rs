// Host-side tests for the contact form payload.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;

#[test]
fn builds_trimmed_submission() {
    let s = ContactSubmission::new(
        "  Jane Grower ",
        "jane@farm.example",
        " Bulk order ",
        "Need 20 pallets.\n",
    )
    .expect("valid submission");
    assert_eq!(s.name, "Jane Grower");
    assert_eq!(s.email, "jane@farm.example");
    assert_eq!(s.subject, "Bulk order");
    assert_eq!(s.message, "Need 20 pallets.");
}

#[test]
fn json_body_has_the_four_fields() {
    let s = ContactSubmission::new("Jane", "jane@farm.example", "Hi", "Hello").unwrap();
    let v: serde_json::Value = serde_json::from_str(&s.to_json().unwrap()).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "name": "Jane",
            "email": "jane@farm.example",
            "subject": "Hi",
            "message": "Hello",
        })
    );
}

#[test]
fn reports_first_missing_field() {
    assert_eq!(
        ContactSubmission::new("", "a@b.co", "s", "m"),
        Err(ContactError::MissingField("name"))
    );
    assert_eq!(
        ContactSubmission::new("n", "a@b.co", "s", "   "),
        Err(ContactError::MissingField("message"))
    );
    assert_eq!(
        ContactSubmission::new("n", "", "", "m"),
        Err(ContactError::MissingField("email"))
    );
}

#[test]
fn rejects_malformed_emails() {
    for bad in [
        "plain",
        "@farm.example",
        "jane@",
        "jane@farm",
        "ja ne@farm.example",
        "a@b@c.d",
        "jane@.com",
        "jane@farm.",
    ] {
        assert_eq!(
            ContactSubmission::new("n", bad, "s", "m"),
            Err(ContactError::InvalidEmail(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn accepts_subdomains_and_plus_tags() {
    assert!(ContactSubmission::new("n", "ops+leads@mail.farm.example", "s", "m").is_ok());
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(
        ContactError::MissingField("subject").to_string(),
        "missing required field `subject`"
    );
    assert_eq!(
        ContactError::InvalidEmail("x".into()).to_string(),
        "invalid email address: x"
    );
}
