use serde::Serialize;

/// Reasons a contact form cannot be sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// JSON body posted to the form relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let subject = required("subject", subject)?;
        let message = required("message", message)?;
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

// local@domain.tld, no whitespace; the relay does the real verification
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
