use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::toast::Toast;

pub const SUCCESS_TITLE: &str = "Message envoyé !";
pub const ERROR_TITLE: &str = "Erreur";
pub const FALLBACK_ERROR: &str = "Une erreur s'est produite. Veuillez réessayer.";

/// Path of the contact route, relative to the backend base URL.
const CONTACT_PATH: &str = "/api/contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Form control name, matching the JSON key it fills.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Success body. The backend also sends a `status` field, which is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    // validation failures carry a list of objects instead of a string
    fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Couldn't reach the contact backend: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Contact backend answered {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("Couldn't read the contact backend response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ContactError {
    /// Text shown to the visitor for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_ERROR.to_string(),
        }
    }
}

pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH);
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues exactly one POST carrying `payload` as JSON.
    pub async fn send(&self, payload: &ContactPayload) -> Result<ContactReceipt, ContactError> {
        log::debug!("posting contact message to {}", self.endpoint);
        let res = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(ContactError::Transport)?;

        let status = res.status();
        let body = res.bytes().await.map_err(ContactError::Decode)?;
        if status.is_success() {
            // an empty or non-JSON body still counts as delivered
            Ok(serde_json::from_slice(&body).unwrap_or_default())
        } else {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_detail);
            Err(ContactError::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Local state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    payload: ContactPayload,
    state: SubmitState,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.payload.name,
            Field::Email => &self.payload.email,
            Field::Message => &self.payload.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.payload.name,
            Field::Email => &mut self.payload.email,
            Field::Message => &mut self.payload.message,
        };
        *slot = value;
    }

    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Moves to `Submitting` and returns the payload to send.
    /// Returns `None` while a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            return None;
        }
        self.state = SubmitState::Submitting;
        Some(self.payload.clone())
    }

    /// Returns to `Idle` and builds the notification for the outcome.
    /// Fields are cleared on success only.
    pub fn finish(&mut self, outcome: Result<ContactReceipt, ContactError>) -> Toast {
        self.state = SubmitState::Idle;
        match outcome {
            Ok(receipt) => {
                self.payload = ContactPayload::default();
                Toast::success(SUCCESS_TITLE, receipt.message)
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                Toast::error(ERROR_TITLE, e.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastVariant;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada".to_string());
        form.set(Field::Email, "ada@example.com".to_string());
        form.set(Field::Message, "Bonjour".to_string());
        form
    }

    #[test]
    fn test_endpoint_joins_base() {
        let client = ContactClient::new("https://api.example.com");
        assert_eq!(client.endpoint(), "https://api.example.com/api/contact");
        let client = ContactClient::new("https://api.example.com/");
        assert_eq!(client.endpoint(), "https://api.example.com/api/contact");
    }

    #[test]
    fn test_begin_submit_snapshots_payload() {
        let mut form = filled();
        let payload = form.begin_submit().expect("idle form should submit");
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.message, "Bonjour");
        assert!(form.is_submitting());

        // second click while pending
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        form.begin_submit();
        let toast = form.finish(Ok(ContactReceipt {
            message: Some("Message envoyé".to_string()),
        }));
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.payload(), &ContactPayload::default());
        assert_eq!(toast.title, SUCCESS_TITLE);
        assert_eq!(toast.description.as_deref(), Some("Message envoyé"));
        assert_eq!(toast.variant, ToastVariant::Success);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit();
        let toast = form.finish(Err(ContactError::Rejected {
            status: 500,
            detail: Some("X".to_string()),
        }));
        assert!(!form.is_submitting());
        assert_eq!(form.get(Field::Name), "Ada");
        assert_eq!(form.get(Field::Message), "Bonjour");
        assert_eq!(toast.title, ERROR_TITLE);
        assert_eq!(toast.description.as_deref(), Some("X"));
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_missing_detail_falls_back() {
        let err = ContactError::Rejected {
            status: 502,
            detail: None,
        };
        assert_eq!(err.user_message(), FALLBACK_ERROR);
    }

    #[test]
    fn test_error_body_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "X"}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some("X"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": [{"loc": ["body", "email"], "msg": "bad"}]}"#)
                .unwrap();
        assert_eq!(body.into_detail(), None);

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_detail(), None);
    }
}
