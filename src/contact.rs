//! Contact form model and the best-effort email relay behind it.
//!
//! Validation always runs locally first. Only a valid form is handed to the
//! relay, and when no relay is configured at build time the form is
//! acknowledged in demo mode instead.

use std::sync::LazyLock;

use http::StatusCode;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    /// Clears one field's error, used as soon as the user edits it.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let email = self.email.trim();
        let errors = FieldErrors {
            name: self.name.trim().is_empty().then_some("Name is required"),
            email: if email.is_empty() {
                Some("Email is required")
            } else if !EMAIL_RE.is_match(email) {
                Some("Please enter a valid email address")
            } else {
                None
            },
            message: self.message.trim().is_empty().then_some("Message is required"),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("email relay request failed: {0}")]
    Network(String),
    #[error("email relay rejected the message with {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fix the highlighted fields.")]
    Invalid(FieldErrors),
    #[error("Your message could not be sent. Please try again later.")]
    Relay(#[from] RelayError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No relay configured; the message was acknowledged but went nowhere.
    Demo,
}

impl Delivery {
    pub fn message(self) -> &'static str {
        match self {
            Self::Sent => "Thanks for reaching out! I'll get back to you soon.",
            Self::Demo => "Thanks for reaching out! (Demo mode: email service not configured.)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success(Delivery),
    Failed(String),
}

impl FormStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn banner(&self) -> Option<(bool, String)> {
        match self {
            Self::Success(d) => Some((true, d.message().to_string())),
            Self::Failed(msg) => Some((false, msg.clone())),
            Self::Idle | Self::Sending => None,
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Identifiers for the EmailJS account, all three or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    service_id: String,
    template_id: String,
    public_key: String,
}

impl RelayConfig {
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        Some(Self {
            service_id: present(service_id)?.to_string(),
            template_id: present(template_id)?.to_string(),
            public_key: present(public_key)?.to_string(),
        })
    }

    /// Reads `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY`
    /// as they were when the crate was compiled.
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn payload<'a>(&'a self, form: &'a ContactForm) -> EmailJsPayload<'a> {
        EmailJsPayload {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: form.name.trim(),
                from_email: form.email.trim(),
                reply_to: form.email.trim(),
                message: form.message.trim(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError>;
}

/// Relay type for builds without a browser; it cannot be constructed.
pub enum NoRelay {}

impl EmailRelay for NoRelay {
    async fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
        match *self {}
    }
}

/// Validates, relays (or acknowledges in demo mode) and resets the form on success.
///
/// An invalid form never reaches the relay. On failure the form is left
/// untouched so the user can resubmit.
pub async fn submit<R: EmailRelay>(
    form: &mut ContactForm,
    relay: Option<&R>,
) -> Result<Delivery, ContactError> {
    form.validate().map_err(ContactError::Invalid)?;
    let delivery = match relay {
        Some(relay) => {
            relay.send(form).await.inspect_err(|e| {
                log::warn!("contact relay failed: {e}");
            })?;
            Delivery::Sent
        }
        None => {
            log::info!("email relay not configured, acknowledging in demo mode");
            Delivery::Demo
        }
    };
    form.clear();
    Ok(delivery)
}

#[cfg(feature = "hydrate")]
pub struct EmailJsRelay {
    config: RelayConfig,
}

#[cfg(feature = "hydrate")]
impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "hydrate")]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        use gloo_net::http::Request;

        let resp = Request::post(EMAILJS_ENDPOINT)
            .json(&self.config.payload(form))
            .map_err(|e| RelayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = StatusCode::from_u16(resp.status()).unwrap_or(StatusCode::BAD_GATEWAY);
        let body = resp.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status, body })
    }
}

/// Sends the form with whatever relay this build was configured with.
#[cfg(feature = "hydrate")]
pub async fn deliver(form: &mut ContactForm) -> Result<Delivery, ContactError> {
    let relay = RelayConfig::from_build_env().map(EmailJsRelay::new);
    submit(form, relay.as_ref()).await
}

#[cfg(not(feature = "hydrate"))]
pub async fn deliver(form: &mut ContactForm) -> Result<Delivery, ContactError> {
    submit(form, None::<&NoRelay>).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeRelay {
        calls: Cell<usize>,
        fail_with: Option<RelayError>,
        seen: RefCell<Vec<ContactForm>>,
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(form.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn jane() -> ContactForm {
        ContactForm::new("Jane", "jane@x.com", "hi")
    }

    #[test]
    fn test_validation_per_field() {
        assert_eq!(jane().validate(), Ok(()));

        let errs = ContactForm::new("  ", "jane@x.com", "hi")
            .validate()
            .unwrap_err();
        assert_eq!(errs.get(Field::Name), Some("Name is required"));
        assert_eq!(errs.get(Field::Email), None);

        let errs = ContactForm::new("Jane", "not-an-email", "hi")
            .validate()
            .unwrap_err();
        assert_eq!(errs.get(Field::Email), Some("Please enter a valid email address"));
        assert_eq!(errs.get(Field::Name), None);

        let errs = ContactForm::new("Jane", "", "\n").validate().unwrap_err();
        assert_eq!(errs.get(Field::Email), Some("Email is required"));
        assert_eq!(errs.get(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@sub.domain.org", " padded@x.io "] {
            assert!(ContactForm::new("n", ok, "m").validate().is_ok(), "{ok}");
        }
        for bad in ["a@b", "@b.com", "a b@c.com", "a@@b.com", "plain"] {
            assert!(ContactForm::new("n", bad, "m").validate().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_field_errors_clear() {
        let mut errs = ContactForm::default().validate().unwrap_err();
        assert!(!errs.is_empty());
        errs.clear(Field::Name);
        errs.clear(Field::Email);
        errs.clear(Field::Message);
        assert!(errs.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_relay() {
        let relay = FakeRelay::default();
        for mut form in [
            ContactForm::new("", "jane@x.com", "hi"),
            ContactForm::new("Jane", "not-an-email", "hi"),
            ContactForm::new("Jane", "jane@x.com", ""),
        ] {
            let original = form.clone();
            let res = submit(&mut form, Some(&relay)).await;
            assert!(matches!(res, Err(ContactError::Invalid(_))));
            assert_eq!(form, original);
        }
        assert_eq!(relay.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_demo_mode_acknowledges_and_resets() {
        let mut form = jane();
        let res = submit(&mut form, None::<&FakeRelay>).await;
        assert_eq!(res, Ok(Delivery::Demo));
        assert_eq!(form, ContactForm::new("", "", ""));
    }

    #[tokio::test]
    async fn test_configured_relay_sends_once() {
        let relay = FakeRelay::default();
        let mut form = jane();
        assert_eq!(submit(&mut form, Some(&relay)).await, Ok(Delivery::Sent));
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(relay.seen.borrow()[0], jane());
        assert_eq!(form, ContactForm::default());
    }

    #[tokio::test]
    async fn test_relay_failure_keeps_form() {
        let relay = FakeRelay {
            fail_with: Some(RelayError::Network("offline".to_string())),
            ..Default::default()
        };
        let mut form = jane();
        let res = submit(&mut form, Some(&relay)).await;
        assert_eq!(
            res,
            Err(ContactError::Relay(RelayError::Network("offline".to_string())))
        );
        assert_eq!(form, jane());
        assert_eq!(
            res.unwrap_err().to_string(),
            "Your message could not be sent. Please try again later."
        );
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_deliver_without_relay_is_demo() {
        let mut form = jane();
        assert_eq!(deliver(&mut form).await, Ok(Delivery::Demo));
    }

    #[test]
    fn test_relay_config_requires_all_parts() {
        assert!(RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key")).is_some());
        assert!(RelayConfig::from_parts(None, Some("tpl"), Some("key")).is_none());
        assert!(RelayConfig::from_parts(Some("svc"), Some(" "), Some("key")).is_none());
        assert!(RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("")).is_none());
    }

    #[test]
    fn test_payload_shape() {
        let config = RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key"))
            .expect("complete config");
        let form = ContactForm::new(" Jane ", "jane@x.com", "hi");
        let value = serde_json::to_value(config.payload(&form)).expect("payload serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "key",
                "template_params": {
                    "from_name": "Jane",
                    "from_email": "jane@x.com",
                    "reply_to": "jane@x.com",
                    "message": "hi"
                }
            })
        );
    }

    #[test]
    fn test_status_banner() {
        assert_eq!(FormStatus::Idle.banner(), None);
        assert!(FormStatus::Sending.is_sending());
        let (ok, msg) = FormStatus::Success(Delivery::Demo).banner().expect("banner");
        assert!(ok);
        assert!(msg.contains("Demo mode"));
        let (ok, _) = FormStatus::Failed("nope".into()).banner().expect("banner");
        assert!(!ok);
    }

    #[test]
    fn test_rejected_display() {
        let err = RelayError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: "The user ID is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "email relay rejected the message with 400 Bad Request: The user ID is invalid"
        );
    }
}
