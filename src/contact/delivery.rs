use gloo_net::http::Request;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use super::form::ContactForm;
use crate::config::{self, EmailJsConfig};

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("email service answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can get a contact message to its recipient.
#[allow(async_fn_in_trait)]
pub trait DeliveryService {
    async fn deliver(&self, form: &ContactForm) -> Result<(), DeliveryError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

/// Hosted EmailJS relay; the page has no mail backend of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJs {
    config: EmailJsConfig,
}

impl EmailJs {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    fn body<'a>(&'a self, form: &'a ContactForm) -> SendRequest<'a> {
        SendRequest {
            service_id: self.config.service_id,
            template_id: self.config.template_id,
            user_id: self.config.public_key,
            template_params: form,
        }
    }
}

impl Default for EmailJs {
    fn default() -> Self {
        Self::new(config::emailjs())
    }
}

impl DeliveryService for EmailJs {
    async fn deliver(&self, form: &ContactForm) -> Result<(), DeliveryError> {
        debug!("Sending contact message via EmailJS service {}", self.config.service_id);

        let response = Request::post(config::EMAILJS_ENDPOINT)
            .json(&self.body(form))?
            .send()
            .await?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_emailjs_shape() {
        let emailjs = EmailJs::new(EmailJsConfig {
            service_id: "service_x",
            template_id: "template_y",
            public_key: "key_z",
        });
        let form = ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello".into(),
        };

        let body = serde_json::to_value(emailjs.body(&form)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "key_z",
                "template_params": {
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "message": "Hello"
                }
            })
        );
    }

    #[test]
    fn rejection_message_carries_status() {
        let err = DeliveryError::Rejected {
            status: 400,
            body: "The Public Key is invalid".into(),
        };
        assert_eq!(
            err.to_string(),
            "email service answered 400: The Public Key is invalid"
        );
    }
}
