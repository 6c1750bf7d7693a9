//! Servicio de envío de email
//!
//! Cliente HTTP para la API de Resend detrás del trait `MailSender`, de modo
//! que el dispatch se pueda testear sin red. Un intento de envío por
//! destinatario por corrida; los timeouts y reintentos quedan del lado del
//! proveedor externo.

use async_trait::async_trait;
use serde_json::json;

use crate::utils::errors::AppError;

/// Contrato de envío: un email a un destinatario
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError>;
}

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Cliente de la API de Resend
pub struct ResendMailer {
    api_key: String,
    from: String,
    client: reqwest::Client,
}

impl ResendMailer {
    pub fn new(api_key: String, from: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, from, client }
    }
}

#[async_trait]
impl MailSender for ResendMailer {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        log::info!("📧 Sending notification email to: {}", to);

        let response = self
            .client
            .post(RESEND_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "from": self.from,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await
            .map_err(|e| AppError::Delivery {
                recipient: to.to_string(),
                message: format!("Request failed: {}", e),
            })?;

        let status = response.status();
        log::info!("📡 Resend response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Mail delivery to {} failed with status {}: {}", to, status, error_text);
            return Err(AppError::Delivery {
                recipient: to.to_string(),
                message: format!("Resend returned {}: {}", status, error_text),
            });
        }

        Ok(())
    }
}
