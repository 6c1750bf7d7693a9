//! Driver de dispatch de notificaciones
//!
//! Orquestación de una corrida: leer los vencimientos pendientes, agrupar
//! por destinatario, renderizar y enviar, y reportar el resultado agregado.
//!
//! La corrida es stateless: cada invocación reconstruye "a quién notificar
//! ahora" desde los datos actuales. No hay memoria entre corridas, así que
//! un vencimiento ya vencido se vuelve a notificar en cada corrida mientras
//! siga vencido; el match exacto de lead time mitiga el resto de los
//! repetidos. Comportamiento esperado, no un bug.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{error, info};

use crate::services::email_template;
use crate::services::mail_service::MailSender;
use crate::services::notification_selector::{self, OpenDeadline};
use crate::services::recipient_grouper::{self, GuardianContact};
use crate::utils::errors::AppError;

/// Fuente de datos de la corrida. Si cualquiera de las dos lecturas falla,
/// la corrida entera aborta sin enviar nada parcial.
#[async_trait]
pub trait NotificationSource: Send + Sync {
    /// Vencimientos no completados con fecha, resueltos a su activo
    async fn open_dated_deadlines(&self) -> Result<Vec<OpenDeadline>, AppError>;

    /// Contactos de guardianes con email habilitado, para todos los activos
    async fn guardian_contacts(&self) -> Result<Vec<GuardianContact>, AppError>;
}

/// Falla de entrega para un destinatario puntual
#[derive(Debug, Clone, Serialize)]
pub struct DispatchFailure {
    pub recipient: String,
    pub error: String,
}

/// Resumen de una corrida de dispatch
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    /// Envíos exitosos
    pub sent: usize,
    /// Destinatarios intentados en total
    pub total: usize,
    /// Fallas por destinatario (nunca abortan la corrida)
    pub errors: Vec<DispatchFailure>,
}

pub struct DispatchService {
    source: Arc<dyn NotificationSource>,
    mailer: Arc<dyn MailSender>,
    app_url: String,
}

impl DispatchService {
    pub fn new(source: Arc<dyn NotificationSource>, mailer: Arc<dyn MailSender>, app_url: String) -> Self {
        Self { source, mailer, app_url }
    }

    /// Ejecutar una corrida de dispatch para `today`.
    ///
    /// La falla del fetch inicial es fatal y se propaga; un conjunto vacío
    /// es un éxito con cero envíos; las fallas de envío por destinatario se
    /// acumulan en el reporte y no frenan al resto.
    pub async fn run(&self, today: NaiveDate) -> Result<DispatchReport, AppError> {
        let deadlines = self.source.open_dated_deadlines().await?;
        let selected = notification_selector::select_pending(deadlines, today);

        if selected.is_empty() {
            info!("✅ Dispatch run: no notifications to send today");
            return Ok(DispatchReport { sent: 0, total: 0, errors: Vec::new() });
        }

        let contacts = self.source.guardian_contacts().await?;
        let batches = recipient_grouper::group_by_recipient(&selected, &contacts);

        let total = batches.len();
        let mut sent = 0;
        let mut errors = Vec::new();

        for batch in &batches {
            let subject = recipient_grouper::subject_for(batch);
            let html = email_template::render_batch_html(batch, &self.app_url);

            match self.mailer.send_email(&batch.email, &subject, &html).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    error!("❌ Delivery to {} failed: {}", batch.email, e);
                    errors.push(DispatchFailure {
                        recipient: batch.email.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!("📬 Dispatch run finished: {}/{} sent, {} errors", sent, total, errors.len());
        Ok(DispatchReport { sent, total, errors })
    }
}
