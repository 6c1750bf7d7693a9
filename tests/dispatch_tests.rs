//! Tests de integración del ciclo de dispatch de notificaciones
//!
//! Usan implementaciones en memoria de la fuente de datos y del mailer para
//! ejercitar la corrida completa sin base de datos ni red.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use fleet_maintenance::services::dispatch_service::{DispatchService, NotificationSource};
use fleet_maintenance::services::mail_service::MailSender;
use fleet_maintenance::services::notification_selector::OpenDeadline;
use fleet_maintenance::services::recipient_grouper::GuardianContact;
use fleet_maintenance::utils::errors::AppError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct InMemorySource {
    deadlines: Vec<OpenDeadline>,
    contacts: Vec<GuardianContact>,
    fail_deadlines: bool,
}

#[async_trait]
impl NotificationSource for InMemorySource {
    async fn open_dated_deadlines(&self) -> Result<Vec<OpenDeadline>, AppError> {
        if self.fail_deadlines {
            return Err(AppError::Internal("source unavailable".to_string()));
        }
        Ok(self.deadlines.clone())
    }

    async fn guardian_contacts(&self) -> Result<Vec<GuardianContact>, AppError> {
        Ok(self.contacts.clone())
    }
}

#[derive(Debug, Clone)]
struct SentEmail {
    to: String,
    subject: String,
    html: String,
}

/// Mailer en memoria que registra los envíos y falla para los destinatarios
/// listados en `failing`.
struct RecordingMailer {
    sent: Mutex<Vec<SentEmail>>,
    failing: Vec<String>,
}

impl RecordingMailer {
    fn new() -> Self {
        Self { sent: Mutex::new(Vec::new()), failing: Vec::new() }
    }

    fn failing_for(recipients: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: recipients.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        if self.failing.iter().any(|r| r == to) {
            return Err(AppError::Delivery {
                recipient: to.to_string(),
                message: "provider rejected the message".to_string(),
            });
        }
        self.sent.lock().await.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

fn open_deadline(asset_id: Uuid, asset_name: &str, title: &str, due: NaiveDate) -> OpenDeadline {
    OpenDeadline {
        deadline_id: Uuid::new_v4(),
        asset_id,
        asset_name: asset_name.to_string(),
        title: title.to_string(),
        due_date: due,
        notify_days_before: vec![30, 14, 7, 1],
    }
}

fn contact(asset_id: Uuid, email: &str, name: &str) -> GuardianContact {
    GuardianContact {
        asset_id,
        email: email.to_string(),
        name: name.to_string(),
        position: 1,
    }
}

fn service(source: InMemorySource, mailer: Arc<RecordingMailer>) -> DispatchService {
    DispatchService::new(Arc::new(source), mailer, "https://fleet.example.com".to_string())
}

#[tokio::test]
async fn test_deadline_at_lead_time_sends_urgent_email_to_guardian() {
    let asset_id = Uuid::new_v4();
    let today = date(2026, 3, 10);
    let source = InMemorySource {
        deadlines: vec![open_deadline(
            asset_id,
            "Truck-12",
            "Technical inspection",
            date(2026, 3, 17),
        )],
        contacts: vec![contact(asset_id, "a@x.com", "Anna")],
        fail_deadlines: false,
    };
    let mailer = Arc::new(RecordingMailer::new());
    let report = service(source, mailer.clone()).run(today).await.unwrap();

    assert_eq!(report.sent, 1);
    assert_eq!(report.total, 1);
    assert!(report.errors.is_empty());

    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@x.com");
    assert_eq!(
        sent[0].subject,
        "[Urgent] 1 deadline needs attention — Fleet Maintenance"
    );
    assert!(sent[0].html.contains("Truck-12"));
    assert!(sent[0].html.contains("Technical inspection"));
}

#[tokio::test]
async fn test_overdue_deadline_notified_without_lead_time_match() {
    let asset_id = Uuid::new_v4();
    let today = date(2026, 3, 10);
    let source = InMemorySource {
        deadlines: vec![open_deadline(asset_id, "Truck-12", "Insurance", date(2026, 3, 5))],
        contacts: vec![contact(asset_id, "a@x.com", "Anna")],
        fail_deadlines: false,
    };
    let mailer = Arc::new(RecordingMailer::new());
    let report = service(source, mailer.clone()).run(today).await.unwrap();

    assert_eq!(report.sent, 1);
    let sent = mailer.sent.lock().await;
    assert!(sent[0].subject.starts_with("[Urgent]"));
}

#[tokio::test]
async fn test_failed_recipient_does_not_abort_the_run() {
    let asset_a = Uuid::new_v4();
    let asset_b = Uuid::new_v4();
    let today = date(2026, 3, 10);
    let source = InMemorySource {
        deadlines: vec![
            open_deadline(asset_a, "Astra", "Inspection", date(2026, 3, 17)),
            open_deadline(asset_b, "Bobcat", "Service", date(2026, 3, 24)),
        ],
        contacts: vec![
            contact(asset_a, "a@x.com", "Anna"),
            contact(asset_b, "b@x.com", "Bruno"),
        ],
        fail_deadlines: false,
    };
    let mailer = Arc::new(RecordingMailer::failing_for(&["b@x.com"]));
    let report = service(source, mailer.clone()).run(today).await.unwrap();

    assert_eq!(report.sent, 1);
    assert_eq!(report.total, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].recipient, "b@x.com");
    assert!(report.errors[0].error.contains("provider rejected"));

    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@x.com");
}

#[tokio::test]
async fn test_no_matching_deadlines_is_a_zero_send_success() {
    let asset_id = Uuid::new_v4();
    let today = date(2026, 3, 10);
    // 12 días restantes: ningún lead time coincide
    let source = InMemorySource {
        deadlines: vec![open_deadline(asset_id, "Truck-12", "Insurance", date(2026, 3, 22))],
        contacts: vec![contact(asset_id, "a@x.com", "Anna")],
        fail_deadlines: false,
    };
    let mailer = Arc::new(RecordingMailer::new());
    let report = service(source, mailer.clone()).run(today).await.unwrap();

    assert_eq!(report.sent, 0);
    assert_eq!(report.total, 0);
    assert!(report.errors.is_empty());
    assert!(mailer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_asset_without_guardians_produces_no_email() {
    let asset_id = Uuid::new_v4();
    let today = date(2026, 3, 10);
    let source = InMemorySource {
        deadlines: vec![open_deadline(asset_id, "Truck-12", "Insurance", date(2026, 3, 17))],
        contacts: vec![],
        fail_deadlines: false,
    };
    let mailer = Arc::new(RecordingMailer::new());
    let report = service(source, mailer.clone()).run(today).await.unwrap();

    assert_eq!(report.sent, 0);
    assert_eq!(report.total, 0);
    assert!(mailer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_source_failure_aborts_the_run() {
    let source = InMemorySource {
        deadlines: vec![],
        contacts: vec![],
        fail_deadlines: true,
    };
    let mailer = Arc::new(RecordingMailer::new());
    let result = service(source, mailer.clone()).run(date(2026, 3, 10)).await;

    assert!(result.is_err());
    assert!(mailer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_multiple_deadlines_for_one_guardian_arrive_in_one_email() {
    let asset_a = Uuid::new_v4();
    let asset_b = Uuid::new_v4();
    let today = date(2026, 3, 10);
    let source = InMemorySource {
        deadlines: vec![
            open_deadline(asset_a, "Astra", "Inspection", date(2026, 3, 24)),
            open_deadline(asset_b, "Bobcat", "Service", date(2026, 4, 9)),
        ],
        contacts: vec![
            contact(asset_a, "a@x.com", "Anna"),
            contact(asset_b, "a@x.com", "Anna"),
        ],
        fail_deadlines: false,
    };
    let mailer = Arc::new(RecordingMailer::new());
    let report = service(source, mailer.clone()).run(today).await.unwrap();

    assert_eq!(report.sent, 1);
    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "2 upcoming deadlines — Fleet Maintenance");
    // Orden determinista: menor days_until primero
    let astra = sent[0].html.find("Astra").unwrap();
    let bobcat = sent[0].html.find("Bobcat").unwrap();
    assert!(astra < bobcat);
}
