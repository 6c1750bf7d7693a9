//! Plantilla de email de notificación
//!
//! Render del cuerpo HTML para el batch de un destinatario: tabla simple
//! con activo, vencimiento, fecha y estado, coloreado por urgencia.

use crate::services::recipient_grouper::{NotificationItem, RecipientBatch};
use crate::services::urgency;

fn status_color(days_until: i64) -> &'static str {
    if days_until <= 7 {
        "#dc2626"
    } else if days_until <= 30 {
        "#d97706"
    } else {
        "#059669"
    }
}

fn render_row(item: &NotificationItem) -> String {
    format!(
        r#"
    <tr>
      <td style="padding:8px 12px;border-bottom:1px solid #e2e8f0;font-size:14px">{}</td>
      <td style="padding:8px 12px;border-bottom:1px solid #e2e8f0;font-size:14px">{}</td>
      <td style="padding:8px 12px;border-bottom:1px solid #e2e8f0;font-size:14px">{}</td>
      <td style="padding:8px 12px;border-bottom:1px solid #e2e8f0;font-size:14px;font-weight:600;color:{}">{}</td>
    </tr>"#,
        item.asset_name,
        item.deadline_title,
        item.due_date.format("%Y-%m-%d"),
        status_color(item.days_until),
        urgency::days_label(item.days_until),
    )
}

/// Render del cuerpo HTML completo para un destinatario
pub fn render_batch_html(batch: &RecipientBatch, app_url: &str) -> String {
    let rows: String = batch.items.iter().map(render_row).collect();

    format!(
        r#"
  <div style="font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;max-width:600px;margin:0 auto">
    <div style="background:#991b1b;padding:16px 24px;border-radius:12px 12px 0 0">
      <h1 style="color:#fff;font-size:18px;margin:0">Fleet Maintenance — Notification</h1>
    </div>
    <div style="background:#fff;padding:24px;border:1px solid #e2e8f0;border-top:none;border-radius:0 0 12px 12px">
      <p style="color:#475569;font-size:14px;margin:0 0 16px">Upcoming deadlines that need your attention:</p>
      <table style="width:100%;border-collapse:collapse">
        <thead>
          <tr style="background:#f8fafc">
            <th style="padding:8px 12px;text-align:left;font-size:12px;color:#64748b;border-bottom:2px solid #e2e8f0">Asset</th>
            <th style="padding:8px 12px;text-align:left;font-size:12px;color:#64748b;border-bottom:2px solid #e2e8f0">Deadline</th>
            <th style="padding:8px 12px;text-align:left;font-size:12px;color:#64748b;border-bottom:2px solid #e2e8f0">Due date</th>
            <th style="padding:8px 12px;text-align:left;font-size:12px;color:#64748b;border-bottom:2px solid #e2e8f0">Status</th>
          </tr>
        </thead>
        <tbody>{}</tbody>
      </table>
      <p style="color:#94a3b8;font-size:12px;margin:24px 0 0;text-align:center">
        <a href="{}" style="color:#d97706">Open the app</a>
      </p>
    </div>
  </div>"#,
        rows, app_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_batch_html_contains_items() {
        let batch = RecipientBatch {
            email: "a@x.com".to_string(),
            name: "Anna".to_string(),
            items: vec![
                NotificationItem {
                    asset_name: "Truck-12".to_string(),
                    deadline_title: "Insurance renewal".to_string(),
                    due_date: NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
                    days_until: 7,
                },
                NotificationItem {
                    asset_name: "Crane".to_string(),
                    deadline_title: "Inspection".to_string(),
                    due_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
                    days_until: -5,
                },
            ],
        };

        let html = render_batch_html(&batch, "https://fleet.example.com");
        assert!(html.contains("Truck-12"));
        assert!(html.contains("Insurance renewal"));
        assert!(html.contains("in 7 days"));
        assert!(html.contains("5 days past due"));
        assert!(html.contains("https://fleet.example.com"));
        // Urgencia: <=7 días en rojo
        assert!(html.contains("#dc2626"));
    }
}
