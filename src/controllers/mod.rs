pub mod asset_controller;
pub mod audit_controller;
pub mod dashboard_controller;
pub mod deadline_controller;
pub mod guardian_controller;
pub mod notification_controller;
pub mod service_entry_controller;
