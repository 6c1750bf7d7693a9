pub mod asset_repository;
pub mod audit_repository;
pub mod deadline_repository;
pub mod guardian_repository;
pub mod notification_repository;
pub mod service_entry_repository;
