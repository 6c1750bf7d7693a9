pub mod asset_dto;
pub mod audit_dto;
pub mod common;
pub mod dashboard_dto;
pub mod deadline_dto;
pub mod guardian_dto;
pub mod notification_dto;
pub mod service_entry_dto;
