// Coordinators layer - Workflow orchestration
pub mod login_coordinator;

pub use login_coordinator::LoginCoordinator;
