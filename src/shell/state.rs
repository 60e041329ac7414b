use std::sync::Arc;

use crate::modules::employees::core::ports::EmployeeStore;

/// One shared store per process, behind the port so the handlers never see
/// the concrete table.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}
