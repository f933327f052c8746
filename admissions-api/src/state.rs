//! Shared application state for the API server.

use std::path::Path;
use std::sync::Arc;

use admissions::io::audit::AuditLog;

/// Shared state accessible from all request handlers.
///
/// The rule table is compiled into the core crate, so the only shared
/// resource is the audit sink; requests carry no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub audit: Arc<AuditLog>,
}

impl AppState {
    pub fn new(log_dir: &Path) -> Self {
        Self {
            audit: Arc::new(AuditLog::new(log_dir)),
        }
    }
}
