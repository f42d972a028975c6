use gotypes_catalog::Catalog;

/// Application state shared across all routes.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The process-wide catalog. Read-only.
    pub catalog: &'static Catalog,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: gotypes_catalog::catalog(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
