use std::sync::Arc;

use crate::application::services::SubmitService;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub submit_service: Arc<SubmitService>,
    pub form_page: Option<Arc<FormPage>>,
}

/// Values rendered into the HTML form page.
#[derive(Debug, Clone)]
pub struct FormPage {
    pub site_key: String,
    pub script_url: String,
    /// Base URL the page posts to; empty means same origin.
    pub backend_url: String,
}

impl AppState {
    pub fn new(submit_service: Arc<SubmitService>) -> Self {
        Self {
            submit_service,
            form_page: None,
        }
    }

    pub fn with_form_page(mut self, form_page: FormPage) -> Self {
        self.form_page = Some(Arc::new(form_page));
        self
    }
}
