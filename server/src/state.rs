use std::sync::Arc;

use scraper::JobScraper;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<dyn JobScraper>,
}

impl AppState {
    pub fn new(scraper: Arc<dyn JobScraper>) -> Self {
        Self { scraper }
    }
}
