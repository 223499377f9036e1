use chrono::NaiveDate;
use talent_core::dashboard::HubContext;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub ctx: HubContext,
    /// Fixed "today" for date-range filtering; `None` uses the local clock.
    pub today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(ctx: HubContext) -> Self {
        Self { ctx, today: None }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
