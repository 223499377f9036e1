use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("not initialized: run 'hub init'")]
    NotInitialized,

    #[error("interview funnel must have exactly {expected} stages, got {actual}")]
    InvalidFunnelLength { expected: usize, actual: usize },

    #[error("{entity} '{id}' is missing required field '{field}'")]
    MissingRequiredField {
        entity: String,
        id: String,
        field: String,
    },

    #[error("service line '{code}': billed + bench + enablement = {sum} exceeds total {total}")]
    InconsistentTotals { code: String, total: u32, sum: u32 },

    #[error("invalid service line code '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidCode(String),

    #[error("duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    #[error("service line not found: {0}")]
    UnknownServiceLine(String),

    #[error("invalid date range '{0}': expected 30 or 90")]
    InvalidDateRange(String),

    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HubError>;
