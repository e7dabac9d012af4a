#[derive(Debug, thiserror::Error)]
pub enum OffersError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Offer '{offer_id}' references unknown provider '{provider_id}'")]
    MissingProvider {
        offer_id: String,
        provider_id: String,
    },

    #[error("Unknown country: {0}")]
    InvalidCountry(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl OffersError {
    /// Whether this error means "the requested thing does not exist"
    /// rather than a defect in the catalog or the environment.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OffersError::NotFound(_) | OffersError::InvalidCountry(_))
    }
}

pub type Result<T> = std::result::Result<T, OffersError>;
