/// Result alias that carries the custom [`ArudError`] type.
pub type Result<T> = std::result::Result<T, ArudError>;

/// Common error type for the core crate.
///
/// Pattern resolution itself never fails; these variants cover lookups by
/// identifier and reading datasets or configuration from disk.
#[derive(Debug, thiserror::Error)]
pub enum ArudError {
    /// Free-form message for conditions without a dedicated variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A dataset or configuration file could not be (de)serialised.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// No circle matches the requested slug or order number.
    #[error("unknown circle `{0}`")]
    UnknownCircle(String),
    /// No meter in the catalog carries the requested id.
    #[error("unknown meter `{0}`")]
    UnknownMeter(String),
}

impl ArudError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for ArudError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for ArudError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
