use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the individual stages of a run.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required settings are absent
    #[error("missing required configuration: {} must be set", .missing.join(", "))]
    Config { missing: Vec<&'static str> },

    /// The storage connection string names a backend we cannot open
    #[error("unsupported storage connection string `{0}`")]
    UnsupportedStorage(String),

    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("error fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("error reading the response body: {source}")]
    Read {
        #[source]
        source: ureq::Error,
    },

    #[error("could not parse usage percentage: {0}")]
    Parse(String),

    /// Delivery failed; `status` is set when the API answered with a non-success code
    #[error("failed to send message: {message}")]
    Notify { status: Option<u16>, message: String },
}

impl Error {
    /// True for every storage-class failure (connection string, open, schema, write).
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage { .. } | Error::UnsupportedStorage(_))
    }
}

/// Attach a human-readable context to storage driver results.
pub(crate) trait StorageContext<T> {
    fn storage_context(self, context: &str) -> Result<T>;
}

impl<T, E> StorageContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn storage_context(self, context: &str) -> Result<T> {
        self.map_err(|source| Error::Storage {
            context: context.to_string(),
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_lists_every_missing_variable() {
        let err = Error::Config {
            missing: vec!["DATABASE_URL", "TELEGRAM_CHAT_ID"],
        };
        assert_eq!(
            err.to_string(),
            "missing required configuration: DATABASE_URL, TELEGRAM_CHAT_ID must be set"
        );
    }

    #[test]
    fn storage_classification() {
        assert!(Error::UnsupportedStorage("mysql://x".into()).is_storage());
        assert!(!Error::Parse("x".into()).is_storage());
    }
}
