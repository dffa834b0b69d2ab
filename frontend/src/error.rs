use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("no document is attached to the window")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown contact field `{0}`")]
    UnknownField(String),
}

impl SiteError {
    pub fn dom(context: impl Into<String>) -> Self {
        SiteError::Dom(context.into())
    }
}
