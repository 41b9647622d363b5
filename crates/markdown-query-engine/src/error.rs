use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Selector {selector} cannot be compiled into a pattern: {source}")]
    InvalidSelector {
        selector: String,
        source: regex::Error,
    },
}
