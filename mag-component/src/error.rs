use magdom::{DomError, NodeId};
use thiserror::Error;

/// Component error type.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("tree error: {0}")]
    Dom(#[from] DomError),
    #[error("{module}: wrong config.{field} type, expected {expected}")]
    InvalidConfig {
        module: &'static str,
        field: &'static str,
        expected: &'static str,
    },
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("{0} is not a row of this list")]
    MissingRow(NodeId),
}
