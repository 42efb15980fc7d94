use thiserror::Error;

/// Failures surfaced by the decision core.
///
/// None of these abort a tick: the system skips the affected agent and keeps
/// going. They exist so callers and logs can say *why* an agent sat out.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AiError {
    #[error("agent {agent} is missing its {component} component")]
    MissingComponent { agent: u64, component: &'static str },

    #[error("no player entity in the world")]
    NoPlayer,

    #[error("invalid behavior tree: {0}")]
    InvalidTree(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type AiResult<T> = Result<T, AiError>;
