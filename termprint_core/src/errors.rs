use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("given severity name not found: {name}")]
    InvalidSeverity { name: String },

    #[error("failed to parse embedded rules YAML: {source}")]
    PatternLoad {
        #[from]
        source: serde_yaml::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
