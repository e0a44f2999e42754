use thiserror::Error;

/// Errors surfaced by the catalog and its tooling.
///
/// Scene construction has no error channel; everything here comes from
/// looking things up by name, reading configuration or talking to the GPU.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown scene: {0:?}")]
    UnknownScene(String),

    #[error("duplicate scene name: {0:?}")]
    DuplicateScene(String),

    #[error("scene at index {0} has an empty name")]
    EmptyName(usize),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("gpu: {0}")]
    Gpu(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
