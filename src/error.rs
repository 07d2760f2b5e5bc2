use thiserror::Error;

/// Errors that can occur when reading a persisted flow graph document.
#[derive(Error, Debug, Clone)]
pub enum GraphReadError {
    #[error("Failed to parse flow graph JSON: {0}")]
    JsonParse(String),

    #[error(
        "Flow graph document uses schema version {found}, but this build reads up to version {supported}"
    )]
    UnsupportedSchemaVersion { found: u32, supported: u32 },
}

/// Errors surfaced by the persistence collaborator. Every variant is handled
/// at the operation boundary and displayed inline next to the triggering
/// control; none is fatal to the editor.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Flow '{slug}' was not found")]
    FlowNotFound { slug: String },

    #[error("A flow with the slug '{slug}' already exists")]
    SlugTaken { slug: String },

    #[error("Flow '{slug}' is the default flow and cannot be deleted")]
    DefaultFlowProtected { slug: String },

    #[error(transparent)]
    Graph(#[from] GraphReadError),

    #[error("Persistence backend failure: {0}")]
    Backend(String),
}
