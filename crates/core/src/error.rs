use crate::types::ProjectId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: ProjectId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
