use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The event has no resolvable theme template. The public page renders
    /// a theme-not-assigned state for this; it is terminal, not retried.
    #[error("No theme template is assigned to this event")]
    MissingTheme,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A positional list operation addressed an index that does not exist.
    /// This is a caller error: updates and deletes never silently append.
    #[error("Index {index} out of range for {list} (len {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },
}
