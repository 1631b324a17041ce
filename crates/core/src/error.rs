use crate::types::DbId;

/// Domain-level failures shared by the repository and HTTP layers.
///
/// Callers branch on the variant, never on the rendered message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Post",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Post with id 7");
    }

    #[test]
    fn validation_carries_message() {
        let err = CoreError::Validation("id must be an integer".into());
        assert_eq!(err.to_string(), "Validation failed: id must be an integer");
    }
}
