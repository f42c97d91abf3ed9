//! Store-specific error types.

/// Errors raised by reducers.
///
/// These are programming errors, never user-facing API failures: the
/// offending action is rejected and the store keeps its previous state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A list mutation was dispatched before the lists were loaded
    #[error("User lists not yet loaded (action: {action})")]
    ListsNotLoaded { action: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::ListsNotLoaded { action: "AddList" };
        assert!(error.to_string().contains("not yet loaded"));
        assert!(error.to_string().contains("AddList"));
    }
}
