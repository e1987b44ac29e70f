use thiserror::Error;

/// Station name checks for create/rename forms; reported inline next to the
/// name input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("station name is required")]
    EmptyName,
    #[error("a station named '{name}' already exists")]
    DuplicateName { name: String },
}
