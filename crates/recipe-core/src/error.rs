use thiserror::Error;

/// Errors raised by the in-memory stores.
///
/// None of these leave a store partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Lookup outside `0..len`.
    #[error("recipe index {index} is out of range (store holds {len} recipes)")]
    IndexOutOfRange { index: i64, len: usize },

    /// A favorite was requested for an index that names no stored recipe.
    #[error("invalid recipe reference {index} (store holds {len} recipes)")]
    InvalidRecipeReference { index: i64, len: usize },

    /// A preference key holds a value of the wrong shape.
    #[error("preference `{key}` does not hold a recipe list")]
    PreferenceTypeMismatch { key: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
