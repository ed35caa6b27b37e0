//! Error types for machine-code layer operations.

/// Errors raised while building sections or symbols.
#[derive(Debug, thiserror::Error)]
pub enum McError {
    /// An ELF section was requested again with different attributes.
    #[error("section '{name}' already exists with different attributes: {detail}")]
    SectionConflict {
        /// The section name.
        name: String,
        /// Which attribute disagreed.
        detail: String,
    },

    /// A symbol name was empty.
    #[error("symbol names must not be empty")]
    EmptySymbolName,
}

/// Result type for machine-code layer operations.
pub type Result<T> = std::result::Result<T, McError>;
