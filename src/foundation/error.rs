/// Convenience result type used across Ledmap.
pub type LedmapResult<T> = Result<T, LedmapError>;

/// Top-level error taxonomy used by registry APIs.
///
/// The codec and the selection/merge engines have no failure modes at all:
/// malformed program text decodes to a partial (possibly empty) table, and an
/// empty selection merges to an unchanged table. Every variant here is
/// recoverable and intended to be surfaced to the operator as a validation
/// message; no state is mutated when one is returned.
#[derive(thiserror::Error, Debug)]
pub enum LedmapError {
    /// Proposed animation name is empty or not a valid identifier.
    #[error("invalid name '{0}' - valid characters [A-Za-z0-9_], must not start with a number")]
    InvalidName(String),

    /// An animation already exists with the proposed name.
    #[error("an animation already exists with the name '{0}'")]
    DuplicateName(String),

    /// The named animation is not present in the registry.
    #[error("no animation named '{0}'")]
    UnknownAnimation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LedmapError {
    /// Build a [`LedmapError::InvalidName`] value.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Build a [`LedmapError::DuplicateName`] value.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    /// Build a [`LedmapError::UnknownAnimation`] value.
    pub fn unknown_animation(name: impl Into<String>) -> Self {
        Self::UnknownAnimation(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_name_the_offender() {
        let e = LedmapError::invalid_name("3bad");
        assert!(e.to_string().contains("'3bad'"));

        let e = LedmapError::duplicate_name("rainbow");
        assert!(e.to_string().contains("'rainbow'"));
    }
}
