use thiserror::Error;

/// Failure modes of [`crate::Tree::add`].
///
/// `find` never fails; a non-match is represented by
/// [`crate::LookupResult::found`] returning `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The exact pattern already has a payload attached to it.
    #[error("duplicate route: {0}")]
    Duplicate(String),

    /// Two named parameters would occupy the same position on sibling
    /// edges (e.g. adding `/:foo` and then `/:bar` as peers).
    #[error("conflicting parameter names at the same position: :{existing} vs :{incoming}")]
    SharedKey { existing: String, incoming: String },
}
