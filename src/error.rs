//! Error types for parsing and aggregating earthquake feeds.

/// Errors raised by the snapshot parser and the aggregators.
///
/// A null magnitude is valid data and never produces one of these.
#[derive(Debug, thiserror::Error)]
pub enum QuakeError {
    /// The snapshot bytes are not a JSON document.
    #[error("snapshot is not valid JSON: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// The document has no `features` array.
    #[error("snapshot has no `features` array")]
    MissingFeatures,

    /// A feature is missing a required field, or the field has the wrong shape.
    #[error("malformed record at index {index}: `{field}` {reason}")]
    MalformedRecord {
        /// Position of the feature in the collection.
        index: usize,
        /// Dotted path of the offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The maximum was requested over zero records.
    #[error("collection empty: no earthquakes to take a maximum over")]
    EmptyCollection,

    /// Every record in a non-empty collection has a null magnitude.
    #[error("no record in the collection has a magnitude")]
    NoMagnitude,
}
