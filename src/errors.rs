use crate::models::PlaceKind;

/// A source record is missing a field the normalizer requires.
///
/// Non-fatal: the recommended policy is to drop the record, log it, and keep
/// going with the rest of the document.
#[derive(Debug, thiserror::Error)]
pub enum MalformedSourceError {
    /// A required field is absent from a record.
    #[error("{kind} record {index}: missing required field '{field}'")]
    MissingField {
        kind: PlaceKind,
        index: usize,
        field: &'static str,
    },
}

/// Fetching or decoding a source document failed.
///
/// Fatal to ingestion: the session ends with an empty collection and the
/// error is returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SourceFetchError {
    /// HTTP request failed.
    #[error("request for '{resource}' failed: {source}")]
    Http {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("'{resource}' returned status {status}")]
    Status {
        resource: String,
        status: reqwest::StatusCode,
    },

    /// The document was fetched but does not match the expected shape.
    #[error("'{resource}' is not a valid source document: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collaborator-supplied fetcher failed in its own way.
    #[error("fetching '{resource}' failed: {source}")]
    Fetch {
        resource: String,
        #[source]
        source: anyhow::Error,
    },
}
