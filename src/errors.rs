use thiserror::Error;

/// Key derivation failed for one element; the whole pass is abandoned and no
/// partial output is returned.
#[derive(Debug, Error)]
#[error("key derivation failed for element at index {index}")]
pub struct KeyError<E> {
    /// Position (input order) of the element whose key could not be derived.
    pub index: usize,
    #[source]
    pub source: E,
}
