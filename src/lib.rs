//! Order-preserving distinct-by-key filtering.
//!
//! Given a sequence and a function deriving a key from each element, keep
//! only the first element observed for each distinct key. Relative order of
//! the kept elements matches the input (first-occurrence-wins, stable).

pub mod distinct;
pub mod errors;

pub use distinct::*;
pub use errors::*;
