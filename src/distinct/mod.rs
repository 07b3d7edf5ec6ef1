pub mod fallible;
pub mod filter;
pub mod iter;
pub mod order;

pub use fallible::*;
pub use filter::*;
pub use iter::*;
pub use order::*;
