//! Module specification types and loading.

mod load;
mod types;

pub use load::*;
pub use types::*;
