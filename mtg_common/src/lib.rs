//! Shared MTG types used by the order export and set sync tools.
//!
//! - [`cardmarket`]: Cardmarket condition and language enumerations
//! - [`set_mapping`]: the ordered set name → set code table
//! - [`error`]: the shared error type

pub mod cardmarket;
pub mod error;
pub mod set_mapping;

pub use cardmarket::{Condition, Language};
pub use error::{MtgError, Result};
pub use set_mapping::SetMappingTable;
