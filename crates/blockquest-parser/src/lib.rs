//! BlockQuest parser: folds a flat block list into a structured tree.
//!
//! Structuring never fails. Unmatched closing and branch markers are
//! skipped, and an open marker without its closer takes the rest of the
//! list as its body.

mod structure;

pub use structure::{structure, Structurer};
