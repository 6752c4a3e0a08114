//! Error types for the Lodestar library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LodestarError`] enum.
//!
//! Lookups and searches never fail: a missing token is `None` and a query
//! without matches is an empty result. Only indexing can be rejected.
//!
//! # Examples
//!
//! ```
//! use lodestar::error::{LodestarError, Result};
//!
//! fn check_tokens(id: u32, token_count: usize) -> Result<()> {
//!     if token_count == 0 {
//!         return Err(LodestarError::empty_token_set(&id));
//!     }
//!     Ok(())
//! }
//!
//! match check_tokens(7, 0) {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt::Debug;

use thiserror::Error;

/// The main error type for Lodestar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LodestarError {
    /// An item in a batch produced no tokens; the whole batch was rejected.
    #[error("No tokens generated for item: {item}")]
    EmptyTokenSet {
        /// Debug rendering of the offending item's identity.
        item: String,
    },
}

/// Result type alias for operations that may fail with LodestarError.
pub type Result<T> = std::result::Result<T, LodestarError>;

impl LodestarError {
    /// Create a new empty token set error for the item with the given identity.
    pub fn empty_token_set<I: Debug + ?Sized>(id: &I) -> Self {
        LodestarError::EmptyTokenSet {
            item: format!("{id:?}"),
        }
    }
}
