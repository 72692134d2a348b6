//! Shared foundation for the numkit numeric kernels
//!
//! Every kernel crate reports failures through the single [`Error`] type
//! defined here, so callers match on one taxonomy regardless of which
//! kernel produced the failure.

pub mod error;

pub use error::{Error, Result};
