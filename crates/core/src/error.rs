//! Shape errors raised at the slice/buffer boundary.
//!
//! Numeric degeneracies (zero-length normalization, division by zero,
//! angles involving the zero vector) are never errors: they follow fixed
//! IEEE-754 conventions documented on each operation. The only failures
//! are sequences too short to hold a vector.

use thiserror::Error;

/// Minimum number of components a sequence must carry to describe a vector.
pub const MIN_COMPONENTS: usize = 2;

/// Errors produced when converting between vectors and float sequences.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A source slice had fewer than [`MIN_COMPONENTS`] elements.
    #[error("source slice has {len} component(s), at least {MIN_COMPONENTS} required")]
    SourceTooShort { len: usize },
    /// An export buffer had fewer than [`MIN_COMPONENTS`] slots.
    #[error("export buffer has {len} slot(s), at least {MIN_COMPONENTS} required")]
    BufferTooShort { len: usize },
}

/// Result alias for the fallible vector conversions.
pub type Result<T> = std::result::Result<T, VectorError>;
