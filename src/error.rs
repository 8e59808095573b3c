//! Error types for the Atomset library.
//!
//! This module provides a unified error type for all fallible operations,
//! using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for Atomset operations.
///
/// Parsing and conversion failures are always returned to the caller.
/// Width mismatches between operands are reported through
/// [`SetsError::SizeMismatch`] by the named element methods; the operator
/// impls (`&`, `|`, `^`) panic instead.
#[derive(Error, Debug)]
pub enum SetsError {
    /// A bit string contained something other than `'0'` or `'1'`
    #[error("Invalid bit string: character {found:?} at position {position}")]
    InvalidBitString {
        /// Offending character position
        position: usize,
        /// Offending character
        found: char,
    },

    /// A bit string did not have the expected number of characters
    #[error("Invalid bit string length: expected {expected}, got {actual}")]
    BitStringLength {
        /// Expected length
        expected: usize,
        /// Actual length received
        actual: usize,
    },

    /// An atom name in a reference list was empty
    #[error("Empty atom name at line {line}")]
    EmptyAtomName {
        /// 1-based line (or entry) number
        line: usize,
    },

    /// An atom name appeared twice in a reference list
    #[error("Duplicate atom name {name:?} at line {line}")]
    DuplicateAtom {
        /// The repeated name
        name: String,
        /// 1-based line (or entry) number of the repetition
        line: usize,
    },

    /// An atom name exceeded the configured maximum length
    #[error("Atom name at line {line} is {len} bytes long (max {max})")]
    AtomNameTooLong {
        /// 1-based line (or entry) number
        line: usize,
        /// Length of the name
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// A name was not found in the reference list
    #[error("Unknown atom: {0:?}")]
    UnknownAtom(String),

    /// Operands of a binary operation have different widths
    #[error("Size mismatch: {left} bits vs {right} bits")]
    SizeMismatch {
        /// Width of the left operand (or container)
        left: usize,
        /// Width of the right operand
        right: usize,
    },

    /// Requested width exceeds what can be represented
    #[error("Width {size} exceeds the maximum of {max}")]
    WidthOverflow {
        /// Requested width
        size: usize,
        /// Supported maximum
        max: usize,
    },

    /// An integer has more significant bits than the element width
    #[error("Value {value} does not fit in {size} bits")]
    ValueOutOfRange {
        /// The value to convert
        value: u64,
        /// The element width
        size: usize,
    },

    /// Atom index out of bounds
    #[error("Atom index out of bounds: index {index}, size {size}")]
    AtomOutOfBounds {
        /// The index that was accessed
        index: usize,
        /// The element width
        size: usize,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON serialization error occurred
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Atomset operations.
pub type Result<T> = std::result::Result<T, SetsError>;
