//! Atomset - Finite-Set Algebra over Named Atoms
//!
//! Atomset represents subsets of a fixed universe of named "atoms" as
//! fixed-width bit vectors and provides the Boolean algebra over them: union,
//! intersection, complement, membership, subset and equality tests, plus
//! conversions between bit strings, integers and human-readable name lists.
//! It can also enumerate the full power set of a universe.
//!
//! # Architecture
//!
//! - **Element**: one subset, a bit vector of up to 64 atoms
//! - **Set**: an ordered collection of elements of one width
//! - **Power sets**: enumeration of all bit patterns or all sub-collections
//! - **ReferenceList**: the name ↔ atom-index dictionary, loaded from a file
//!
//! Data flows one way: a reference list feeds element construction and
//! rendering, elements compose into sets, sets feed power-set enumeration.
//!
//! # Examples
//!
//! ## Building Elements from Names
//!
//! ```
//! use atomset::{Element, ReferenceList};
//!
//! let rl = ReferenceList::from_names(["a", "b", "c"]).unwrap();
//! let ac = Element::from_names(&["a", "c"], &rl).unwrap();
//! let b = Element::from_names(&["b"], &rl).unwrap();
//!
//! assert_eq!(ac.to_bit_string(), "101");
//! assert_eq!(ac.to_name_string(&rl).unwrap(), "{a,c}");
//! assert_eq!(ac.opposite(), b);
//! assert!(ac.conjunction(&b).unwrap().is_empty());
//! ```
//!
//! ## Enumerating a Power Set
//!
//! ```
//! use atomset::{generate_power_set, Element};
//!
//! let ps = generate_power_set(3).unwrap();
//! assert_eq!(ps.len(), 8);
//! for (k, e) in ps.iter().enumerate() {
//!     assert_eq!(e.to_number(), k as u64);
//! }
//! assert!(Element::from_bits("011", 3).unwrap().is_member(&ps).unwrap());
//! ```
//!
//! # Ownership
//!
//! Elements own their storage and sets own their elements by value, so
//! dropping a set releases everything in it. A reference list is borrowed
//! read-only by the operations that use it.
//!
//! # Logs
//!
//! Loading and enumeration call the `log` facade under the targets listed in
//! [`crate::log::targets`]; enable them with any logger, e.g. `env_logger` and
//! `RUST_LOG=powerset=debug`.

// Module declarations
pub mod element;
pub mod error;
pub mod log;
pub mod powerset;
pub mod reference_list;
pub mod set;

// Re-exports for convenient access
pub use element::{Element, Word, BITS_PER_WORD, EMPTY_SET_LITERAL, MAX_ATOMS};
pub use error::{Result, SetsError};
pub use powerset::{create_power_set, generate_power_set};
pub use reference_list::{LoadOptions, ReferenceList, MAX_NAME_LEN};
pub use set::Set;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Atomset";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Atomset"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _e = Element::empty(8);
        let _s = Set::new(8);
        let _result: Result<()> = Ok(());
        assert_eq!(MAX_ATOMS, 64);
    }
}
