//! Power-set enumeration.
//!
//! Two distinct enumerations live here and are easy to conflate:
//!
//! - [`generate_power_set`] enumerates every bit pattern of one element
//!   width, giving a [`Set`] of `2^n` elements.
//! - [`create_power_set`] enumerates every sub-collection of a set's
//!   members, treating each member as an opaque item, giving `2^m` sub-sets.
//!
//! Both count `k = 0 .. 2^n - 1` and decode `k` with
//! [`Element::from_number`], so position `k` of the output is always the
//! same pattern. Atom (or member) 0 is the most significant bit of `k`.
//!
//! # Cost
//!
//! Time and memory are O(2^n). No limit is imposed beyond overflow: the
//! count `2^n` must fit in `usize` (and `n` must not exceed
//! [`MAX_ATOMS`](crate::MAX_ATOMS)).
//!
//! # Examples
//!
//! ```
//! use atomset::generate_power_set;
//!
//! let ps = generate_power_set(2).unwrap();
//! assert_eq!(ps.to_bit_string(), "{00, 01, 10, 11}");
//! ```

use crate::element::{Element, MAX_ATOMS};
use crate::error::{Result, SetsError};
use crate::log::targets::POWERSET as LOG_POWERSET;
use crate::set::Set;

/// Power sets above `2^LARGE_POWER_SET_BITS` members are logged as a warning.
pub const LARGE_POWER_SET_BITS: usize = 20;

/// Number of subsets of an `n`-item universe, if representable.
fn power_set_len(n: usize) -> Result<usize> {
    u32::try_from(n)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(SetsError::WidthOverflow {
            size: n,
            max: usize::BITS as usize - 1,
        })
}

fn log_size(what: &str, n: usize, len: usize) {
    if n > LARGE_POWER_SET_BITS {
        log::warn!(target: LOG_POWERSET, "Enumerating {len} {what} ({n} bits)");
    } else {
        log::debug!(target: LOG_POWERSET, "Enumerating {len} {what} ({n} bits)");
    }
}

/// Every element of width `element_size`, in ascending numeric order.
///
/// Member `k` equals `Element::from_number(k, element_size)`; each bit
/// pattern appears exactly once.
///
/// # Errors
///
/// Returns [`SetsError::WidthOverflow`] if `element_size > MAX_ATOMS` or
/// `2^element_size` does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use atomset::{generate_power_set, Element};
///
/// let ps = generate_power_set(3).unwrap();
/// assert_eq!(ps.len(), 8);
/// assert_eq!(ps[5], Element::from_bits("101", 3).unwrap());
/// ```
pub fn generate_power_set(element_size: usize) -> Result<Set> {
    if element_size > MAX_ATOMS {
        return Err(SetsError::WidthOverflow {
            size: element_size,
            max: MAX_ATOMS,
        });
    }
    let len = power_set_len(element_size)?;
    log_size("elements", element_size, len);

    let mut powerset = Set::with_capacity(element_size, len);
    for k in 0..len {
        powerset.push(Element::from_number(k as u64, element_size)?)?;
    }
    Ok(powerset)
}

/// Every sub-collection of `set`'s members.
///
/// Sub-set `k` holds member `i` iff atom `i` of
/// `Element::from_number(k, set.len())` is set; members keep their order
/// and are cloned, never merged. Sub-sets share the input set's width.
/// For a set of singleton atoms, the union of sub-set `k` is
/// `generate_power_set(n)[k]`.
///
/// # Errors
///
/// Returns [`SetsError::WidthOverflow`] if `2^set.len()` does not fit in
/// `usize`.
///
/// # Examples
///
/// ```
/// use atomset::{create_power_set, Set};
///
/// let atoms = Set::atoms(2).unwrap();
/// let subsets = create_power_set(&atoms).unwrap();
///
/// let rendered: Vec<String> = subsets.iter().map(|s| s.to_bit_string()).collect();
/// assert_eq!(rendered, vec!["{}", "{01}", "{10}", "{10, 01}"]);
/// ```
pub fn create_power_set(set: &Set) -> Result<Vec<Set>> {
    let m = set.len();
    let len = power_set_len(m)?;
    log_size("sub-sets", m, len);

    let mut subsets = Vec::with_capacity(len);
    for k in 0..len {
        let selector = Element::from_number(k as u64, m)?;
        let mut subset = Set::with_capacity(set.size(), selector.card());
        for i in selector.atoms() {
            subset.push(set[i].clone())?;
        }
        subsets.push(subset);
    }
    Ok(subsets)
}
