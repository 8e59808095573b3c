//! Element - a subset of the atom universe stored as a fixed-width bit vector.
//!
//! This module provides the primitive of the library: an [`Element`] is a
//! bit vector of `size` bits where bit `i` is set iff atom `i` is a member.
//!
//! # Design
//!
//! - Uses `BitVec<u64, Msb0>` for storage, so one word holds the whole element
//! - Width is capped at [`MAX_ATOMS`] (64); the element never spans two words
//! - Atom `i` lives at word bit `63 - i`, which makes the live bits the top
//!   `size` bits of the word and the padding bits the low ones
//! - Padding bits are kept at zero so word-level equality is exact
//!
//! # Bit Order
//!
//! Character `i` of a bit string is atom `i`. Integer conversion reads the
//! bit string most-significant-bit first: atom 0 is worth `2^(size-1)` and
//! atom `size - 1` is worth 1.
//!
//! # Width Checking
//!
//! Every element carries its width. The named binary methods
//! ([`Element::conjunction`], [`Element::is_subset`], ...) return
//! [`SetsError::SizeMismatch`] when widths differ, while the operator impls
//! (`&`, `|`, `^`) panic, like an out-of-bounds index would.
//!
//! # Examples
//!
//! ```
//! use atomset::Element;
//!
//! let a = Element::from_bits("110", 3).unwrap();
//! let b = Element::from_bits("011", 3).unwrap();
//!
//! assert_eq!(a.conjunction(&b).unwrap().to_bit_string(), "010");
//! assert_eq!(a.disjunction(&b).unwrap().to_bit_string(), "111");
//! assert_eq!(a.opposite().to_bit_string(), "001");
//! assert_eq!(a.to_number(), 6);
//! ```

use crate::error::{Result, SetsError};
use crate::reference_list::ReferenceList;
use crate::set::Set;
use bitvec::prelude::*;
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

/// Word type for bit storage (64-bit unsigned integer)
pub type Word = u64;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 64;

/// Largest supported atom universe
pub const MAX_ATOMS: usize = BITS_PER_WORD;

/// Rendering of an element with no atoms
pub const EMPTY_SET_LITERAL: &str = "{}";

/// Mask of the live bits for an element of width `size` (top `size` bits).
#[inline(always)]
const fn live_mask(size: usize) -> Word {
    if size == 0 {
        0
    } else {
        Word::MAX << (BITS_PER_WORD - size)
    }
}

#[inline]
fn check_width(size: usize) -> Result<()> {
    if size > MAX_ATOMS {
        return Err(SetsError::WidthOverflow {
            size,
            max: MAX_ATOMS,
        });
    }
    Ok(())
}

/// A subset of an atom universe of fixed width.
///
/// Elements own their storage and are compared by value: two elements are
/// equal iff they have the same width and the same bits.
///
/// Serializes as its bit string and is parsed again on deserialization, so a
/// payload can never carry padding bits or a width above [`MAX_ATOMS`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Element {
    /// Underlying bitvec storage with u64 words, MSB0 ordering
    bv: BitVec<Word, Msb0>,
}

impl Element {
    /// Create the empty element (no atoms) of the given width.
    ///
    /// The empty element is the identity for union and absorbing for
    /// intersection.
    ///
    /// # Panics
    ///
    /// Panics if `size > MAX_ATOMS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomset::Element;
    ///
    /// let e = Element::empty(4);
    /// assert_eq!(e.size(), 4);
    /// assert!(e.is_empty());
    /// assert_eq!(e.to_bit_string(), "0000");
    /// ```
    #[inline]
    pub fn empty(size: usize) -> Self {
        assert!(
            size <= MAX_ATOMS,
            "element width {} exceeds maximum {}",
            size,
            MAX_ATOMS
        );
        Self {
            bv: BitVec::repeat(false, size),
        }
    }

    /// Create the element holding every atom of the given width.
    ///
    /// # Panics
    ///
    /// Panics if `size > MAX_ATOMS`.
    pub fn full(size: usize) -> Self {
        Self::from_word(Word::MAX, size)
    }

    /// Create the element holding only `atom`.
    pub fn singleton(atom: usize, size: usize) -> Result<Self> {
        check_width(size)?;
        let mut e = Self::empty(size);
        e.insert(atom)?;
        Ok(e)
    }

    /// Create an element from a list of atom indices.
    ///
    /// Repeated indices are allowed.
    pub fn from_atoms(atoms: &[usize], size: usize) -> Result<Self> {
        check_width(size)?;
        let mut e = Self::empty(size);
        for &atom in atoms {
            e.insert(atom)?;
        }
        Ok(e)
    }

    /// Parse a bit string of exactly `size` characters.
    ///
    /// Character `i` sets atom `i` when it is `'1'`.
    ///
    /// # Errors
    ///
    /// - [`SetsError::BitStringLength`] if the string does not have `size` characters
    /// - [`SetsError::InvalidBitString`] on any character other than `'0'`/`'1'`
    /// - [`SetsError::WidthOverflow`] if `size > MAX_ATOMS`
    ///
    /// # Examples
    ///
    /// ```
    /// use atomset::Element;
    ///
    /// let e = Element::from_bits("101", 3).unwrap();
    /// assert_eq!(e.atoms(), vec![0, 2]);
    /// assert!(Element::from_bits("10", 3).is_err());
    /// assert!(Element::from_bits("1x1", 3).is_err());
    /// ```
    pub fn from_bits(bits: &str, size: usize) -> Result<Self> {
        check_width(size)?;
        let actual = bits.chars().count();
        if actual != size {
            return Err(SetsError::BitStringLength {
                expected: size,
                actual,
            });
        }

        let mut e = Self::empty(size);
        for (position, c) in bits.chars().enumerate() {
            match c {
                '0' => {}
                '1' => e.bv.set(position, true),
                found => return Err(SetsError::InvalidBitString { position, found }),
            }
        }
        Ok(e)
    }

    /// Build an element from atom names looked up in a reference list.
    ///
    /// The width is the length of the reference list. Names may repeat.
    ///
    /// # Errors
    ///
    /// Returns [`SetsError::UnknownAtom`] for the first name that is not in
    /// the reference list.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomset::{Element, ReferenceList};
    ///
    /// let rl = ReferenceList::from_names(["a", "b", "c"]).unwrap();
    /// let e = Element::from_names(&["a", "c"], &rl).unwrap();
    /// assert_eq!(e.to_bit_string(), "101");
    /// assert_eq!(e.to_name_string(&rl).unwrap(), "{a,c}");
    /// ```
    pub fn from_names<S: AsRef<str>>(names: &[S], rl: &ReferenceList) -> Result<Self> {
        check_width(rl.len())?;
        let mut e = Self::empty(rl.len());
        for name in names {
            let atom = rl.lookup(name.as_ref())?;
            e.bv.set(atom, true);
        }
        Ok(e)
    }

    /// Build the element whose MSB-first binary form of width `nb_digits` is `value`.
    ///
    /// # Errors
    ///
    /// - [`SetsError::WidthOverflow`] if `nb_digits > MAX_ATOMS`
    /// - [`SetsError::ValueOutOfRange`] if `value >= 2^nb_digits`
    ///
    /// # Examples
    ///
    /// ```
    /// use atomset::Element;
    ///
    /// let e = Element::from_number(1, 3).unwrap();
    /// assert_eq!(e.to_bit_string(), "001");
    /// assert_eq!(e.to_number(), 1);
    /// assert!(Element::from_number(8, 3).is_err());
    /// ```
    pub fn from_number(value: u64, nb_digits: usize) -> Result<Self> {
        check_width(nb_digits)?;
        if nb_digits < BITS_PER_WORD && value >> nb_digits != 0 {
            return Err(SetsError::ValueOutOfRange {
                value,
                size: nb_digits,
            });
        }
        if nb_digits == 0 {
            return Ok(Self::empty(0));
        }
        Ok(Self::from_word(value << (BITS_PER_WORD - nb_digits), nb_digits))
    }

    /// Create an element with each atom present with probability 1/2.
    ///
    /// # Panics
    ///
    /// Panics if `size > MAX_ATOMS`.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        Self::from_word(rng.gen(), size)
    }

    /// Build from a raw word, clearing padding bits.
    fn from_word(word: Word, size: usize) -> Self {
        let mut e = Self::empty(size);
        if let Some(w) = e.bv.as_raw_mut_slice().first_mut() {
            *w = word & live_mask(size);
        }
        e
    }

    /// The raw storage word (zero for a width-0 element).
    #[inline(always)]
    fn word(&self) -> Word {
        self.bv.as_raw_slice().first().copied().unwrap_or(0)
    }

    #[inline]
    fn check_same_size(&self, other: &Element) -> Result<()> {
        if self.size() != other.size() {
            return Err(SetsError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    #[inline]
    fn check_atom(&self, atom: usize) -> Result<()> {
        if atom >= self.size() {
            return Err(SetsError::AtomOutOfBounds {
                index: atom,
                size: self.size(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Information
    // =========================================================================

    /// Width of the element (size of the atom universe).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.bv.len()
    }

    /// Number of atoms present (cardinality).
    #[inline]
    pub fn card(&self) -> usize {
        self.word().count_ones() as usize
    }

    /// True if no atom is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word() == 0
    }

    /// True if every atom is present.
    pub fn is_full(&self) -> bool {
        self.word() == live_mask(self.size())
    }

    /// Indices of the atoms present, in ascending order.
    pub fn atoms(&self) -> Vec<usize> {
        self.bv.iter_ones().collect()
    }

    // =========================================================================
    // Single Atom Operations
    // =========================================================================

    /// True if `atom` is present.
    ///
    /// # Panics
    ///
    /// Panics if `atom >= size`.
    #[inline]
    pub fn contains(&self, atom: usize) -> bool {
        assert!(
            atom < self.size(),
            "atom index {} out of bounds (size: {})",
            atom,
            self.size()
        );
        self.bv[atom]
    }

    /// Add `atom` in place.
    pub fn insert(&mut self, atom: usize) -> Result<()> {
        self.check_atom(atom)?;
        self.bv.set(atom, true);
        Ok(())
    }

    /// Remove `atom` in place.
    pub fn remove(&mut self, atom: usize) -> Result<()> {
        self.check_atom(atom)?;
        self.bv.set(atom, false);
        Ok(())
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Intersection of two elements of the same width.
    pub fn conjunction(&self, other: &Element) -> Result<Element> {
        self.check_same_size(other)?;
        Ok(Self::from_word(self.word() & other.word(), self.size()))
    }

    /// Union of two elements of the same width.
    pub fn disjunction(&self, other: &Element) -> Result<Element> {
        self.check_same_size(other)?;
        Ok(Self::from_word(self.word() | other.word(), self.size()))
    }

    /// Alias for [`Element::disjunction`].
    #[inline]
    pub fn union(&self, other: &Element) -> Result<Element> {
        self.disjunction(other)
    }

    /// Atoms of `self` that are not in `other`.
    pub fn difference(&self, other: &Element) -> Result<Element> {
        self.check_same_size(other)?;
        Ok(Self::from_word(self.word() & !other.word(), self.size()))
    }

    /// Atoms present in exactly one of the two elements.
    pub fn symmetric_difference(&self, other: &Element) -> Result<Element> {
        self.check_same_size(other)?;
        Ok(Self::from_word(self.word() ^ other.word(), self.size()))
    }

    /// Complement within the element's width.
    ///
    /// Bits beyond `size` stay cleared.
    pub fn opposite(&self) -> Element {
        Self::from_word(!self.word(), self.size())
    }

    /// True iff both elements hold exactly the same atoms.
    pub fn equals(&self, other: &Element) -> Result<bool> {
        self.check_same_size(other)?;
        Ok(self.word() == other.word())
    }

    /// True iff every atom of `self` is also in `other`.
    pub fn is_subset(&self, other: &Element) -> Result<bool> {
        self.check_same_size(other)?;
        Ok(self.word() & !other.word() == 0)
    }

    /// True iff `self` equals some member of `set` (linear scan).
    pub fn is_member(&self, set: &Set) -> Result<bool> {
        if set.size() != self.size() {
            return Err(SetsError::SizeMismatch {
                left: set.size(),
                right: self.size(),
            });
        }
        Ok(set.iter().any(|e| e.word() == self.word()))
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// The unsigned integer whose MSB-first binary form is this element.
    pub fn to_number(&self) -> u64 {
        match self.size() {
            0 => 0,
            size => self.word() >> (BITS_PER_WORD - size),
        }
    }

    /// Render as a bit string, exact inverse of [`Element::from_bits`].
    pub fn to_bit_string(&self) -> String {
        self.bv.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    /// Render as the names of the atoms present, e.g. `{a,c}`.
    ///
    /// The empty element renders as `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`SetsError::SizeMismatch`] if the reference list length
    /// differs from the element width.
    pub fn to_name_string(&self, rl: &ReferenceList) -> Result<String> {
        if rl.len() != self.size() {
            return Err(SetsError::SizeMismatch {
                left: self.size(),
                right: rl.len(),
            });
        }
        if self.is_empty() {
            return Ok(EMPTY_SET_LITERAL.to_string());
        }
        let names = self.bv.iter_ones().filter_map(|atom| rl.name(atom)).join(",");
        Ok(format!("{{{}}}", names))
    }
}

// =============================================================================
// Bitwise Operators
// =============================================================================

impl BitAnd for &Element {
    type Output = Element;

    /// Intersection.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    fn bitand(self, rhs: Self) -> Self::Output {
        assert_eq!(self.size(), rhs.size(), "Elements must have same size");
        Element::from_word(self.word() & rhs.word(), self.size())
    }
}

impl BitAnd for Element {
    type Output = Element;

    fn bitand(self, rhs: Self) -> Self::Output {
        &self & &rhs
    }
}

impl BitOr for &Element {
    type Output = Element;

    /// Union.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    fn bitor(self, rhs: Self) -> Self::Output {
        assert_eq!(self.size(), rhs.size(), "Elements must have same size");
        Element::from_word(self.word() | rhs.word(), self.size())
    }
}

impl BitOr for Element {
    type Output = Element;

    fn bitor(self, rhs: Self) -> Self::Output {
        &self | &rhs
    }
}

impl BitXor for &Element {
    type Output = Element;

    /// Symmetric difference.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    fn bitxor(self, rhs: Self) -> Self::Output {
        assert_eq!(self.size(), rhs.size(), "Elements must have same size");
        Element::from_word(self.word() ^ rhs.word(), self.size())
    }
}

impl BitXor for Element {
    type Output = Element;

    fn bitxor(self, rhs: Self) -> Self::Output {
        &self ^ &rhs
    }
}

impl Not for &Element {
    type Output = Element;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl Not for Element {
    type Output = Element;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

// =============================================================================
// Comparison, Hashing and Formatting
// =============================================================================

impl PartialEq for Element {
    /// Width and word comparison; elements of different widths are unequal.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.word() == other.word()
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        self.word().hash(state);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({})", self.to_bit_string())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl From<Element> for String {
    fn from(e: Element) -> Self {
        e.to_bit_string()
    }
}

impl TryFrom<String> for Element {
    type Error = SetsError;

    fn try_from(bits: String) -> Result<Self> {
        bits.parse()
    }
}

impl FromStr for Element {
    type Err = SetsError;

    /// Parse a bit string whose width is its character count.
    fn from_str(s: &str) -> Result<Self> {
        Element::from_bits(s, s.chars().count())
    }
}
