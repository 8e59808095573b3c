//! Set - an ordered collection of elements sharing one width.
//!
//! A [`Set`] owns its elements by value. Every member has the same width as
//! the set; [`Set::push`] enforces this. Duplicates are permitted.
//!
//! # Examples
//!
//! ```
//! use atomset::{Element, ReferenceList, Set};
//!
//! let rl = ReferenceList::from_names(["a", "b", "c"]).unwrap();
//! let atoms = Set::from_reference_list(&rl).unwrap();
//!
//! assert_eq!(atoms.len(), 3);
//! assert_eq!(atoms.to_bit_string(), "{100, 010, 001}");
//! assert_eq!(atoms.to_name_string(&rl).unwrap(), "{{a}, {b}, {c}}");
//! ```

use crate::element::{Element, MAX_ATOMS};
use crate::error::{Result, SetsError};
use crate::reference_list::ReferenceList;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Ordered collection of elements of a common width.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SetRepr")]
pub struct Set {
    /// Width shared by every member
    size: usize,
    elements: Vec<Element>,
}

/// Unvalidated serde form of a [`Set`].
#[derive(Deserialize)]
struct SetRepr {
    size: usize,
    elements: Vec<Element>,
}

impl TryFrom<SetRepr> for Set {
    type Error = SetsError;

    fn try_from(repr: SetRepr) -> Result<Self> {
        if repr.size > MAX_ATOMS {
            return Err(SetsError::WidthOverflow {
                size: repr.size,
                max: MAX_ATOMS,
            });
        }
        let mut set = Set::with_capacity(repr.size, repr.elements.len());
        for e in repr.elements {
            set.push(e)?;
        }
        Ok(set)
    }
}

impl Set {
    /// Create an empty set for a universe of `nb_atoms` atoms.
    ///
    /// # Panics
    ///
    /// Panics if `nb_atoms > MAX_ATOMS`, like [`Element::empty`].
    pub fn new(nb_atoms: usize) -> Self {
        Self::with_capacity(nb_atoms, 0)
    }

    /// Create an empty set with room for `capacity` members.
    ///
    /// # Panics
    ///
    /// Panics if `nb_atoms > MAX_ATOMS`.
    pub fn with_capacity(nb_atoms: usize, capacity: usize) -> Self {
        assert!(
            nb_atoms <= MAX_ATOMS,
            "set width {} exceeds maximum {}",
            nb_atoms,
            MAX_ATOMS
        );
        Self {
            size: nb_atoms,
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Create the set of singleton atoms `{0}, {1}, ..., {nb_atoms - 1}`.
    ///
    /// Member `i` has only bit `i` set.
    ///
    /// # Errors
    ///
    /// Returns [`SetsError::WidthOverflow`] if `nb_atoms > MAX_ATOMS`.
    pub fn atoms(nb_atoms: usize) -> Result<Self> {
        if nb_atoms > MAX_ATOMS {
            return Err(SetsError::WidthOverflow {
                size: nb_atoms,
                max: MAX_ATOMS,
            });
        }
        let elements = (0..nb_atoms)
            .map(|atom| Element::singleton(atom, nb_atoms))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            size: nb_atoms,
            elements,
        })
    }

    /// Create the set of singleton atoms named by a reference list,
    /// ordered by reference-list index.
    pub fn from_reference_list(rl: &ReferenceList) -> Result<Self> {
        Self::atoms(rl.len())
    }

    /// Width shared by every member.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Member at position `index`.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Members as a slice.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Append an element; the set takes ownership.
    ///
    /// # Errors
    ///
    /// Returns [`SetsError::SizeMismatch`] if the element width differs
    /// from the set width.
    pub fn push(&mut self, element: Element) -> Result<()> {
        if element.size() != self.size {
            return Err(SetsError::SizeMismatch {
                left: self.size,
                right: element.size(),
            });
        }
        self.elements.push(element);
        Ok(())
    }

    /// True if some member equals `element`.
    pub fn contains(&self, element: &Element) -> bool {
        self.elements.iter().any(|e| e == element)
    }

    /// Union of every member (the empty element for an empty set).
    pub fn union_all(&self) -> Element {
        self.elements
            .iter()
            .fold(Element::empty(self.size), |acc, e| &acc | e)
    }

    /// Render each member as a bit string, e.g. `{00, 01}`.
    pub fn to_bit_string(&self) -> String {
        format!(
            "{{{}}}",
            self.elements.iter().map(Element::to_bit_string).join(", ")
        )
    }

    /// Render each member by atom names, e.g. `{{a}, {a,b}}`.
    pub fn to_name_string(&self, rl: &ReferenceList) -> Result<String> {
        let members = self
            .elements
            .iter()
            .map(|e| e.to_name_string(rl))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("{{{}}}", members.join(", ")))
    }
}

impl Index<usize> for Set {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for Set {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}
