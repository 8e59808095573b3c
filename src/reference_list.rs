//! Reference lists: the ordered name ↔ atom-index dictionary.
//!
//! A [`ReferenceList`] defines an atom universe. Its length is the width of
//! every element built from it, and the position of a name is the atom index.
//! Names are unique; lookup by name goes through a hash index, rendering
//! follows insertion order.
//!
//! # File Format
//!
//! One atom name per line, line order is atom order, no blank lines and no
//! duplicates. [`LoadOptions`] relaxes or tightens these rules.
//!
//! # Serialization
//!
//! A reference list serializes as its plain list of names and is validated
//! again on deserialization, so the JSON form of `["a", "b"]` is just
//! `["a","b"]`.
//!
//! ```
//! use atomset::ReferenceList;
//!
//! let rl = ReferenceList::from_names(["red", "green", "blue"]).unwrap();
//! assert_eq!(rl.len(), 3);
//! assert_eq!(rl.index_of("green"), Some(1));
//! assert_eq!(rl.to_json().unwrap(), r#"["red","green","blue"]"#);
//! ```

use crate::error::{Result, SetsError};
use crate::log::targets::REFERENCE_LIST as LOG_REFERENCE_LIST;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default cap on the byte length of an atom name.
pub const MAX_NAME_LEN: usize = 1024;

/// Options controlling how reference-list text is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Ignore blank lines instead of rejecting them.
    pub skip_blank_lines: bool,
    /// Strip leading and trailing whitespace from every line.
    pub trim_whitespace: bool,
    /// Maximum byte length of a name.
    pub max_name_len: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: false,
            trim_whitespace: true,
            max_name_len: MAX_NAME_LEN,
        }
    }
}

/// Ordered, duplicate-free list of atom names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ReferenceList {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ReferenceList {
    /// Build a reference list from in-memory names.
    ///
    /// # Errors
    ///
    /// - [`SetsError::EmptyAtomName`] if a name is empty
    /// - [`SetsError::DuplicateAtom`] if a name repeats
    ///
    /// Entry numbers in errors are 1-based.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rl = Self {
            names: Vec::new(),
            index: HashMap::new(),
        };
        for (i, name) in names.into_iter().enumerate() {
            rl.push_name(name.into(), i + 1)?;
        }
        Ok(rl)
    }

    /// Load a reference list from a file with default [`LoadOptions`].
    ///
    /// # Errors
    ///
    /// [`SetsError::Io`] if the file cannot be read, otherwise the errors of
    /// [`ReferenceList::parse`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, &LoadOptions::default())
    }

    /// Load a reference list from a file.
    pub fn load_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let rl = Self::parse(&contents, options)?;
        log::debug!(target: LOG_REFERENCE_LIST, "Loaded {} atoms from {}", rl.len(), path.display());
        Ok(rl)
    }

    /// Parse reference-list text, one name per line.
    ///
    /// A trailing newline does not create an extra line. Empty input gives
    /// an empty list.
    ///
    /// # Errors
    ///
    /// - [`SetsError::EmptyAtomName`] on a blank line, unless skipped
    /// - [`SetsError::AtomNameTooLong`] if a name exceeds `max_name_len`
    /// - [`SetsError::DuplicateAtom`] if a name repeats
    pub fn parse(contents: &str, options: &LoadOptions) -> Result<Self> {
        let mut rl = Self {
            names: Vec::new(),
            index: HashMap::new(),
        };

        for (i, line) in contents.lines().enumerate() {
            let line_no = i + 1;
            let name = if options.trim_whitespace {
                line.trim()
            } else {
                line
            };

            if name.is_empty() && options.skip_blank_lines {
                log::trace!(target: LOG_REFERENCE_LIST, "Skipping blank line {line_no}");
                continue;
            }
            if name.len() > options.max_name_len {
                return Err(SetsError::AtomNameTooLong {
                    line: line_no,
                    len: name.len(),
                    max: options.max_name_len,
                });
            }
            rl.push_name(name.to_string(), line_no)?;
        }

        Ok(rl)
    }

    fn push_name(&mut self, name: String, line: usize) -> Result<()> {
        if name.is_empty() {
            return Err(SetsError::EmptyAtomName { line });
        }
        if self.index.contains_key(&name) {
            return Err(SetsError::DuplicateAtom { name, line });
        }
        self.index.insert(name.clone(), self.names.len());
        self.names.push(name);
        Ok(())
    }

    /// Number of atoms.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the list has no atoms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Atom index of `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Atom index of `name`, or [`SetsError::UnknownAtom`].
    pub fn lookup(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| SetsError::UnknownAtom(name.to_string()))
    }

    /// Name of atom `index`, if in range.
    #[inline]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// True if `name` is an atom of the list.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names in atom order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate names in atom order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Serialize to JSON (a plain array of names).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON, validating the names.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to binary (bincode).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode), validating the names.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl TryFrom<Vec<String>> for ReferenceList {
    type Error = SetsError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::from_names(names)
    }
}

impl From<ReferenceList> for Vec<String> {
    fn from(rl: ReferenceList) -> Self {
        rl.names
    }
}
