//! Payload records stored in the index.
//!
//! The index itself is generic over its value type and never looks inside
//! a value; [`Record`] is the payload the demo and tests use.

use std::fmt;

/// A person record: identifier, display name and age.
///
/// The age is the attribute records are keyed on when they are fed into an
/// [`OrderedIndex`](crate::OrderedIndex).
///
/// # Example
/// ```
/// use recordindex::Record;
///
/// let r = Record::new(1034, "Alice", 23);
/// assert_eq!(r.age_key(), 23);
/// assert_eq!(r.to_string(), "{ID:1034, Name:\"Alice\", Age:23}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

impl Record {
    /// Create a new record.
    pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// The index key for this record (its age).
    #[inline]
    pub fn age_key(&self) -> i64 {
        i64::from(self.age)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ID:{}, Name:\"{}\", Age:{}}}", self.id, self.name, self.age)
    }
}
