//! Record kinds and their backing collections.

use std::fmt;

/// The three kinds of record the portfolio persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// The single developer profile.
    Developer,
    /// A showcased project.
    Project,
    /// A contact message submitted by a visitor.
    Message,
}

/// Kind-to-collection mapping. Collection names are the lowercased singular
/// record name and double as table names in the PostgreSQL adapter, so they
/// must stay plain identifiers.
const COLLECTIONS: [(RecordKind, &str); 3] = [
    (RecordKind::Developer, "developer"),
    (RecordKind::Project, "project"),
    (RecordKind::Message, "message"),
];

impl RecordKind {
    /// Every record kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Developer, Self::Project, Self::Message];

    /// Name of the collection holding documents of this kind.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::RecordKind;
    ///
    /// assert_eq!(RecordKind::Project.collection(), "project");
    /// ```
    #[must_use]
    pub fn collection(self) -> &'static str {
        COLLECTIONS
            .iter()
            .find_map(|(kind, name)| (*kind == self).then_some(*name))
            .unwrap_or("unknown")
    }

    /// Resolve a collection name back to its record kind.
    #[must_use]
    pub fn from_collection(name: &str) -> Option<Self> {
        COLLECTIONS
            .iter()
            .find_map(|(kind, collection)| (*collection == name).then_some(*kind))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
