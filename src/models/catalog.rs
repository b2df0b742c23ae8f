use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Whether a section is a standalone primary (lecture) or a dependent
/// (lab/tutorial) that must accompany a specific primary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Primary,
    Dependent,
}

/// One offered section of a course.
///
/// A dependent section carries a weak back-reference to its parent primary
/// section by identifier. The reference is resolved through a per-course
/// index when bundles are built, so sections stay independently
/// constructible and catalogs can be reloaded without dangling pointers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub kind: SectionKind,
    /// Identifier of the parent primary section. `Some` for dependents,
    /// `None` for primaries. Resolvability within the same course is
    /// validated at catalog load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl Section {
    pub fn is_primary(&self) -> bool {
        self.kind == SectionKind::Primary
    }
}

/// A course offering with its sections in catalog declaration order.
///
/// Declaration order is semantically meaningful: it fixes the order in
/// which bundles are tried during enumeration and therefore which valid
/// combination is discovered first. It must never be re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub term: String,
    pub sections: Vec<Section>,
}

impl Course {
    /// Sections of the given kind, in declaration order.
    pub fn sections_of_kind(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }
}

/// A validated course catalog, the output of the loading boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub term: String,
    pub courses: Vec<Course>,
}

/// One legal section pairing for a course: a primary section plus the
/// dependent section that must accompany it, or the primary alone when it
/// has no linked dependents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bundle {
    pub primary: Section,
    pub dependent: Option<Section>,
}

impl Bundle {
    /// All time slots covered by this bundle.
    pub fn slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.primary
            .slots
            .iter()
            .chain(self.dependent.iter().flat_map(|s| s.slots.iter()))
    }
}
