//! Content sections: the unit the packers place on pages.

use serde::{Deserialize, Serialize};

/// Kind of a content section, in single-column canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Skills,
    Summary,
    Experience,
    Projects,
    Achievements,
    Education,
    Certifications,
    Languages,
}

/// Half-open range `[start, end)` into the skills collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRange {
    pub start: usize,
    pub end: usize,
}

impl SkillRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One placeable section.
///
/// Item variants carry the caller's stable `id` plus the item's position in its
/// collection, so measurement can look the item up without searching. Skills carry
/// a range instead, because plain-string labels have no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSection {
    Header,
    Summary,
    Experience { id: String, index: usize },
    Project { id: String, index: usize },
    Education { id: String, index: usize },
    Certification { id: String, index: usize },
    Achievement { id: String, index: usize },
    Language { id: String, index: usize },
    Skills(SkillRange),
}

impl ContentSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            ContentSection::Header => SectionKind::Header,
            ContentSection::Summary => SectionKind::Summary,
            ContentSection::Experience { .. } => SectionKind::Experience,
            ContentSection::Project { .. } => SectionKind::Projects,
            ContentSection::Education { .. } => SectionKind::Education,
            ContentSection::Certification { .. } => SectionKind::Certifications,
            ContentSection::Achievement { .. } => SectionKind::Achievements,
            ContentSection::Language { .. } => SectionKind::Languages,
            ContentSection::Skills(_) => SectionKind::Skills,
        }
    }

    /// Source item identifier, for item variants.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            ContentSection::Experience { id, .. }
            | ContentSection::Project { id, .. }
            | ContentSection::Education { id, .. }
            | ContentSection::Certification { id, .. }
            | ContentSection::Achievement { id, .. }
            | ContentSection::Language { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn skill_range(&self) -> Option<SkillRange> {
        match self {
            ContentSection::Skills(range) => Some(*range),
            _ => None,
        }
    }

    /// Everything except skills is placed whole.
    pub fn is_indivisible(&self) -> bool {
        !matches!(self, ContentSection::Skills(_))
    }
}

/// A section with its computed height. Lives only for the duration of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredSection {
    pub section: ContentSection,
    pub height: f32,
}
