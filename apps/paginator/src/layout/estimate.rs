//! Structural height estimates.
//!
//! Fixed base height per item type, plus one line increment per wrapped line of
//! free text. Lines come from text length over a characters-per-line figure
//! derived from the column width. Deterministic and render-free; used for every
//! section except skills, and as the skills fallback when measurement fails.

use crate::layout::geometry::ColumnContext;
use crate::layout::sections::ContentSection;
use crate::models::resume::ResumeContent;

pub const LINE_HEIGHT_PX: f32 = 18.0;
/// Average glyph advance of body text at the template body size.
pub const AVG_GLYPH_WIDTH_PX: f32 = 7.0;
/// Section heading ("Experience", "Education", ...), charged to the first item.
pub const SECTION_HEADING_PX: f32 = 34.0;

const HEADER_BASE_PX: f32 = 96.0;
const CONTACT_LINE_PX: f32 = 18.0;
const SUMMARY_BASE_PX: f32 = 12.0;
const EXPERIENCE_BASE_PX: f32 = 48.0;
const BULLET_SPACING_PX: f32 = 4.0;
const PROJECT_BASE_PX: f32 = 40.0;
const EDUCATION_BASE_PX: f32 = 52.0;
const GPA_LINE_PX: f32 = 18.0;
const CERTIFICATION_BASE_PX: f32 = 40.0;
const ACHIEVEMENT_BASE_PX: f32 = 34.0;
const LANGUAGE_BASE_PX: f32 = 24.0;
const ITEM_SPACING_PX: f32 = 12.0;

/// Skills fallback: heading plus section padding.
pub const SKILLS_OVERHEAD_PX: f32 = 50.0;
pub const SKILL_ROW_HEIGHT_PX: f32 = 35.0;
/// Average rendered chip width including its gap.
pub const AVG_CHIP_WIDTH_PX: f32 = 110.0;

#[derive(Debug, Clone, Copy)]
pub struct StructuralEstimator {
    chars_per_line: usize,
}

impl StructuralEstimator {
    pub fn for_column(column: &ColumnContext) -> Self {
        let chars_per_line = (column.width_px / AVG_GLYPH_WIDTH_PX).floor().max(1.0) as usize;
        Self { chars_per_line }
    }

    pub fn chars_per_line(&self) -> usize {
        self.chars_per_line
    }

    /// Wrapped line count of a free-text field. Blank text takes no lines.
    pub fn text_lines(&self, text: &str) -> usize {
        let len = text.trim().chars().count();
        if len == 0 {
            0
        } else {
            len.div_ceil(self.chars_per_line)
        }
    }

    fn text_height(&self, text: &str) -> f32 {
        self.text_lines(text) as f32 * LINE_HEIGHT_PX
    }

    fn bullets_height(&self, bullets: &[String]) -> f32 {
        bullets
            .iter()
            .filter(|b| !b.trim().is_empty())
            .map(|b| self.text_height(b) + BULLET_SPACING_PX)
            .sum()
    }

    /// Estimated height of one section in px.
    pub fn estimate(&self, section: &ContentSection, resume: &ResumeContent) -> f32 {
        let heading = |index: usize| if index == 0 { SECTION_HEADING_PX } else { 0.0 };

        match section {
            ContentSection::Header => {
                let has_contact = [&resume.email, &resume.phone, &resume.country, &resume.linkedin]
                    .iter()
                    .any(|f| !f.trim().is_empty());
                HEADER_BASE_PX + if has_contact { CONTACT_LINE_PX } else { 0.0 }
            }
            ContentSection::Summary => {
                SECTION_HEADING_PX + SUMMARY_BASE_PX + self.text_height(&resume.summary)
            }
            ContentSection::Experience { index, .. } => {
                let body = resume
                    .experience
                    .get(*index)
                    .map(|e| {
                        self.bullets_height(&e.achievements) + self.bullets_height(&e.responsibilities)
                    })
                    .unwrap_or(0.0);
                heading(*index) + EXPERIENCE_BASE_PX + body + ITEM_SPACING_PX
            }
            ContentSection::Project { index, .. } => {
                let body = resume
                    .projects
                    .get(*index)
                    .map(|p| {
                        let tech = if p.technologies.is_empty() {
                            0.0
                        } else {
                            self.text_height(&p.technologies.join(", "))
                        };
                        self.text_height(&p.description) + tech
                    })
                    .unwrap_or(0.0);
                heading(*index) + PROJECT_BASE_PX + body + ITEM_SPACING_PX
            }
            ContentSection::Education { index, .. } => {
                let gpa = resume
                    .education
                    .get(*index)
                    .and_then(|e| e.gpa.as_deref())
                    .filter(|g| !g.trim().is_empty())
                    .map_or(0.0, |_| GPA_LINE_PX);
                heading(*index) + EDUCATION_BASE_PX + gpa + ITEM_SPACING_PX
            }
            ContentSection::Certification { index, .. } => {
                heading(*index) + CERTIFICATION_BASE_PX + ITEM_SPACING_PX
            }
            ContentSection::Achievement { index, .. } => {
                let body = resume
                    .achievements
                    .get(*index)
                    .map(|a| self.text_height(&a.description))
                    .unwrap_or(0.0);
                heading(*index) + ACHIEVEMENT_BASE_PX + body + ITEM_SPACING_PX
            }
            ContentSection::Language { index, .. } => heading(*index) + LANGUAGE_BASE_PX,
            ContentSection::Skills(range) => estimate_skills(range.len(), self.chars_per_line),
        }
    }
}

/// Rows × fixed row height, for `count` chips in a column of `chars_per_line` glyphs.
fn estimate_skills(count: usize, chars_per_line: usize) -> f32 {
    let width_px = chars_per_line as f32 * AVG_GLYPH_WIDTH_PX;
    estimate_skills_for_width(count, width_px)
}

/// Rows × fixed row height for `count` chips in a column `width_px` wide.
pub fn estimate_skills_for_width(count: usize, width_px: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let per_row = ((width_px / AVG_CHIP_WIDTH_PX).floor() as usize).max(1);
    SKILLS_OVERHEAD_PX + count.div_ceil(per_row) as f32 * SKILL_ROW_HEIGHT_PX
}
