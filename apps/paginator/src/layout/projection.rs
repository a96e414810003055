//! Page Projection: the slice of a resume that prints on one page.
//!
//! Templates render one page at a time from a plain `ResumeContent`, so each
//! page gets a copy holding only what was assigned to it.

use crate::layout::assign::PageAssignments;
use crate::layout::sections::SectionKind;
use crate::models::resume::ResumeContent;

/// Returns the content of page `page`.
///
/// The header prints on its assigned page (page 1 if none was recorded), the
/// summary only on its assigned page. Items without an assignment and skills
/// outside every assigned range fall back to page 1.
pub fn project_page(resume: &ResumeContent, assignments: &PageAssignments, page: u32) -> ResumeContent {
    let mut content = resume.clone();

    if assignments.header_page.unwrap_or(1) != page {
        content.clear_header();
    }
    if assignments.summary_page.unwrap_or(1) != page {
        content.summary.clear();
    }

    let on_page = |kind: SectionKind, id: &str| assignments.page_of_item(kind, id) == page;
    content.experience.retain(|e| on_page(SectionKind::Experience, &e.id));
    content.projects.retain(|p| on_page(SectionKind::Projects, &p.id));
    content.achievements.retain(|a| on_page(SectionKind::Achievements, &a.id));
    content.education.retain(|e| on_page(SectionKind::Education, &e.id));
    content.certifications.retain(|c| on_page(SectionKind::Certifications, &c.id));
    content.languages.retain(|l| on_page(SectionKind::Languages, &l.id));

    content.skills = resume
        .skills
        .iter()
        .enumerate()
        .filter(|(index, _)| assignments.page_of_skill(*index).unwrap_or(1) == page)
        .map(|(_, skill)| skill.clone())
        .collect();

    content
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::layout::assign::SkillPageRange;
    use crate::models::resume::{Education, WorkExperience};

    fn resume() -> ResumeContent {
        ResumeContent {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            summary: "Analytical engines.".to_string(),
            skills: (0..6).map(|i| format!("skill-{i}")).collect(),
            experience: vec![
                WorkExperience {
                    id: "exp-1".to_string(),
                    ..Default::default()
                },
                WorkExperience {
                    id: "exp-2".to_string(),
                    ..Default::default()
                },
            ],
            education: vec![Education {
                id: "edu-1".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn assignments() -> PageAssignments {
        PageAssignments {
            header_page: Some(1),
            summary_page: Some(2),
            item_pages: BTreeMap::from([(
                SectionKind::Experience,
                BTreeMap::from([("exp-1".to_string(), 1), ("exp-2".to_string(), 2)]),
            )]),
            skill_ranges: vec![SkillPageRange {
                start: 2,
                end: 5,
                page_number: 2,
            }],
        }
    }

    #[test]
    fn test_first_page_keeps_header_and_defaults() {
        let page = project_page(&resume(), &assignments(), 1);
        assert_eq!(page.first_name, "Ada");
        assert_eq!(page.email, "ada@example.com");
        assert!(page.summary.is_empty());
        assert_eq!(page.experience.len(), 1);
        assert_eq!(page.experience[0].id, "exp-1");
        // unassigned education defaults to page 1
        assert_eq!(page.education.len(), 1);
        // skills 0, 1 and 5 are outside every range
        assert_eq!(page.skills, vec!["skill-0", "skill-1", "skill-5"]);
    }

    #[test]
    fn test_later_page_drops_header() {
        let page = project_page(&resume(), &assignments(), 2);
        assert!(!page.has_header());
        assert!(page.email.is_empty());
        assert_eq!(page.summary, "Analytical engines.");
        assert_eq!(page.experience[0].id, "exp-2");
        assert!(page.education.is_empty());
        assert_eq!(page.skills, vec!["skill-2", "skill-3", "skill-4"]);
    }

    #[test]
    fn test_page_without_content_is_empty() {
        let page = project_page(&resume(), &assignments(), 3);
        assert_eq!(page, ResumeContent::default());
    }
}
