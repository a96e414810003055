//! Section Sequencer: canonical section order per layout mode.
//!
//! Pure ordering: no measurement, no packing. Sections with nothing to print are
//! left out entirely.

use crate::layout::sections::{ContentSection, SkillRange};
use crate::models::resume::ResumeContent;
use crate::models::template::LayoutMode;

/// Ordered section stream(s) for one run.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionStreams {
    SingleColumn(Vec<ContentSection>),
    TwoColumn {
        main: Vec<ContentSection>,
        sidebar: Vec<ContentSection>,
    },
}

impl SectionStreams {
    pub fn section_count(&self) -> usize {
        match self {
            SectionStreams::SingleColumn(sections) => sections.len(),
            SectionStreams::TwoColumn { main, sidebar } => main.len() + sidebar.len(),
        }
    }
}

pub fn sequence(resume: &ResumeContent, mode: LayoutMode) -> SectionStreams {
    match mode {
        LayoutMode::SingleColumn => {
            let mut sections = Vec::new();
            push_header(resume, &mut sections);
            push_skills(resume, &mut sections);
            push_summary(resume, &mut sections);
            push_main_items(resume, &mut sections);
            push_sidebar_items(resume, &mut sections);
            SectionStreams::SingleColumn(sections)
        }
        LayoutMode::TwoColumn => {
            let mut main = Vec::new();
            push_header(resume, &mut main);
            push_summary(resume, &mut main);
            push_main_items(resume, &mut main);

            let mut sidebar = Vec::new();
            push_skills(resume, &mut sidebar);
            push_sidebar_items(resume, &mut sidebar);
            SectionStreams::TwoColumn { main, sidebar }
        }
    }
}

fn push_header(resume: &ResumeContent, out: &mut Vec<ContentSection>) {
    if resume.has_header() {
        out.push(ContentSection::Header);
    }
}

fn push_summary(resume: &ResumeContent, out: &mut Vec<ContentSection>) {
    if resume.has_summary() {
        out.push(ContentSection::Summary);
    }
}

fn push_skills(resume: &ResumeContent, out: &mut Vec<ContentSection>) {
    if !resume.skills.is_empty() {
        out.push(ContentSection::Skills(SkillRange::new(0, resume.skills.len())));
    }
}

// experience, projects, achievements
fn push_main_items(resume: &ResumeContent, out: &mut Vec<ContentSection>) {
    out.extend(
        resume
            .experience
            .iter()
            .enumerate()
            .map(|(index, e)| ContentSection::Experience {
                id: e.id.clone(),
                index,
            }),
    );
    out.extend(
        resume
            .projects
            .iter()
            .enumerate()
            .map(|(index, p)| ContentSection::Project {
                id: p.id.clone(),
                index,
            }),
    );
    out.extend(
        resume
            .achievements
            .iter()
            .enumerate()
            .map(|(index, a)| ContentSection::Achievement {
                id: a.id.clone(),
                index,
            }),
    );
}

// education, certifications, languages
fn push_sidebar_items(resume: &ResumeContent, out: &mut Vec<ContentSection>) {
    out.extend(
        resume
            .education
            .iter()
            .enumerate()
            .map(|(index, e)| ContentSection::Education {
                id: e.id.clone(),
                index,
            }),
    );
    out.extend(
        resume
            .certifications
            .iter()
            .enumerate()
            .map(|(index, c)| ContentSection::Certification {
                id: c.id.clone(),
                index,
            }),
    );
    out.extend(
        resume
            .languages
            .iter()
            .enumerate()
            .map(|(index, l)| ContentSection::Language {
                id: l.id.clone(),
                index,
            }),
    );
}
