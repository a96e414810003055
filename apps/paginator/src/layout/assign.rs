//! Page Assignment: which page every piece of resume content landed on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::result::PaginationResult;
use crate::layout::sections::{ContentSection, SectionKind};

/// Skills `[start, end)` printed on `page_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPageRange {
    pub start: usize,
    pub end: usize,
    pub page_number: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageAssignments {
    pub header_page: Option<u32>,
    pub summary_page: Option<u32>,
    /// Item id → page number, per item collection. Ids are only unique within a collection.
    pub item_pages: BTreeMap<SectionKind, BTreeMap<String, u32>>,
    pub skill_ranges: Vec<SkillPageRange>,
}

impl PageAssignments {
    /// Page of an item; items the pagination never saw default to page 1.
    pub fn page_of_item(&self, kind: SectionKind, id: &str) -> u32 {
        self.item_pages
            .get(&kind)
            .and_then(|pages| pages.get(id))
            .copied()
            .unwrap_or(1)
    }

    /// Page of the skill at `index`, if some range covers it.
    pub fn page_of_skill(&self, index: usize) -> Option<u32> {
        self.skill_ranges
            .iter()
            .find(|r| index >= r.start && index < r.end)
            .map(|r| r.page_number)
    }
}

pub fn assign_page_numbers(result: &PaginationResult) -> PageAssignments {
    let mut assignments = PageAssignments::default();

    for page in &result.pages {
        for section in page.sections() {
            match section {
                ContentSection::Header => {
                    assignments.header_page.get_or_insert(page.page_number);
                }
                ContentSection::Summary => {
                    assignments.summary_page.get_or_insert(page.page_number);
                }
                ContentSection::Skills(range) => {
                    assignments.skill_ranges.push(SkillPageRange {
                        start: range.start,
                        end: range.end,
                        page_number: page.page_number,
                    });
                }
                item => {
                    if let Some(id) = item.item_id() {
                        assignments
                            .item_pages
                            .entry(item.kind())
                            .or_default()
                            .entry(id.to_string())
                            .or_insert(page.page_number);
                    }
                }
            }
        }
    }

    assignments
}
