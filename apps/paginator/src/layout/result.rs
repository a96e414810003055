//! Pagination output and the builder the packers feed.

use serde::{Deserialize, Serialize};

use crate::layout::sections::{ContentSection, SectionKind};
use crate::models::template::LayoutMode;

/// Section placement of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum PageBody {
    SingleColumn {
        sections: Vec<ContentSection>,
    },
    TwoColumn {
        main: Vec<ContentSection>,
        sidebar: Vec<ContentSection>,
    },
}

impl PageBody {
    pub fn empty(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::SingleColumn => PageBody::SingleColumn { sections: vec![] },
            LayoutMode::TwoColumn => PageBody::TwoColumn {
                main: vec![],
                sidebar: vec![],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: u32,
    #[serde(flatten)]
    pub body: PageBody,
    /// Section kinds that pick up where the previous page left off.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub continued_sections: Vec<SectionKind>,
}

impl Page {
    /// Every section on the page; main column before sidebar.
    pub fn sections(&self) -> Box<dyn Iterator<Item = &ContentSection> + '_> {
        match &self.body {
            PageBody::SingleColumn { sections } => Box::new(sections.iter()),
            PageBody::TwoColumn { main, sidebar } => Box::new(main.iter().chain(sidebar.iter())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections().next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationResult {
    pub total_pages: u32,
    pub pages: Vec<Page>,
}

/// Numbers pages as they close and guarantees a non-empty result.
pub struct ResultBuilder {
    layout: LayoutMode,
    pages: Vec<Page>,
}

impl ResultBuilder {
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            layout,
            pages: Vec::new(),
        }
    }

    /// Number the next pushed page will get.
    pub fn next_page_number(&self) -> u32 {
        self.pages.len() as u32 + 1
    }

    pub fn push(&mut self, body: PageBody, continued_sections: Vec<SectionKind>) {
        let page_number = self.next_page_number();
        self.pages.push(Page {
            page_number,
            body,
            continued_sections,
        });
    }

    pub fn build(mut self) -> PaginationResult {
        if self.pages.is_empty() {
            self.push(PageBody::empty(self.layout), vec![]);
        }
        PaginationResult {
            total_pages: self.pages.len() as u32,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::sections::SkillRange;

    #[test]
    fn test_empty_builder_yields_one_empty_page() {
        let result = ResultBuilder::new(LayoutMode::TwoColumn).build();
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.pages[0].page_number, 1);
        assert!(result.pages[0].is_empty());
        assert!(matches!(result.pages[0].body, PageBody::TwoColumn { .. }));
    }

    #[test]
    fn test_pages_numbered_in_push_order() {
        let mut builder = ResultBuilder::new(LayoutMode::SingleColumn);
        assert_eq!(builder.next_page_number(), 1);
        builder.push(
            PageBody::SingleColumn {
                sections: vec![ContentSection::Header],
            },
            vec![],
        );
        builder.push(
            PageBody::SingleColumn {
                sections: vec![ContentSection::Summary],
            },
            vec![],
        );
        let result = builder.build();
        let numbers: Vec<u32> = result.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn test_two_column_sections_main_first() {
        let page = Page {
            page_number: 1,
            body: PageBody::TwoColumn {
                main: vec![ContentSection::Header],
                sidebar: vec![ContentSection::Skills(SkillRange::new(0, 3))],
            },
            continued_sections: vec![],
        };
        let kinds: Vec<SectionKind> = page.sections().map(ContentSection::kind).collect();
        assert_eq!(kinds, vec![SectionKind::Header, SectionKind::Skills]);
    }

    #[test]
    fn test_page_wire_format() {
        let page = Page {
            page_number: 2,
            body: PageBody::SingleColumn {
                sections: vec![ContentSection::Summary],
            },
            continued_sections: vec![SectionKind::Experience],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["page_number"], 2);
        assert_eq!(json["layout"], "single-column");
        assert_eq!(json["sections"][0]["kind"], "summary");
        assert_eq!(json["continued_sections"][0], "experience");

        let back: Page = serde_json::from_value(json).unwrap();
        assert_eq!(back, page);
    }
}
