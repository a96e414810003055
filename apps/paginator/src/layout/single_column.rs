//! Single-Column Packer.
//!
//! Greedy: each indivisible section goes on the open page unless it would push
//! a non-empty page past the budget, in which case the page is closed first.
//! An indivisible section taller than a whole page still gets placed, alone.
//!
//! Skills are the one splittable section. The inner loop walks the whole skills
//! collection before anything else is placed:
//! 1. If the open page is full, close it.
//! 2. Guess how many more chips fit with a fixed per-chip height.
//! 3. Measure the open range plus the guessed chips. While that overflows,
//!    drop one chip and remeasure. If not even one more chip fits on a page
//!    that already holds content, close the page and retry on a fresh one.
//! 4. Extend the open range (or open one after a page break) and advance.

use crate::layout::geometry::ColumnContext;
use crate::layout::heights::SectionHeights;
use crate::layout::observer::{PaginationEvent, PaginationObserver};
use crate::layout::result::{PageBody, PaginationResult, ResultBuilder};
use crate::layout::sections::{ContentSection, SectionKind, SkillRange};
use crate::models::template::LayoutMode;

/// Per-chip height guess used to size each skills candidate before measuring it.
pub const SKILL_ITEM_ESTIMATE_PX: f32 = 30.0;

pub async fn pack_single_column(
    sections: &[ContentSection],
    heights: &dyn SectionHeights,
    column: ColumnContext,
    budget: f32,
    observer: &dyn PaginationObserver,
) -> PaginationResult {
    let mut packer = SingleColumnPacker {
        heights,
        column,
        budget,
        observer,
        builder: ResultBuilder::new(LayoutMode::SingleColumn),
        open: Vec::new(),
        height: 0.0,
        continued: Vec::new(),
        carry: None,
    };

    for section in sections {
        match section {
            ContentSection::Skills(range) => packer.place_skills(*range).await,
            _ => packer.place_indivisible(section).await,
        }
    }

    if !packer.open.is_empty() {
        packer.flush();
    }
    packer.builder.build()
}

struct SingleColumnPacker<'a> {
    heights: &'a dyn SectionHeights,
    column: ColumnContext,
    budget: f32,
    observer: &'a dyn PaginationObserver,
    builder: ResultBuilder,
    open: Vec<ContentSection>,
    height: f32,
    continued: Vec<SectionKind>,
    /// Kind of the last section on the previously closed page, until the next page gets content.
    carry: Option<SectionKind>,
}

impl SingleColumnPacker<'_> {
    fn page(&self) -> u32 {
        self.builder.next_page_number()
    }

    fn flush(&mut self) {
        self.observer.on_event(&PaginationEvent::PageClosed {
            page: self.page(),
            main_height: self.height,
            sidebar_height: None,
        });
        self.carry = self.open.last().map(ContentSection::kind);
        let sections = std::mem::take(&mut self.open);
        let continued = std::mem::take(&mut self.continued);
        self.builder
            .push(PageBody::SingleColumn { sections }, continued);
        self.height = 0.0;
    }

    fn append(&mut self, section: ContentSection) {
        if self.open.is_empty() {
            if let Some(kind) = self.carry.take() {
                if kind == section.kind() {
                    self.continued.push(kind);
                }
            }
        }
        self.open.push(section);
    }

    async fn place_indivisible(&mut self, section: &ContentSection) {
        let h = self.heights.height(section, &self.column).await;

        if self.height > 0.0 && self.height + h > self.budget {
            self.flush();
        }
        if h > self.budget {
            self.observer.on_event(&PaginationEvent::OversizedSection {
                page: self.page(),
                column: self.column.column,
                kind: section.kind(),
                height: h,
                budget: self.budget,
            });
        }

        self.append(section.clone());
        self.height += h;
        self.observer.on_event(&PaginationEvent::SectionPlaced {
            page: self.page(),
            column: self.column.column,
            kind: section.kind(),
            height: h,
        });
    }

    async fn place_skills(&mut self, total: SkillRange) {
        let mut cursor = total.start;
        // (range start, page height before the range) of the skills range open on this page
        let mut open_range: Option<(usize, f32)> = None;

        while cursor < total.end {
            if !self.open.is_empty() && self.height >= self.budget {
                self.flush();
                open_range = None;
                continue;
            }

            let (range_start, base) = open_range.unwrap_or((cursor, self.height));
            let page_empty = self.open.is_empty();
            let remaining = (self.budget - self.height).max(0.0);
            let guess = ((remaining / SKILL_ITEM_ESTIMATE_PX).floor() as usize).max(1);
            let mut end = (cursor + guess).min(total.end);

            let placed = loop {
                let range = SkillRange::new(range_start, end);
                let h = self
                    .heights
                    .height(&ContentSection::Skills(range), &self.column)
                    .await;
                if base + h <= self.budget {
                    break Some((range, h));
                }
                if end - cursor > 1 {
                    end -= 1;
                    continue;
                }
                if page_empty {
                    self.observer.on_event(&PaginationEvent::OversizedSection {
                        page: self.page(),
                        column: self.column.column,
                        kind: SectionKind::Skills,
                        height: h,
                        budget: self.budget,
                    });
                    break Some((range, h));
                }
                break None;
            };

            let Some((range, h)) = placed else {
                self.flush();
                open_range = None;
                continue;
            };

            match open_range {
                Some(_) => {
                    if let Some(last) = self.open.last_mut() {
                        *last = ContentSection::Skills(range);
                    }
                }
                None => {
                    self.append(ContentSection::Skills(range));
                    open_range = Some((range_start, base));
                }
            }
            self.height = base + h;
            self.observer.on_event(&PaginationEvent::SkillsPlaced {
                page: self.page(),
                column: self.column.column,
                range,
                height: h,
            });
            cursor = range.end;
        }
    }
}
