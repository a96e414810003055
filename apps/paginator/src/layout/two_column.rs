//! Two-Column Packer.
//!
//! Each page drains the sidebar first, then the main column. A column stops at
//! the first section that would overflow it while it already holds content; that
//! section stays queued for the next page. The columns keep separate heights and
//! never balance against each other. Sidebar skills arrive as one block and are
//! placed whole.

use crate::layout::geometry::ColumnContext;
use crate::layout::heights::SectionHeights;
use crate::layout::observer::{PaginationEvent, PaginationObserver};
use crate::layout::result::{PageBody, PaginationResult, ResultBuilder};
use crate::layout::sections::{ContentSection, MeasuredSection, SectionKind};
use crate::models::template::LayoutMode;

pub async fn pack_two_column(
    main: &[ContentSection],
    sidebar: &[ContentSection],
    heights: &dyn SectionHeights,
    columns: (ColumnContext, ColumnContext),
    budget: f32,
    observer: &dyn PaginationObserver,
) -> PaginationResult {
    let (main_ctx, sidebar_ctx) = columns;
    let mut main = ColumnStream::new(main, main_ctx);
    let mut sidebar = ColumnStream::new(sidebar, sidebar_ctx);
    let mut builder = ResultBuilder::new(LayoutMode::TwoColumn);

    while !main.is_exhausted() || !sidebar.is_exhausted() {
        let page = builder.next_page_number();
        let side = sidebar.drain(page, heights, budget, observer).await;
        let body = main.drain(page, heights, budget, observer).await;

        observer.on_event(&PaginationEvent::PageClosed {
            page,
            main_height: body.height,
            sidebar_height: Some(side.height),
        });

        let continued = body.continued.into_iter().chain(side.continued).collect();
        builder.push(
            PageBody::TwoColumn {
                main: body.sections,
                sidebar: side.sections,
            },
            continued,
        );
    }

    builder.build()
}

/// What one column contributed to one page.
struct ColumnFill {
    sections: Vec<ContentSection>,
    height: f32,
    continued: Option<SectionKind>,
}

struct ColumnStream<'a> {
    sections: &'a [ContentSection],
    column: ColumnContext,
    cursor: usize,
    /// `sections[cursor]`, if it was already measured and deferred to the next page.
    pending: Option<MeasuredSection>,
    last_kind: Option<SectionKind>,
}

impl<'a> ColumnStream<'a> {
    fn new(sections: &'a [ContentSection], column: ColumnContext) -> Self {
        Self {
            sections,
            column,
            cursor: 0,
            pending: None,
            last_kind: None,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.cursor >= self.sections.len()
    }

    async fn drain(
        &mut self,
        page: u32,
        heights: &dyn SectionHeights,
        budget: f32,
        observer: &dyn PaginationObserver,
    ) -> ColumnFill {
        let mut fill = ColumnFill {
            sections: Vec::new(),
            height: 0.0,
            continued: None,
        };

        let sections = self.sections;
        while let Some(section) = sections.get(self.cursor) {
            let measured = match self.pending.take() {
                Some(measured) => measured,
                None => MeasuredSection {
                    section: section.clone(),
                    height: heights.height(section, &self.column).await,
                },
            };
            let h = measured.height;
            let kind = measured.section.kind();

            if fill.height > 0.0 && fill.height + h > budget {
                self.pending = Some(measured);
                break;
            }
            if h > budget {
                observer.on_event(&PaginationEvent::OversizedSection {
                    page,
                    column: self.column.column,
                    kind,
                    height: h,
                    budget,
                });
            }

            if fill.sections.is_empty() && self.last_kind == Some(kind) {
                fill.continued = Some(kind);
            }
            observer.on_event(&PaginationEvent::SectionPlaced {
                page,
                column: self.column.column,
                kind,
                height: h,
            });

            fill.sections.push(measured.section);
            fill.height += h;
            self.last_kind = Some(kind);
            self.cursor += 1;
        }

        fill
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::layout::geometry::{Column, PageGeometry};
    use crate::layout::observer::testing::RecordingObserver;
    use crate::layout::observer::NoopObserver;
    use crate::layout::sections::SkillRange;
    use crate::models::template::TemplateDescriptor;

    /// Every section of a kind has the same height; counts calls.
    struct KindHeights {
        experience: f32,
        education: f32,
        other: f32,
        calls: AtomicUsize,
    }

    impl KindHeights {
        fn new(experience: f32, education: f32, other: f32) -> Self {
            Self {
                experience,
                education,
                other,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SectionHeights for KindHeights {
        async fn height(&self, section: &ContentSection, _column: &ColumnContext) -> f32 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match section.kind() {
                SectionKind::Experience => self.experience,
                SectionKind::Education => self.education,
                _ => self.other,
            }
        }
    }

    fn columns() -> (ColumnContext, ColumnContext) {
        let template = TemplateDescriptor {
            layout: LayoutMode::TwoColumn,
            ..Default::default()
        };
        let geometry = PageGeometry::with_budget(1083.0);
        (geometry.main(&template), geometry.sidebar(&template))
    }

    fn experiences(n: usize) -> Vec<ContentSection> {
        (0..n)
            .map(|index| ContentSection::Experience {
                id: format!("exp-{index}"),
                index,
            })
            .collect()
    }

    fn educations(n: usize) -> Vec<ContentSection> {
        (0..n)
            .map(|index| ContentSection::Education {
                id: format!("edu-{index}"),
                index,
            })
            .collect()
    }

    fn columns_of(result: &PaginationResult, page: usize) -> (&[ContentSection], &[ContentSection]) {
        match &result.pages[page].body {
            PageBody::TwoColumn { main, sidebar } => (main, sidebar),
            PageBody::SingleColumn { .. } => panic!("expected a two-column page"),
        }
    }

    #[tokio::test]
    async fn test_columns_fill_independently() {
        let heights = KindHeights::new(300.0, 180.0, 0.0);
        let main = experiences(6);
        let sidebar = educations(3);
        let result =
            pack_two_column(&main, &sidebar, &heights, columns(), 1083.0, &NoopObserver).await;

        assert_eq!(result.total_pages, 2);
        let (main1, side1) = columns_of(&result, 0);
        assert_eq!(main1.len(), 3);
        assert_eq!(side1.len(), 3);
        let (main2, side2) = columns_of(&result, 1);
        assert_eq!(main2, &experiences(6)[3..]);
        assert!(side2.is_empty());
        assert_eq!(result.pages[1].continued_sections, vec![SectionKind::Experience]);
    }

    #[tokio::test]
    async fn test_page_closed_reports_unequal_columns() {
        let heights = KindHeights::new(300.0, 180.0, 0.0);
        let observer = RecordingObserver::default();
        pack_two_column(
            &experiences(6),
            &educations(3),
            &heights,
            columns(),
            1083.0,
            &observer,
        )
        .await;

        let closed: Vec<(u32, f32, Option<f32>)> = observer
            .events()
            .into_iter()
            .filter_map(|e| match e {
                PaginationEvent::PageClosed {
                    page,
                    main_height,
                    sidebar_height,
                } => Some((page, main_height, sidebar_height)),
                _ => None,
            })
            .collect();
        assert_eq!(closed, vec![(1, 900.0, Some(540.0)), (2, 900.0, Some(0.0))]);
    }

    #[tokio::test]
    async fn test_sidebar_continues_while_main_is_done() {
        let heights = KindHeights::new(100.0, 400.0, 0.0);
        let result = pack_two_column(
            &experiences(1),
            &educations(5),
            &heights,
            columns(),
            1083.0,
            &NoopObserver,
        )
        .await;

        assert_eq!(result.total_pages, 3);
        let (main3, side3) = columns_of(&result, 2);
        assert!(main3.is_empty());
        assert_eq!(side3.len(), 1);
        assert_eq!(result.pages[2].continued_sections, vec![SectionKind::Education]);
    }

    #[tokio::test]
    async fn test_sidebar_skills_placed_whole() {
        let heights = KindHeights::new(100.0, 100.0, 1200.0);
        let sidebar = vec![
            ContentSection::Skills(SkillRange::new(0, 80)),
            ContentSection::Education {
                id: "edu-0".to_string(),
                index: 0,
            },
        ];
        let observer = RecordingObserver::default();
        let result = pack_two_column(
            &experiences(1),
            &sidebar,
            &heights,
            columns(),
            1083.0,
            &observer,
        )
        .await;

        let (_, side1) = columns_of(&result, 0);
        assert_eq!(side1, &[ContentSection::Skills(SkillRange::new(0, 80))]);
        let (_, side2) = columns_of(&result, 1);
        assert_eq!(side2.len(), 1);
        assert!(observer.events().iter().any(|e| matches!(
            e,
            PaginationEvent::OversizedSection {
                column: Column::Sidebar,
                kind: SectionKind::Skills,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_deferred_section_measured_once() {
        let heights = KindHeights::new(700.0, 0.0, 0.0);
        pack_two_column(&experiences(3), &[], &heights, columns(), 1083.0, &NoopObserver).await;
        assert_eq!(heights.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_empty_streams_yield_one_page() {
        let heights = KindHeights::new(0.0, 0.0, 0.0);
        let result = pack_two_column(&[], &[], &heights, columns(), 1083.0, &NoopObserver).await;
        assert_eq!(result.total_pages, 1);
        assert!(result.pages[0].is_empty());
    }

    #[tokio::test]
    async fn test_pages_share_numbering() {
        let heights = KindHeights::new(600.0, 600.0, 0.0);
        let result = pack_two_column(
            &experiences(4),
            &educations(2),
            &heights,
            columns(),
            1083.0,
            &NoopObserver,
        )
        .await;
        let numbers: Vec<u32> = result.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(result.total_pages, 4);
    }
}
