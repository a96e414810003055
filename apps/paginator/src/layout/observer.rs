//! Structured pagination events, delivered to an injected observer.
//!
//! The packers report what they did; what happens to the reports (tracing,
//! nothing, a test recorder) is the observer's business.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::layout::geometry::Column;
use crate::layout::sections::{SectionKind, SkillRange};
use crate::models::template::LayoutMode;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PaginationEvent {
    RunStarted {
        layout: LayoutMode,
        sections: usize,
        budget: f32,
    },
    SectionPlaced {
        page: u32,
        column: Column,
        kind: SectionKind,
        height: f32,
    },
    /// A skills range was opened or extended on `page`; `height` covers the whole range.
    SkillsPlaced {
        page: u32,
        column: Column,
        range: SkillRange,
        height: f32,
    },
    /// A single indivisible section taller than the budget, placed alone.
    OversizedSection {
        page: u32,
        column: Column,
        kind: SectionKind,
        height: f32,
        budget: f32,
    },
    /// Rendering-based skill measurement failed; the structural estimate was used.
    MeasurementFallback { labels: usize, reason: String },
    PageClosed {
        page: u32,
        main_height: f32,
        sidebar_height: Option<f32>,
    },
    RunFinished { total_pages: u32 },
}

/// Receives pagination events. Must be cheap: it is called inline by the packers.
pub trait PaginationObserver: Send + Sync {
    fn on_event(&self, event: &PaginationEvent);
}

/// Discards every event.
pub struct NoopObserver;

impl PaginationObserver for NoopObserver {
    fn on_event(&self, _event: &PaginationEvent) {}
}

/// Forwards events to `tracing`.
pub struct TracingObserver;

impl PaginationObserver for TracingObserver {
    fn on_event(&self, event: &PaginationEvent) {
        match event {
            PaginationEvent::RunStarted {
                layout,
                sections,
                budget,
            } => debug!(?layout, sections, budget, "Pagination started"),
            PaginationEvent::SectionPlaced {
                page,
                column,
                kind,
                height,
            } => debug!(page, ?column, ?kind, height, "Section placed"),
            PaginationEvent::SkillsPlaced {
                page,
                column,
                range,
                height,
            } => debug!(
                page,
                ?column,
                start = range.start,
                end = range.end,
                height,
                "Skills range placed"
            ),
            PaginationEvent::OversizedSection {
                page,
                column,
                kind,
                height,
                budget,
            } => warn!(
                page,
                ?column,
                ?kind,
                height,
                budget,
                "Section exceeds page budget, placed alone"
            ),
            PaginationEvent::MeasurementFallback { labels, reason } => warn!(
                labels,
                reason = %reason,
                "Skill measurement failed, using structural estimate"
            ),
            PaginationEvent::PageClosed {
                page,
                main_height,
                sidebar_height,
            } => debug!(page, main_height, ?sidebar_height, "Page closed"),
            PaginationEvent::RunFinished { total_pages } => {
                info!(total_pages, "Pagination finished")
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{PaginationEvent, PaginationObserver};

    /// Keeps every event for later assertions.
    #[derive(Default)]
    pub struct RecordingObserver {
        events: Mutex<Vec<PaginationEvent>>,
    }

    impl RecordingObserver {
        pub fn events(&self) -> Vec<PaginationEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl PaginationObserver for RecordingObserver {
        fn on_event(&self, event: &PaginationEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }
}
