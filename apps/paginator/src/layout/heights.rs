//! Height Estimator/Measurer: one height per section, on demand.
//!
//! Skills go through the `TextBlockMeasurer`; a failed measurement is reported
//! to the observer and replaced by the structural row estimate. Every other
//! section is estimated structurally.

use async_trait::async_trait;

use crate::layout::estimate::{estimate_skills_for_width, StructuralEstimator};
use crate::layout::geometry::ColumnContext;
use crate::layout::measure::TextBlockMeasurer;
use crate::layout::observer::{PaginationEvent, PaginationObserver};
use crate::layout::sections::ContentSection;
use crate::models::resume::ResumeContent;

/// Height source consumed by the packers.
#[async_trait]
pub trait SectionHeights: Send + Sync {
    async fn height(&self, section: &ContentSection, column: &ColumnContext) -> f32;
}

pub struct HeightMeasurer<'a> {
    resume: &'a ResumeContent,
    measurer: &'a dyn TextBlockMeasurer,
    observer: &'a dyn PaginationObserver,
}

impl<'a> HeightMeasurer<'a> {
    pub fn new(
        resume: &'a ResumeContent,
        measurer: &'a dyn TextBlockMeasurer,
        observer: &'a dyn PaginationObserver,
    ) -> Self {
        Self {
            resume,
            measurer,
            observer,
        }
    }
}

#[async_trait]
impl SectionHeights for HeightMeasurer<'_> {
    async fn height(&self, section: &ContentSection, column: &ColumnContext) -> f32 {
        let ContentSection::Skills(range) = section else {
            return StructuralEstimator::for_column(column).estimate(section, self.resume);
        };

        let end = range.end.min(self.resume.skills.len());
        let start = range.start.min(end);
        let labels = &self.resume.skills[start..end];

        match self.measurer.measure(labels, column).await {
            Ok(height) => height,
            Err(e) => {
                self.observer.on_event(&PaginationEvent::MeasurementFallback {
                    labels: labels.len(),
                    reason: e.to_string(),
                });
                estimate_skills_for_width(labels.len(), column.width_px)
            }
        }
    }
}
