//! Pagination entry points.
//!
//! `paginate_with` runs one pagination against any `TextBlockMeasurer`.
//! `paginate` owns the production setup: it creates a measurement surface for
//! the template's chip typography, runs, and disposes the surface afterwards.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::layout::geometry::PageGeometry;
use crate::layout::heights::HeightMeasurer;
use crate::layout::measure::{
    ChipFlowMeasurer, FixedRowMeasurer, SkillMeasurerKind, TextBlockMeasurer,
};
use crate::layout::observer::{PaginationEvent, PaginationObserver};
use crate::layout::result::PaginationResult;
use crate::layout::sequencer::{sequence, SectionStreams};
use crate::layout::single_column::pack_single_column;
use crate::layout::surface::MeasurementSurface;
use crate::layout::two_column::pack_two_column;
use crate::models::resume::ResumeContent;
use crate::models::template::{layout_mode, TemplateDescriptor};

/// Paginates `resume` for `template` using the given skill measurer.
///
/// Never fails: measurement errors fall back to structural estimates and
/// oversized sections are placed alone, both reported to `observer`.
pub async fn paginate_with(
    resume: &ResumeContent,
    template: &TemplateDescriptor,
    geometry: &PageGeometry,
    measurer: &dyn TextBlockMeasurer,
    observer: &dyn PaginationObserver,
) -> PaginationResult {
    let run_id = Uuid::new_v4();
    let span = info_span!("paginate", run_id = %run_id, template = %template.id);

    async move {
        let mode = layout_mode(template);
        let streams = sequence(resume, mode);
        let budget = geometry.budget();

        observer.on_event(&PaginationEvent::RunStarted {
            layout: mode,
            sections: streams.section_count(),
            budget,
        });

        let heights = HeightMeasurer::new(resume, measurer, observer);
        let result = match streams {
            SectionStreams::SingleColumn(sections) => {
                pack_single_column(&sections, &heights, geometry.full_width(), budget, observer)
                    .await
            }
            SectionStreams::TwoColumn { main, sidebar } => {
                let columns = (geometry.main(template), geometry.sidebar(template));
                pack_two_column(&main, &sidebar, &heights, columns, budget, observer).await
            }
        };

        observer.on_event(&PaginationEvent::RunFinished {
            total_pages: result.total_pages,
        });
        result
    }
    .instrument(span)
    .await
}

/// Paginates with the chip-flow measurer on a surface owned by this call.
pub async fn paginate(
    resume: &ResumeContent,
    template: &TemplateDescriptor,
    geometry: &PageGeometry,
    observer: &dyn PaginationObserver,
) -> PaginationResult {
    let surface = MeasurementSurface::create(template.skill_chips.clone());
    let result = {
        let measurer = ChipFlowMeasurer::new(&surface);
        paginate_with(resume, template, geometry, &measurer, observer).await
    };
    surface.dispose();
    result
}

/// Paginates with the measurer selected by configuration.
pub async fn paginate_using(
    kind: SkillMeasurerKind,
    resume: &ResumeContent,
    template: &TemplateDescriptor,
    geometry: &PageGeometry,
    observer: &dyn PaginationObserver,
) -> PaginationResult {
    info!(measurer = ?kind, layout = ?template.layout, "Paginating resume");
    match kind {
        SkillMeasurerKind::ChipFlow => paginate(resume, template, geometry, observer).await,
        SkillMeasurerKind::FixedRow => {
            let measurer = FixedRowMeasurer::default();
            paginate_with(resume, template, geometry, &measurer, observer).await
        }
    }
}
