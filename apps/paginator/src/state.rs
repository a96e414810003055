use crate::config::Config;
use crate::layout::{PageGeometry, SkillMeasurerKind};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Printable area every pagination run packs into.
    pub geometry: PageGeometry,
    /// Skill measurer used by the pagination handlers. Swap via SKILL_MEASURER env.
    pub skill_measurer: SkillMeasurerKind,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            geometry: config.page_geometry(),
            skill_measurer: config.skill_measurer,
            config,
        }
    }
}
