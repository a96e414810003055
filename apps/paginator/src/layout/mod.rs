// Pagination engine: sequencing, measurement, packing, and page assignment.
// The engine never fails; measurement problems and oversized sections are
// reported through the observer and resolved locally.

pub mod assign;
pub mod engine;
pub mod estimate;
pub mod font_metrics;
pub mod geometry;
pub mod handlers;
pub mod heights;
pub mod measure;
pub mod observer;
pub mod projection;
pub mod result;
pub mod sections;
pub mod sequencer;
pub mod single_column;
pub mod surface;
pub mod two_column;

// Re-export the public API consumed by handlers and the binary.
pub use geometry::PageGeometry;
pub use measure::SkillMeasurerKind;
