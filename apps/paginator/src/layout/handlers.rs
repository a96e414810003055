use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::assign::{assign_page_numbers, PageAssignments};
use crate::layout::engine::paginate_using;
use crate::layout::observer::TracingObserver;
use crate::layout::projection::project_page;
use crate::layout::result::PaginationResult;
use crate::models::resume::ResumeContent;
use crate::models::template::TemplateDescriptor;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PaginationRequest {
    pub resume: ResumeContent,
    #[serde(default)]
    pub template: TemplateDescriptor,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginationResponse {
    pub pagination: PaginationResult,
    pub assignments: PageAssignments,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PageContentResponse {
    pub page_number: u32,
    pub total_pages: u32,
    pub content: ResumeContent,
}

/// POST /api/v1/pagination
pub async fn handle_paginate(
    State(state): State<AppState>,
    Json(req): Json<PaginationRequest>,
) -> Result<Json<PaginationResponse>, AppError> {
    validate_template(&req.template)?;
    let pagination = run(&state, &req).await;
    let assignments = assign_page_numbers(&pagination);
    Ok(Json(PaginationResponse {
        pagination,
        assignments,
    }))
}

/// POST /api/v1/pagination/pages/:page_number
pub async fn handle_page_content(
    State(state): State<AppState>,
    Path(page_number): Path<u32>,
    Json(req): Json<PaginationRequest>,
) -> Result<Json<PageContentResponse>, AppError> {
    if page_number == 0 {
        return Err(AppError::Validation(
            "page_number is 1-based and must be at least 1".to_string(),
        ));
    }
    validate_template(&req.template)?;

    let pagination = run(&state, &req).await;
    if page_number > pagination.total_pages {
        return Err(AppError::NotFound(format!(
            "Page {page_number} not found (resume has {} pages)",
            pagination.total_pages
        )));
    }

    let assignments = assign_page_numbers(&pagination);
    Ok(Json(PageContentResponse {
        page_number,
        total_pages: pagination.total_pages,
        content: project_page(&req.resume, &assignments, page_number),
    }))
}

async fn run(state: &AppState, req: &PaginationRequest) -> PaginationResult {
    paginate_using(
        state.skill_measurer,
        &req.resume,
        &req.template,
        &state.geometry,
        &TracingObserver,
    )
    .await
}

/// Rejects templates whose column metrics cannot describe a real layout.
fn validate_template(template: &TemplateDescriptor) -> Result<(), AppError> {
    let lengths = [
        ("sidebar_width_px", template.sidebar_width_px),
        ("column_gap_px", template.column_gap_px),
        ("skill_chips.padding_x_px", template.skill_chips.padding_x_px),
        ("skill_chips.chip_height_px", template.skill_chips.chip_height_px),
        ("skill_chips.gap_px", template.skill_chips.gap_px),
        ("skill_chips.row_gap_px", template.skill_chips.row_gap_px),
        ("skill_chips.heading_height_px", template.skill_chips.heading_height_px),
        ("skill_chips.section_padding_px", template.skill_chips.section_padding_px),
    ];
    for (name, value) in lengths {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::Validation(format!(
                "template.{name} must be a non-negative number, got {value}"
            )));
        }
    }

    let size = template.skill_chips.font_size_px;
    if !size.is_finite() || size <= 0.0 {
        return Err(AppError::Validation(format!(
            "template.skill_chips.font_size_px must be positive, got {size}"
        )));
    }
    Ok(())
}
