use std::sync::Arc;

use axum::{Json, extract::State as AxumState, http::StatusCode, response::IntoResponse};
use catalog::explorer::{MatchResult, find_exact_match};
use catalog::model::{Combination, Inquiry, Technology};
use catalog::normalize::normalize;
use catalog::selection::Selection;
use catalog::store::write_inquiries;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::{
    error::AppError::{self, EmptySelection, MalformedPayload, UnknownTechnology},
    state::State,
};

#[derive(Deserialize)]
pub struct ExploreRequest {
    technologies: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    name: String,
    email: String,
    phone: String,
    #[serde(default)]
    course_interest: String,
    #[serde(default)]
    message: String,
}

pub async fn technologies_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<Vec<Technology>>, AppError> {
    let catalog = state.catalog_cache.get().await?;

    let mut technologies = catalog.technologies.clone();
    technologies.sort_by_key(|tech| tech.display_order);

    Ok(Json(technologies))
}

pub async fn combinations_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<Vec<Combination>>, AppError> {
    let catalog = state.catalog_cache.get().await?;

    Ok(Json(catalog.combinations.clone()))
}

/// Evaluate the user's selection against one catalog snapshot.
///
/// Curated combinations are matched on the raw names first, so a combination
/// referencing a name with no catalog record still matches. Only the
/// calculated fallback needs resolved technologies.
pub async fn explore_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(payload): Json<ExploreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let names: Vec<String> = payload
        .technologies
        .iter()
        .map(|name| normalize(name).to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Err(EmptySelection);
    }

    let catalog = state.catalog_cache.get().await?;

    let mut selection = Selection::new();
    let mut unresolved: Option<&String> = None;
    for name in &names {
        match catalog.technology(name) {
            Some(tech) => {
                selection.add(tech.clone());
            }
            None => {
                unresolved = Some(name);
                break;
            }
        }
    }

    if let Some(name) = unresolved {
        return match find_exact_match(&names, &catalog.combinations) {
            Some(combination) => Ok(Json(MatchResult::Exact(combination.clone()))),
            None => Err(UnknownTechnology(name.clone())),
        };
    }

    let result = selection
        .evaluate(&catalog.combinations)
        .ok_or(EmptySelection)?;

    Ok(Json(result))
}

pub async fn create_inquiry_handler(
    AxumState(state): AxumState<Arc<State>>,
    Json(payload): Json<NewInquiry>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(MalformedPayload);
    }

    let inquiry = Inquiry {
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone: payload.phone.trim().to_string(),
        course_interest: payload.course_interest.trim().to_string(),
        message: payload.message,
        submitted_at: Utc::now(),
    };

    let mut inquiries = state.inquiries.write().await;
    inquiries.push(inquiry.clone());
    write_inquiries(&state.config.inquiries_path, &inquiries)?;

    info!("New inquiry from {}", inquiry.email);

    Ok((StatusCode::CREATED, Json(inquiry)))
}

pub async fn list_inquiries_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Json<Vec<Inquiry>> {
    Json(state.inquiries.read().await.clone())
}

pub async fn refresh_handler(AxumState(state): AxumState<Arc<State>>) -> StatusCode {
    state.catalog_cache.invalidate().await;

    StatusCode::NO_CONTENT
}
