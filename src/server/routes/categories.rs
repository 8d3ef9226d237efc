use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions::get_questions_for_category},
        Category,
    },
    server::{
        app::AppState,
        error::ApiError,
        extract::{Json, Path, Query},
        pagination::{paginate, PageQuery},
    },
};

use super::{questions::QuestionsPage, success, ApiResponse, Success};

#[derive(Deserialize)]
struct NewCategory {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Serialize)]
struct CategoriesBody {
    categories: BTreeMap<i64, String>,
}

/// Categories keyed by id, ordered by id.
pub(super) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(CategoriesBody {
        categories: category_map(categories),
    }))
}

async fn create_category(
    State(pool): State<SqlitePool>,
    Json(new_category): Json<NewCategory>,
) -> ApiResponse<Json<Success>> {
    let kind = match new_category.kind {
        Some(kind) if !kind.is_empty() => kind,
        _ => return Err(ApiError::Validation("category type is empty".to_owned())),
    };
    let id = categories::create_category(&pool, &kind).await?;
    tracing::info!(id, kind = %kind, "Created category");
    Ok(success())
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let Some(category) = categories::get_category(&pool, id).await? else {
        return Err(ApiError::Unprocessable(format!("no category with id {id}")));
    };
    let questions = get_questions_for_category(&pool, id).await?;
    Ok(Json(QuestionsPage {
        questions: paginate(&questions, query.page()).to_vec(),
        total_questions: questions.len(),
        categories: None,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
