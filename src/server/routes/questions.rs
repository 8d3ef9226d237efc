use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        error::ApiError,
        extract::{Json, Path, Query},
        pagination::{paginate, PageQuery},
    },
};

use super::{categories::category_map, success, ApiResponse, Success};

const ALL_LABEL: &str = "All";

#[derive(Deserialize)]
struct QuestionForm {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody {
    search_term: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct QuestionsPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i64, String>>,
    pub current_category: String,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let questions = questions::get_all_questions(&pool).await?;
    let page = paginate(&questions, query.page());
    if page.is_empty() {
        return Err(ApiError::NotFound(format!(
            "page {} of {} questions",
            query.page(),
            questions.len()
        )));
    }
    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionsPage {
        questions: page.to_vec(),
        total_questions: questions.len(),
        categories: Some(category_map(categories)),
        current_category: ALL_LABEL.to_owned(),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(form): Json<QuestionForm>,
) -> ApiResponse<Json<Success>> {
    let (Some(question), Some(answer)) = (
        form.question.filter(|q| !q.is_empty()),
        form.answer.filter(|a| !a.is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "question and answer are required".to_owned(),
        ));
    };
    let id = questions::create_question(
        &pool,
        NewQuestion {
            question: &question,
            answer: &answer,
            category: form.category,
            difficulty: form.difficulty,
        },
    )
    .await?;
    tracing::info!(id, "Created question");
    Ok(success())
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<Success>> {
    if !questions::delete_question(&pool, id).await? {
        return Err(ApiError::NotFound(format!("no question with id {id}")));
    }
    tracing::info!(id, "Deleted question");
    Ok(success())
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
    Json(body): Json<SearchBody>,
) -> ApiResponse<Json<QuestionsPage>> {
    let Some(term) = body.search_term else {
        return Err(ApiError::Validation("searchTerm is missing".to_owned()));
    };
    let found = questions::search_questions(&pool, &term).await?;
    Ok(Json(QuestionsPage {
        questions: paginate(&found, query.page()).to_vec(),
        total_questions: found.len(),
        categories: None,
        current_category: ALL_LABEL.to_owned(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
