use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    server::{
        app::AppState,
        deserializers::serialize_question_or_empty,
        extract::Json,
        quiz::{pick_next, ALL_CATEGORIES},
    },
    telemetry::QUIZ_QUESTIONS_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizRequest {
    quiz_category: QuizCategory,
    previous_questions: Vec<i64>,
}

// the client also sends the category `type`, which is ignored
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizBody {
    #[serde(serialize_with = "serialize_question_or_empty")]
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    Json(request): Json<QuizRequest>,
) -> ApiResponse<Json<QuizBody>> {
    let category_id = request.quiz_category.id;
    let candidates = if category_id == ALL_CATEGORIES {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category_id).await?
    };

    let question = pick_next(
        candidates,
        &request.previous_questions,
        &mut rand::thread_rng(),
    );
    match &question {
        Some(q) => {
            QUIZ_QUESTIONS_CNTR
                .with_label_values(&[&category_id.to_string()])
                .inc();
            tracing::debug!(category_id, question_id = q.id, "Picked quiz question");
        }
        None => tracing::debug!(category_id, "Quiz pool exhausted"),
    }
    Ok(Json(QuizBody { question }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
