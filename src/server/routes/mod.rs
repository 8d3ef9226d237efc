mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use serde::Serialize;

use super::error::ApiError;
use super::extract::Json;

pub type ApiResponse<T> = Result<T, ApiError>;

#[derive(Serialize)]
pub struct Success {
    success: bool,
}

fn success() -> Json<Success> {
    Json(Success { success: true })
}
