use serde::Deserialize;

use super::deserializers::deserialize_lenient_page;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Deserialize, Default)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    page: Option<i64>,
}

impl PageQuery {
    /// 1-based page number, defaulting to the first page.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Window of `items` for a 1-based `page`, empty once past the end.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    match start {
        Some(start) if start < items.len() => {
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}
