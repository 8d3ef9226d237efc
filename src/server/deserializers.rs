use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::db::Question;

// `?page=abc` is treated like a missing page instead of rejecting the request
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse::<i64>().ok()))
}

// clients check the quiz answer for truthiness, so an exhausted pool is sent as ""
pub fn serialize_question_or_empty<S>(
    question: &Option<Question>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct PageOnly {
        #[serde(default, deserialize_with = "deserialize_lenient_page")]
        page: Option<i64>,
    }

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize_question_or_empty")]
        question: Option<Question>,
    }

    #[test]
    fn unparsable_page_is_dropped() {
        let parsed: PageOnly = serde_json::from_value(json!({"page": "abc"})).unwrap();
        assert_eq!(parsed.page, None);
        let parsed: PageOnly = serde_json::from_value(json!({"page": "3"})).unwrap();
        assert_eq!(parsed.page, Some(3));
        let parsed: PageOnly = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.page, None);
    }

    #[test]
    fn missing_question_serializes_as_empty_string() {
        let value = serde_json::to_value(Wrapper { question: None }).unwrap();
        assert_eq!(value, json!({"question": ""}));
    }
}
