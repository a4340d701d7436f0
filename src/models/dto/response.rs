use serde::Serialize;

use crate::models::domain::QuestionItem;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub data: Vec<QuestionItem>,
}

impl From<Vec<QuestionItem>> for QuestionsResponse {
    fn from(data: Vec<QuestionItem>) -> Self {
        QuestionsResponse { data }
    }
}
