use serde::{Deserialize, Serialize};

use crate::mapping::{lenient, Entity, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grade {
    #[serde(rename = "Id", deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub student_id: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub assignment_id: Option<i64>,
    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub submitted_date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub comments: Option<String>,
}

impl Entity for Grade {
    const NAME: &'static str = "grade";
    const COLLECTION: &'static str = "grade";
    const FIELDS: &'static [Field] = &[
        Field::scalar("student_id", "studentId"),
        Field::scalar("assignment_id", "assignmentId"),
        Field::scalar("score", "score"),
        Field::scalar("submitted_date", "submittedDate"),
        Field::optional_text("comments", "comments"),
    ];

    fn display_name(&self) -> Option<String> {
        let student = self.student_id.map(|id| id.to_string()).unwrap_or_default();
        Some(format!("Grade for Student {}", student))
    }
}
