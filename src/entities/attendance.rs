use serde::{Deserialize, Serialize};

use crate::mapping::{lenient, Entity, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attendance {
    #[serde(rename = "Id", deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub student_id: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub class_id: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    /// Free-form status as stored by the backend (e.g. `present`, `absent`).
    #[serde(deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub reason: Option<String>,
}

impl Entity for Attendance {
    const NAME: &'static str = "attendance";
    const COLLECTION: &'static str = "attendance";
    const FIELDS: &'static [Field] = &[
        Field::scalar("student_id", "studentId"),
        Field::scalar("class_id", "classId"),
        Field::scalar("date", "date"),
        Field::scalar("status", "status"),
        Field::optional_text("reason", "reason"),
    ];

    fn display_name(&self) -> Option<String> {
        Some(format!("Attendance for {}", self.date.as_deref().unwrap_or_default()))
    }
}
