use serde::{Deserialize, Serialize};

use crate::mapping::{lenient, Entity, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "Id", deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub enrollment_date: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub grade_level: Option<i64>,
    /// School-issued identifier, distinct from the record `Id`.
    #[serde(deserialize_with = "lenient::text")]
    pub student_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub photo_url: Option<String>,
}

impl Entity for Student {
    const NAME: &'static str = "student";
    const COLLECTION: &'static str = "student";
    const FIELDS: &'static [Field] = &[
        Field::scalar("first_name", "firstName"),
        Field::scalar("last_name", "lastName"),
        Field::scalar("email", "email"),
        Field::scalar("date_of_birth", "dateOfBirth"),
        Field::scalar("enrollment_date", "enrollmentDate"),
        Field::scalar("grade_level", "gradeLevel"),
        Field::scalar("student_id", "studentId"),
        Field::optional_text("photo_url", "photoUrl"),
    ];

    fn display_name(&self) -> Option<String> {
        Some(format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        ))
    }
}
