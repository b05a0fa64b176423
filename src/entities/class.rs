use serde::{Deserialize, Serialize};

use crate::mapping::{lenient, Entity, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Class {
    #[serde(rename = "Id", deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub section: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub schedule: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub room: Option<String>,
    /// Roster, in the order the backend stores it.
    pub student_ids: Vec<i64>,
}

impl Entity for Class {
    const NAME: &'static str = "class";
    const COLLECTION: &'static str = "class";
    const FIELDS: &'static [Field] = &[
        Field::scalar("Name", "name"),
        Field::scalar("subject", "subject"),
        Field::optional_text("section", "section"),
        Field::scalar("schedule", "schedule"),
        Field::scalar("room", "room"),
        Field::id_list("student_ids", "studentIds"),
    ];
}
