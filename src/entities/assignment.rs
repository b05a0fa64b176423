use serde::{Deserialize, Serialize};

use crate::mapping::{lenient, Entity, Field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "Id", deserialize_with = "lenient::integer")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub class_id: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub points_possible: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub weight: Option<f64>,
}

impl Entity for Assignment {
    const NAME: &'static str = "assignment";
    const COLLECTION: &'static str = "assignment";
    const FIELDS: &'static [Field] = &[
        Field::scalar("Name", "name"),
        Field::scalar("class_id", "classId"),
        Field::scalar("category", "category"),
        Field::scalar("points_possible", "pointsPossible"),
        Field::scalar("due_date", "dueDate"),
        Field::scalar("weight", "weight"),
    ];
}
