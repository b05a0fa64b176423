use std::sync::Arc;

use crate::accessor::EntityAccessor;
use crate::client::{HttpRecordClient, RecordClient};
use crate::config::BackendConfig;
use crate::entities::{Assignment, Attendance, Class, Grade, Student};

pub type StudentService = EntityAccessor<Student>;
pub type ClassService = EntityAccessor<Class>;
pub type AssignmentService = EntityAccessor<Assignment>;
pub type GradeService = EntityAccessor<Grade>;
pub type AttendanceService = EntityAccessor<Attendance>;

/// The five accessors, sharing one backend client.
#[derive(Clone)]
pub struct Gradebook {
    pub students: StudentService,
    pub classes: ClassService,
    pub assignments: AssignmentService,
    pub grades: GradeService,
    pub attendance: AttendanceService,
}

impl Gradebook {
    pub fn new(client: Arc<dyn RecordClient>) -> Self {
        Self {
            students: EntityAccessor::new(client.clone()),
            classes: EntityAccessor::new(client.clone()),
            assignments: EntityAccessor::new(client.clone()),
            grades: EntityAccessor::new(client.clone()),
            attendance: EntityAccessor::new(client),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(Arc::new(HttpRecordClient::from_config(config)))
    }
}
