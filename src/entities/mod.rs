//! The five record types and their field tables.

pub mod assignment;
pub mod attendance;
pub mod class;
pub mod grade;
pub mod student;

pub use assignment::Assignment;
pub use attendance::Attendance;
pub use class::Class;
pub use grade::Grade;
pub use student::Student;
