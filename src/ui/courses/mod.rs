//! Course management UI

mod create_course;

pub use create_course::CreateCourseForm;
