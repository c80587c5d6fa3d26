use crate::utils::GenericError;
use std::fmt;

/// Specifies an inconsistency in the input data detected while building the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataConsistencyError {
    /// Student's priority list has a different length than the course list.
    PriorityLengthMismatch {
        /// Student id.
        student: String,
        /// Length of the course list.
        courses: usize,
        /// Length of the priority list.
        priorities: usize,
    },
    /// Student references a course which is not known.
    UnknownCourse {
        /// Student id.
        student: String,
        /// Referenced course code.
        course: String,
    },
    /// The same course code is used more than once.
    DuplicateCourse(String),
    /// The same classroom code is used more than once.
    DuplicateClassroom(String),
    /// The same student id is used more than once.
    DuplicateStudent(String),
}

impl fmt::Display for DataConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriorityLengthMismatch { student, courses, priorities } => write!(
                f,
                "priority length mismatch for student '{student}': {courses} courses, {priorities} priorities"
            ),
            Self::UnknownCourse { student, course } => {
                write!(f, "student '{student}' references unknown course '{course}'")
            }
            Self::DuplicateCourse(code) => write!(f, "duplicate course code '{code}'"),
            Self::DuplicateClassroom(code) => write!(f, "duplicate classroom code '{code}'"),
            Self::DuplicateStudent(id) => write!(f, "duplicate student id '{id}'"),
        }
    }
}

impl std::error::Error for DataConsistencyError {}

impl From<DataConsistencyError> for GenericError {
    fn from(value: DataConsistencyError) -> Self {
        GenericError::from(value.to_string())
    }
}
