#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use serde::{Deserialize, Serialize};

/// A dense meeting identifier, assigned in sorted course code order.
pub type MeetingId = usize;

/// An index of a student inside the registry.
pub type StudentId = usize;

/// An index of a classroom inside the registry (and inside the schedule domain).
pub type RoomId = usize;

/// A separator which splits course code into a course part and a fixed classroom part.
const FIXED_ROOM_SEPARATOR: char = '_';

/// Represents a course which has to be scheduled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// A unique course code.
    pub code: String,
    /// Amount of enrolled students.
    pub student_count: usize,
    /// Amount of credit hours, one meeting is created per credit.
    pub credits: usize,
}

impl Course {
    /// Creates a new instance of `Course`.
    pub fn new(code: &str, student_count: usize, credits: usize) -> Self {
        Self { code: code.to_string(), student_count, credits }
    }

    /// Returns a classroom code encoded in the course code (`CODE_ROOM` form), if any.
    /// Only the part right after the first separator is taken.
    pub fn fixed_classroom(&self) -> Option<&str> {
        self.code.split(FIXED_ROOM_SEPARATOR).nth(1).filter(|room| !room.is_empty())
    }
}

/// Represents a classroom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// A unique classroom code.
    pub code: String,
    /// Max amount of students which fit into the classroom.
    pub capacity: usize,
}

impl Classroom {
    /// Creates a new instance of `Classroom`.
    pub fn new(code: &str, capacity: usize) -> Self {
        Self { code: code.to_string(), capacity }
    }

    /// Returns true if the classroom can host given amount of students.
    pub fn can_host(&self, student_count: usize) -> bool {
        self.capacity >= student_count
    }
}

/// Represents a student with enrolled courses and their priorities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// A unique student id.
    pub id: String,
    /// Ordered list of enrolled course codes.
    pub courses: Vec<String>,
    /// Priorities, parallel to the course list.
    pub priorities: Vec<i32>,
}

impl Student {
    /// Creates a new instance of `Student`.
    pub fn new(id: &str, courses: &[&str], priorities: &[i32]) -> Self {
        Self {
            id: id.to_string(),
            courses: courses.iter().map(|code| code.to_string()).collect(),
            priorities: priorities.to_vec(),
        }
    }
}

/// One scheduled session of a course. A course with N credits produces N meetings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Meeting {
    /// A unique dense id.
    pub id: MeetingId,
    /// A code of the owning course.
    pub course_code: String,
    /// A classroom code which is encoded in the course code.
    pub fixed_classroom: Option<String>,
    /// Duration in hours.
    pub duration: usize,
    /// Amount of students attending the meeting.
    pub student_count: usize,
    /// An explicit list of attending student ids, if known.
    pub students: Option<Vec<String>>,
}

impl Meeting {
    /// Creates a one hour meeting for the given course.
    pub fn new(id: MeetingId, course: &Course) -> Self {
        Self {
            id,
            course_code: course.code.clone(),
            fixed_classroom: course.fixed_classroom().map(|room| room.to_string()),
            duration: 1,
            student_count: course.student_count,
            students: None,
        }
    }
}
