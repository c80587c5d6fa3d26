#[cfg(test)]
#[path = "../../tests/unit/models/registry_test.rs"]
mod registry_test;

use super::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// A central read only storage of courses, classrooms, students and meetings with
/// precomputed lookup indices. It is built once and never mutated afterwards, so it
/// can be shared between search branches without synchronization.
pub struct Registry {
    courses: Vec<Course>,
    course_index: FxHashMap<String, usize>,
    classrooms: Vec<Classroom>,
    classroom_index: FxHashMap<String, RoomId>,
    students: Vec<Student>,
    student_index: FxHashMap<String, StudentId>,
    meetings: Vec<Meeting>,
    indices: RegistryIndices,
}

/// Lookup indices derived from meetings.
struct RegistryIndices {
    meetings_of_course: Vec<Vec<MeetingId>>,
    meetings_of_student: Vec<Vec<MeetingId>>,
    students_of_meeting: Vec<Vec<StudentId>>,
    legal_classrooms: Vec<Vec<RoomId>>,
}

impl Registry {
    /// Creates a new registry: validates the input, generates meetings and builds lookup indices.
    /// Fails fast on inconsistent input, before any meeting is generated.
    pub fn new(
        courses: Vec<Course>,
        classrooms: Vec<Classroom>,
        students: Vec<Student>,
    ) -> Result<Self, DataConsistencyError> {
        validate(&courses, &classrooms, &students)?;

        let mut courses = courses;
        courses.sort_by(|a, b| a.code.cmp(&b.code));

        let course_index = courses.iter().enumerate().map(|(idx, course)| (course.code.clone(), idx)).collect();
        let classroom_index =
            classrooms.iter().enumerate().map(|(idx, classroom)| (classroom.code.clone(), idx)).collect();
        let student_index = students.iter().enumerate().map(|(idx, student)| (student.id.clone(), idx)).collect();

        let (meetings, meetings_of_course) = generate_meetings(&courses);
        let indices = build_indices(&course_index, &classrooms, &students, &meetings, meetings_of_course);

        Ok(Self { courses, course_index, classrooms, classroom_index, students, student_index, meetings, indices })
    }

    /// Returns all courses sorted by their code.
    pub fn courses(&self) -> &[Course] {
        self.courses.as_slice()
    }

    /// Returns all classrooms in input order. Position in this list is the `RoomId`.
    pub fn classrooms(&self) -> &[Classroom] {
        self.classrooms.as_slice()
    }

    /// Returns all students in input order. Position in this list is the `StudentId`.
    pub fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    /// Returns all meetings ordered by their id.
    pub fn meetings(&self) -> &[Meeting] {
        self.meetings.as_slice()
    }

    /// Returns a course by its code.
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.course_index.get(code).map(|&idx| &self.courses[idx])
    }

    /// Returns a meeting by its id.
    pub fn meeting(&self, meeting: MeetingId) -> Option<&Meeting> {
        self.meetings.get(meeting)
    }

    /// Returns a classroom by its id.
    pub fn classroom(&self, room: RoomId) -> Option<&Classroom> {
        self.classrooms.get(room)
    }

    /// Returns a student by its index.
    pub fn student(&self, student: StudentId) -> Option<&Student> {
        self.students.get(student)
    }

    /// Returns room id of the classroom with given code.
    pub fn classroom_index(&self, code: &str) -> Option<RoomId> {
        self.classroom_index.get(code).copied()
    }

    /// Returns index of the student with given id.
    pub fn student_index(&self, id: &str) -> Option<StudentId> {
        self.student_index.get(id).copied()
    }

    /// Returns classroom codes in `RoomId` order.
    pub fn classroom_codes(&self) -> Vec<String> {
        self.classrooms.iter().map(|classroom| classroom.code.clone()).collect()
    }

    /// Returns amount of meetings.
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    /// Returns meetings of the course with given code. Empty for unknown course.
    pub fn meetings_of_course(&self, code: &str) -> &[MeetingId] {
        self.course_index.get(code).map_or(&[], |&idx| self.indices.meetings_of_course[idx].as_slice())
    }

    /// Returns meetings which the given student attends.
    pub fn meetings_of_student(&self, student: StudentId) -> &[MeetingId] {
        self.indices.meetings_of_student.get(student).map_or(&[], |meetings| meetings.as_slice())
    }

    /// Returns students attending the given meeting.
    pub fn students_of_meeting(&self, meeting: MeetingId) -> &[StudentId] {
        self.indices.students_of_meeting.get(meeting).map_or(&[], |students| students.as_slice())
    }

    /// Returns classrooms which can host the given meeting. Might be empty.
    pub fn legal_classrooms(&self, meeting: MeetingId) -> &[RoomId] {
        self.indices.legal_classrooms.get(meeting).map_or(&[], |rooms| rooms.as_slice())
    }

    /// Checks whether the room can host the meeting.
    pub fn is_legal(&self, meeting: MeetingId, room: RoomId) -> bool {
        self.legal_classrooms(meeting).contains(&room)
    }
}

/// Validates data consistency between students, courses and classrooms.
pub(crate) fn validate(
    courses: &[Course],
    classrooms: &[Classroom],
    students: &[Student],
) -> Result<(), DataConsistencyError> {
    let mut course_codes = FxHashSet::default();
    if let Some(course) = courses.iter().find(|course| !course_codes.insert(course.code.as_str())) {
        return Err(DataConsistencyError::DuplicateCourse(course.code.clone()));
    }

    let mut classroom_codes = FxHashSet::default();
    if let Some(classroom) = classrooms.iter().find(|classroom| !classroom_codes.insert(classroom.code.as_str())) {
        return Err(DataConsistencyError::DuplicateClassroom(classroom.code.clone()));
    }

    let mut student_ids = FxHashSet::default();
    students.iter().try_for_each(|student| {
        if !student_ids.insert(student.id.as_str()) {
            return Err(DataConsistencyError::DuplicateStudent(student.id.clone()));
        }

        if student.courses.len() != student.priorities.len() {
            return Err(DataConsistencyError::PriorityLengthMismatch {
                student: student.id.clone(),
                courses: student.courses.len(),
                priorities: student.priorities.len(),
            });
        }

        match student.courses.iter().find(|code| !course_codes.contains(code.as_str())) {
            Some(code) => {
                Err(DataConsistencyError::UnknownCourse { student: student.id.clone(), course: code.clone() })
            }
            None => Ok(()),
        }
    })
}

/// Expands each course into one hour meetings, one per credit. Expects courses to be sorted
/// by code, so meeting ids are reproducible.
pub(crate) fn generate_meetings(courses: &[Course]) -> (Vec<Meeting>, Vec<Vec<MeetingId>>) {
    let mut meetings = Vec::with_capacity(courses.iter().map(|course| course.credits).sum());

    let meetings_of_course = courses
        .iter()
        .map(|course| {
            (0..course.credits)
                .map(|_| {
                    let id = meetings.len();
                    meetings.push(Meeting::new(id, course));
                    id
                })
                .collect()
        })
        .collect();

    (meetings, meetings_of_course)
}

/// Precomputes student/meeting relations and legal classrooms of each meeting.
fn build_indices(
    course_index: &FxHashMap<String, usize>,
    classrooms: &[Classroom],
    students: &[Student],
    meetings: &[Meeting],
    meetings_of_course: Vec<Vec<MeetingId>>,
) -> RegistryIndices {
    let mut students_of_meeting = vec![Vec::new(); meetings.len()];

    let meetings_of_student = students
        .iter()
        .enumerate()
        .map(|(student_idx, student)| {
            let mut seen = FxHashSet::default();
            let meeting_ids = student
                .courses
                .iter()
                .filter(|code| seen.insert(code.as_str()))
                .filter_map(|code| course_index.get(code.as_str()))
                .flat_map(|&course_idx| meetings_of_course[course_idx].iter().copied())
                .collect::<Vec<_>>();

            meeting_ids.iter().for_each(|&meeting| students_of_meeting[meeting].push(student_idx));

            meeting_ids
        })
        .collect();

    let legal_classrooms = meetings
        .iter()
        .map(|meeting| {
            classrooms
                .iter()
                .enumerate()
                .filter(|(_, classroom)| classroom.can_host(meeting.student_count))
                .map(|(room, _)| room)
                .collect()
        })
        .collect();

    RegistryIndices { meetings_of_course, meetings_of_student, students_of_meeting, legal_classrooms }
}
