//! Contains domain models: immutable courses, classrooms, students, meetings and
//! the registry which derives meetings and lookup indices from them.

mod domain;
pub use self::domain::*;

mod error;
pub use self::error::*;

mod registry;
pub use self::registry::*;
