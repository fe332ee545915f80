pub mod profile;
pub mod student;
pub mod university;

pub use profile::NewProfile;
pub use student::StudentProfile;
pub use university::UniversityRecord;
