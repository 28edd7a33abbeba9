pub mod resume;
pub mod selection;

pub use resume::{Education, Experience, PersonalInfo, Project, Resume, Skill};
pub use selection::Selection;
