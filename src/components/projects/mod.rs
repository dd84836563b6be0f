mod chips;
mod section;
mod selection;
mod storage;

pub use section::ProjectsSection;
