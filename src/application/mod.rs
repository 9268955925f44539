pub mod add_to_project;

pub use add_to_project::AddToProject;
