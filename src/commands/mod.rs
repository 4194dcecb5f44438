pub mod completion;
pub mod project;
