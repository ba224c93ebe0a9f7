pub mod fs;
pub mod sys;
