pub mod drafting;
pub mod grading;
pub mod offset;
