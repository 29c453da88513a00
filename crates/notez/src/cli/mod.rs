pub mod print;
pub mod prompt;
pub mod styles;
