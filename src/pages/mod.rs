pub mod input;
pub mod progress;
pub mod select;
