pub mod keywords;
pub mod prompts;
pub mod topics;
