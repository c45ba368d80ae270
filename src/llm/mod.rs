pub mod client;
pub mod parser;
pub mod prompts;

pub use client::*;
pub use parser::*;
pub use prompts::*;
