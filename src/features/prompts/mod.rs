//! Writing prompts and the answers given to them.

mod catalog;
mod storage;

pub use catalog::{
    catalog, find, random_prompt, random_prompt_with, PromptCategory, WritingPrompt,
};
pub use storage::{PromptResponse, PromptStorage, RECENT_RESPONSES};
