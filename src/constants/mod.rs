pub mod blooms_keywords;
pub mod quiz_prompt;
