//! CLIL glossary web service.
//!
//! Accepts a topic and an English proficiency level, forwards a templated
//! prompt to an LLM chat-completion API, and returns the generated glossary
//! text. A second endpoint converts glossary text into a downloadable .docx
//! document.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod llm;
pub mod prompt;
