//! # codemedic-core
//!
//! Core types, traits, configuration, the knowledge base, and the
//! message classifier for the CodeMedic bot.

pub mod classify;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod message;
pub mod traits;
