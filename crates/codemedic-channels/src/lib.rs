//! # codemedic-channels
//!
//! Messaging platform integrations for CodeMedic.

pub mod telegram;
