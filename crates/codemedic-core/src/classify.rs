//! Message classification and reply assembly.
//!
//! The whole pipeline is naive substring matching against the knowledge
//! base — no tokenization, no word boundaries. False positives (e.g. a
//! language id matching inside a longer word) are intentional, observable
//! behavior. `respond` is a total pure function: every input string,
//! including the empty string, yields a displayable reply.

use crate::knowledge::KnowledgeBase;

/// Fixed reply when no supported language is mentioned.
pub const NO_LANGUAGE_REPLY: &str = "❗ **I couldn't determine the programming language.**\n\
     Please mention the language in your message (e.g., Python, JavaScript, C++).";

/// Header prepended to matched advice blocks.
pub const SOLUTIONS_HEADER: &str = "✅ **The following solutions were found:**";

/// Outcome of classifying one message against the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResult<'kb> {
    /// No registered language id occurs in the message.
    NoLanguage,
    /// A language was detected; `advice` holds every matched advice block
    /// in table order (possibly empty).
    Language { id: &'kb str, advice: Vec<&'kb str> },
}

/// Classify a message: detect the language, then collect matching advice.
///
/// Language detection iterates registration order and stops at the first
/// language id contained in the lowercased message. Error detection then
/// collects *every* matching entry of that language's table, in table
/// order, without deduplication.
pub fn classify<'kb>(message: &str, kb: &'kb KnowledgeBase) -> ClassificationResult<'kb> {
    let normalized = message.to_lowercase();

    let Some(language) = kb
        .languages()
        .iter()
        .find(|lang| normalized.contains(&lang.id))
    else {
        return ClassificationResult::NoLanguage;
    };

    let advice = language
        .errors
        .iter()
        .filter(|e| normalized.contains(&e.name.to_lowercase()))
        .map(|e| e.advice.as_str())
        .collect();

    ClassificationResult::Language {
        id: &language.id,
        advice,
    }
}

/// Produce the full reply text for a message.
///
/// The returned string carries lightweight Markdown (bold markers, code
/// spans) verbatim; rendering is the transport's concern.
pub fn respond(message: &str, kb: &KnowledgeBase) -> String {
    match classify(message, kb) {
        ClassificationResult::NoLanguage => NO_LANGUAGE_REPLY.to_string(),
        ClassificationResult::Language { id, advice } if advice.is_empty() => format!(
            "❌ **I couldn't find a known error in your message for the language {}.**\n\
             Please check the message or describe the problem more clearly.",
            capitalize_first(id)
        ),
        ClassificationResult::Language { advice, .. } => {
            format!("{SOLUTIONS_HEADER}\n\n{}", advice.join("\n\n"))
        }
    }
}

/// Uppercase the first character for display, leaving the rest unchanged.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
