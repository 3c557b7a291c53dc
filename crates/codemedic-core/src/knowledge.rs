//! The language/error knowledge base.
//!
//! An ordered table mapping language ids to known error names and canned
//! advice. Registration order is observable behavior: language detection
//! returns the first match in registration order, and advice for a language
//! is collected in table order. Backed by `Vec`s, never a hash map, so
//! iteration order is registration order by construction.

/// One known error and its canned advice.
#[derive(Debug, Clone)]
pub struct ErrorEntry {
    pub name: String,
    pub advice: String,
}

/// All known errors for one language, in registration order.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    /// Canonical lowercase language id (e.g. "python", "c++").
    pub id: String,
    pub errors: Vec<ErrorEntry>,
}

/// The full language → error → advice lookup structure.
///
/// Built once at startup and read-only thereafter; shared across concurrent
/// message handlers without locking.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    languages: Vec<LanguageEntry>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language and its error table. Language ids are stored
    /// lowercase; matching against message text is case-insensitive.
    /// Re-registering an id is a caller bug; the first entry keeps winning
    /// since detection stops at the first match.
    pub fn register(&mut self, id: &str, errors: &[(&str, &str)]) {
        self.languages.push(LanguageEntry {
            id: id.to_lowercase(),
            errors: errors
                .iter()
                .map(|(name, advice)| ErrorEntry {
                    name: (*name).to_string(),
                    advice: (*advice).to_string(),
                })
                .collect(),
        });
    }

    /// Languages in registration order.
    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    /// Ordered list of supported language ids, for the welcome/help texts.
    pub fn supported_languages(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.id.as_str()).collect()
    }

    /// The built-in knowledge base: common errors for Python, JavaScript,
    /// and C++. This is configuration data, not logic.
    pub fn builtin() -> Self {
        let mut kb = Self::new();
        kb.register(
            "python",
            &[
                (
                    "IndentationError",
                    "🔴 **IndentationError:**\n\
                     - Ensure that spaces or tabs are consistent in the code.\n\
                     - Try using a text editor that supports Python like VSCode or PyCharm.",
                ),
                (
                    "ModuleNotFoundError",
                    "🔴 **ModuleNotFoundError:**\n\
                     - Ensure the library is installed using `pip install`.\n\
                     - Check that the library name is spelled correctly.",
                ),
            ],
        );
        kb.register(
            "javascript",
            &[
                (
                    "SyntaxError",
                    "🔴 **SyntaxError:**\n\
                     - Check for properly closed brackets `{}` or `[]`.\n\
                     - Ensure to place a semicolon `;` if required.",
                ),
                (
                    "TypeError",
                    "🔴 **TypeError:**\n\
                     - Ensure that variables contain the correct values.\n\
                     - For example, a number cannot be called as a function.",
                ),
            ],
        );
        kb.register(
            "c++",
            &[
                (
                    "Segmentation fault",
                    "🔴 **Segmentation fault:**\n\
                     - Check pointers and ensure they point to valid memory locations.\n\
                     - Ensure memory is allocated using `new` or `malloc` if necessary.",
                ),
                (
                    "Compilation Error",
                    "🔴 **Compilation Error:**\n\
                     - Check for missing libraries or syntax errors.",
                ),
            ],
        );
        kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_language_order() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.supported_languages(), vec!["python", "javascript", "c++"]);
    }

    #[test]
    fn test_register_lowercases_id() {
        let mut kb = KnowledgeBase::new();
        kb.register("Python", &[("IndentationError", "fix your tabs")]);
        assert_eq!(kb.supported_languages(), vec!["python"]);
    }

    #[test]
    fn test_error_table_preserves_order() {
        let kb = KnowledgeBase::builtin();
        let python = &kb.languages()[0];
        let names: Vec<&str> = python.errors.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["IndentationError", "ModuleNotFoundError"]);
    }
}
