use indexmap::IndexMap;

/// Locale-scoped translation facility for user-facing strings.
///
/// Lookups that miss the table pass the prompt through unchanged, so an empty
/// table behaves as an identity translator.
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    locale: String,
    translations: IndexMap<String, String>,
}

impl Default for Language {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Language {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            translations: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_translation(mut self, prompt: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_translation(prompt, text);
        self
    }

    pub fn insert_translation(&mut self, prompt: impl Into<String>, text: impl Into<String>) {
        self.translations.insert(prompt.into(), text.into());
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn has_translation(&self, prompt: &str) -> bool {
        self.translations.contains_key(prompt)
    }

    /// Returns the translated text for `prompt`, or the prompt itself when the
    /// table has no entry for it.
    #[must_use]
    pub fn translate(&self, prompt: &str) -> String {
        self.translations
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| prompt.to_owned())
    }
}
