//! Tab-type registry: keyword-to-type associations and classification

/// Registry of tab types identified by header keywords.
///
/// A tab type is a user-defined label (e.g. `"TestCases"`, `"Configs"`)
/// associated with one or more identifying keywords. A sheet whose header row
/// contains any of a type's keywords classifies as that type.
///
/// By default a keyword may belong to at most one type, so classification
/// stays deterministic; [`set_multi_type_allowed`](Self::set_multi_type_allowed)
/// relaxes this for keywords that legitimately span types.
///
/// ## Example
///
/// ```rust
/// use tabkind_core::TabTypeRegistry;
///
/// let mut registry = TabTypeRegistry::new();
/// registry.register("TestCases", "TestFileName");
/// registry.register("Configs", "ConfigName");
///
/// let types = registry.classify(&["ConfigName", "Owner"]);
/// assert_eq!(types, vec!["Configs".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabTypeRegistry {
    /// Type entries in registration order
    types: Vec<TypeEntry>,
    /// Whether one keyword may identify more than one type
    multi_type_allowed: bool,
}

#[derive(Debug, Clone)]
struct TypeEntry {
    label: String,
    keywords: Vec<String>,
}

impl TabTypeRegistry {
    /// Create a new empty registry with the single-type policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether one keyword may identify more than one type
    pub fn multi_type_allowed(&self) -> bool {
        self.multi_type_allowed
    }

    /// Allow or forbid registering one keyword under several types.
    ///
    /// Affects future [`register`](Self::register) calls only; existing
    /// associations are kept as they are.
    pub fn set_multi_type_allowed(&mut self, allowed: bool) {
        self.multi_type_allowed = allowed;
    }

    /// Register `keyword` as identifying `tab_type`.
    ///
    /// Registration is additive and never overwrites. The call is a silent
    /// no-op when:
    /// - `tab_type` or `keyword` is empty,
    /// - the single-type policy is active and `keyword` already belongs to
    ///   any type (first registration wins),
    /// - `keyword` is already registered for `tab_type`.
    pub fn register(&mut self, tab_type: &str, keyword: &str) {
        if tab_type.is_empty() || keyword.is_empty() {
            return;
        }

        if !self.multi_type_allowed
            && self
                .types
                .iter()
                .any(|entry| entry.keywords.iter().any(|k| k == keyword))
        {
            return;
        }

        let index = match self.types.iter().position(|entry| entry.label == tab_type) {
            Some(index) => index,
            None => {
                self.types.push(TypeEntry {
                    label: tab_type.to_string(),
                    keywords: Vec::new(),
                });
                self.types.len() - 1
            }
        };

        let entry = &mut self.types[index];
        if !entry.keywords.iter().any(|k| k == keyword) {
            entry.keywords.push(keyword.to_string());
        }
    }

    /// Remove `keyword` from `tab_type`.
    ///
    /// A silent no-op when the type or the keyword is unknown. The type entry
    /// itself is kept even when its keyword list becomes empty.
    pub fn unregister(&mut self, tab_type: &str, keyword: &str) {
        if let Some(entry) = self.types.iter_mut().find(|entry| entry.label == tab_type) {
            entry.keywords.retain(|k| k != keyword);
        }
    }

    /// The keywords registered for `tab_type`, or `None` for unknown types
    pub fn keywords_for_type(&self, tab_type: &str) -> Option<&[String]> {
        self.types
            .iter()
            .find(|entry| entry.label == tab_type)
            .map(|entry| entry.keywords.as_slice())
    }

    /// All type labels that ever had a successful registration, in
    /// registration order
    pub fn registered_types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|entry| entry.label.as_str())
    }

    /// Classify a header-keyword list against the registry.
    ///
    /// Returns each type at most once, in registry order, whose keyword list
    /// intersects `keywords`. Per type the scan stops at the first matching
    /// keyword. An empty input classifies to no types.
    pub fn classify<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<String> {
        if keywords.is_empty() {
            return Vec::new();
        }

        self.types
            .iter()
            .filter(|entry| {
                entry
                    .keywords
                    .iter()
                    .any(|k| keywords.iter().any(|header| header.as_ref() == k))
            })
            .map(|entry| entry.label.clone())
            .collect()
    }
}
