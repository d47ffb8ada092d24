//! Exclusion policy for sets and card types.
//!
//! The loader never hardcodes what to reject - callers inject predicates
//! via `ExclusionPolicy`. The default policy rejects the joke and
//! non-constructed material the pipeline was built to avoid.

/// Predicate over a set name. Returns `true` to exclude the whole set.
pub type SetFilter = Box<dyn Fn(&str) -> bool>;

/// Predicate over a card's type list. Returns `true` to exclude the card.
pub type TypeFilter = Box<dyn Fn(&[String]) -> bool>;

/// Set names rejected by the default policy.
pub const DEFAULT_SET_DENYLIST: [&str; 4] = ["Unglued", "Unhinged", "Unstable", "Celebration"];

/// Card types rejected by the default policy.
pub const DEFAULT_TYPE_DENYLIST: [&str; 5] =
    ["Conspiracy", "Plane", "Scheme", "Phenomenon", "Vanguard"];

/// Injectable set- and type-exclusion strategy.
///
/// ## Example
///
/// ```
/// use card_corpus::corpus::ExclusionPolicy;
///
/// // Default policy rejects the fixed denylists.
/// let policy = ExclusionPolicy::new();
/// assert!(policy.excludes_set("Unglued"));
/// assert!(!policy.excludes_set("Alpha"));
///
/// // Callers can override either predicate.
/// let keep_everything = ExclusionPolicy::new()
///     .with_set_filter(|_| false)
///     .with_type_filter(|_| false);
/// assert!(!keep_everything.excludes_set("Unglued"));
/// ```
pub struct ExclusionPolicy {
    set_filter: SetFilter,
    type_filter: TypeFilter,
}

impl ExclusionPolicy {
    /// Create the default policy (fixed set and type denylists).
    #[must_use]
    pub fn new() -> Self {
        Self {
            set_filter: Box::new(|name| DEFAULT_SET_DENYLIST.contains(&name)),
            type_filter: Box::new(|types| {
                types
                    .iter()
                    .any(|t| DEFAULT_TYPE_DENYLIST.contains(&t.as_str()))
            }),
        }
    }

    /// Replace the set predicate.
    #[must_use]
    pub fn with_set_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.set_filter = Box::new(filter);
        self
    }

    /// Replace the type predicate.
    #[must_use]
    pub fn with_type_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&[String]) -> bool + 'static,
    {
        self.type_filter = Box::new(filter);
        self
    }

    /// Should this set be skipped entirely?
    #[must_use]
    pub fn excludes_set(&self, set_name: &str) -> bool {
        (self.set_filter)(set_name)
    }

    /// Should a card with these types be skipped?
    #[must_use]
    pub fn excludes_types(&self, types: &[String]) -> bool {
        (self.type_filter)(types)
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExclusionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusionPolicy").finish_non_exhaustive()
    }
}
