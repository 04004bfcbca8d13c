//! Build-time property classification.
//!
//! During an ahead-of-time build the processor walks every configuration
//! property key it discovers and has to decide whether the key's value is
//! resolved at build time (baked into the native image) or deferred to
//! runtime. [`PropertyChecks`] holds the ordered prefix patterns that drive
//! that decision and exposes the decision predicate.

use tracing::trace;

/// Directive token that sets the baseline decision to include.
pub const DEFAULT_INCLUDE_ALL: &str = "default-include-all";

/// Directive token that sets the baseline decision to exclude.
pub const DEFAULT_EXCLUDE_ALL: &str = "default-exclude-all";

/// Ordered prefix patterns controlling build-time property resolution.
///
/// Each pattern is exactly one of:
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | [`DEFAULT_INCLUDE_ALL`] | baseline decision becomes *include* |
/// | [`DEFAULT_EXCLUDE_ALL`] | baseline decision becomes *exclude* |
/// | `spring.foo.` | inclusion: keys under this prefix resolve at build time |
/// | `!management.foo.` | exclusion: keys under this prefix stay runtime |
///
/// Prefixes are compared as raw strings, no glob or regex semantics. The
/// longest matching prefix wins; inclusion wins ties. A later directive
/// overrides an earlier one. Malformed patterns are interpreted as ordinary
/// prefixes rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyChecks {
    patterns: Vec<String>,
}

impl PropertyChecks {
    /// Creates a pattern list from an ordered sequence of patterns.
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an empty pattern list, which disables property checking.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Returns the patterns in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns true when property checking is enabled.
    ///
    /// An empty pattern list disables the feature entirely.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.patterns.is_empty()
    }

    /// Determines whether the given property key should be resolved at
    /// build time.
    ///
    /// Walks the pattern list once, tracking the baseline decision set by
    /// directive tokens and the longest explicit inclusion and exclusion
    /// matches. When no explicit pattern matches, the baseline applies;
    /// otherwise the more specific match wins, with inclusion preferred on
    /// ties. Returns false for every key while checking is disabled.
    #[must_use]
    pub fn check_at_build_time(&self, key: &str) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let mut baseline = true;
        // Longest explicit match per polarity. None orders below Some(0),
        // so a zero-length match still defeats "no match" while losing
        // every tie.
        let mut best_include: Option<usize> = None;
        let mut best_exclude: Option<usize> = None;
        for pattern in &self.patterns {
            if pattern == DEFAULT_INCLUDE_ALL {
                baseline = true;
            } else if pattern == DEFAULT_EXCLUDE_ALL {
                baseline = false;
            } else if let Some(body) = pattern.strip_prefix('!') {
                // Exclusion: e.g. !management.foo.bar.
                if key.starts_with(body) {
                    best_exclude = best_exclude.max(Some(body.len()));
                }
            } else if key.starts_with(pattern.as_str()) {
                // Inclusion: e.g. spring.foo.
                best_include = best_include.max(Some(pattern.len()));
            }
        }
        let decision = if best_include.is_none() && best_exclude.is_none() {
            baseline
        } else {
            best_exclude <= best_include
        };
        trace!(key, decision, "build-time property check");
        decision
    }
}
