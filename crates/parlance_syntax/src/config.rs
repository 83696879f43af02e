//! Configuration for the realiser.

/// Configuration for the realiser.
///
/// Controls premodifier ordering, lexicon use, and debug logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RealiserConfig {
    /// Order premodifiers in every noun phrase, not only flagged ones.
    pub sort_premodifiers: bool,

    /// Look up tokens that carry no lexical entry.
    pub lookup_missing_entries: bool,

    /// Log the input tree and realised text at `debug` level.
    pub debug: bool,
}

impl Default for RealiserConfig {
    fn default() -> Self {
        Self {
            sort_premodifiers: false,
            lookup_missing_entries: true,
            debug: false,
        }
    }
}

impl RealiserConfig {
    /// Creates a configuration that inflects by rule only.
    ///
    /// Tokens already backed by an entry still use it.
    #[must_use]
    pub fn strict_rules() -> Self {
        Self {
            lookup_missing_entries: false,
            ..Self::default()
        }
    }

    /// Creates a configuration with debug logging on.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }

    /// Builder method to set premodifier ordering.
    #[must_use]
    pub fn with_sort_premodifiers(mut self, sort: bool) -> Self {
        self.sort_premodifiers = sort;
        self
    }

    /// Builder method to enable/disable lexicon lookups.
    #[must_use]
    pub fn with_lookup_missing_entries(mut self, lookup: bool) -> Self {
        self.lookup_missing_entries = lookup;
        self
    }

    /// Builder method to enable/disable debug logging.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
