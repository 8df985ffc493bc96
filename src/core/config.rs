//! Session configuration.
//!
//! A session is configured once at startup with:
//! - `seed`: drives every card the catalog hands out
//! - `catalog`: the card definitions to sample from
//!
//! Nothing is read from files or the environment.

use crate::cards::Catalog;

use super::rng::GameRng;

/// Configuration for a `Session`.
///
/// ## Example
///
/// ```
/// use card_battle::cards::Catalog;
/// use card_battle::core::SessionConfig;
///
/// let config = SessionConfig::new(7).with_catalog(Catalog::standard());
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.catalog.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// RNG seed for card sampling.
    pub seed: u64,

    /// Cards that `obtain_card` samples from.
    pub catalog: Catalog,
}

impl SessionConfig {
    /// Create a configuration with the standard catalog.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            catalog: Catalog::standard(),
        }
    }

    /// Create a configuration with a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }

    /// Replace the catalog (builder pattern).
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Build the RNG described by this configuration.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_entropy()
    }
}
