use crate::strategy::Strategy;
use derive_more::{Display, Error};
use std::collections::{hash_map::Entry, HashMap};
use std::{fmt, sync::Arc};
use tracing::{debug, instrument};

type Shared<B, M> = Arc<dyn Strategy<B, M> + Send + Sync>;

/// The reason why a [`Strategy`] could not be registered.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "a strategy named `{}` is already registered", name)]
pub struct DuplicateRegistration {
    #[error(not(source))]
    name: String,
}

impl DuplicateRegistration {
    /// Constructs [`DuplicateRegistration`] for the strategy `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        DuplicateRegistration { name: name.into() }
    }

    /// The name that was already taken.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The reason why a [`Strategy`] could not be found.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "no strategy named `{}` is registered", name)]
pub struct StrategyNotFound {
    #[error(not(source))]
    name: String,
}

impl StrategyNotFound {
    /// Constructs [`StrategyNotFound`] for the strategy `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        StrategyNotFound { name: name.into() }
    }

    /// The name that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Collects named strategies before they are frozen into a [`Registry`].
pub struct RegistryBuilder<B, M> {
    strategies: HashMap<String, Shared<B, M>>,
}

impl<B, M> Default for RegistryBuilder<B, M> {
    fn default() -> Self {
        RegistryBuilder {
            strategies: HashMap::new(),
        }
    }
}

impl<B, M> fmt::Debug for RegistryBuilder<B, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.strategies.keys().collect();
        names.sort_unstable();
        f.debug_tuple("RegistryBuilder").field(&names).finish()
    }
}

impl<B, M> RegistryBuilder<B, M> {
    /// Registers `strategy` under `name`.
    ///
    /// Names are case-sensitive. A name that is already taken is left untouched.
    pub fn register<N, S>(
        &mut self,
        name: N,
        strategy: S,
    ) -> Result<&mut Self, DuplicateRegistration>
    where
        N: Into<String>,
        S: Strategy<B, M> + Send + Sync + 'static,
    {
        match self.strategies.entry(name.into()) {
            Entry::Occupied(e) => Err(DuplicateRegistration::new(e.key().as_str())),
            Entry::Vacant(e) => {
                debug!(name = %e.key(), "registered strategy");
                e.insert(Arc::new(strategy));
                Ok(self)
            }
        }
    }

    /// Freezes the registered strategies, no more can be added afterwards.
    pub fn freeze(self) -> Registry<B, M> {
        Registry {
            strategies: self.strategies,
        }
    }
}

/// An immutable lookup table of named strategies.
///
/// Lookups may be performed concurrently from any number of threads.
pub struct Registry<B, M> {
    strategies: HashMap<String, Shared<B, M>>,
}

impl<B, M> fmt::Debug for Registry<B, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Registry").field(&self.names()).finish()
    }
}

impl<B, M> Registry<B, M> {
    /// Starts collecting strategies.
    pub fn builder() -> RegistryBuilder<B, M> {
        RegistryBuilder::default()
    }

    /// The strategy registered under `name`.
    #[instrument(level = "trace", skip(self), err)]
    pub fn lookup(&self, name: &str) -> Result<Shared<B, M>, StrategyNotFound> {
        match self.strategies.get(name) {
            Some(s) => Ok(s.clone()),
            None => Err(StrategyNotFound::new(name)),
        }
    }

    /// The registered names in lexicographical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether no strategy is registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Color, Snapshot};
    use crate::strategy::MockStrategy;
    use std::collections::HashSet;
    use test_strategy::proptest;

    fn answering(m: u32) -> MockStrategy<Vec<u8>, u32> {
        let mut strategy = MockStrategy::new();
        strategy.expect_find_best_move().returning(move |_| Ok(m));
        strategy
    }

    #[proptest]
    fn lookup_returns_the_registered_strategy(
        #[strategy("[a-z]{1,8}")] name: String,
        m: u32,
        c: Color,
    ) {
        let mut builder = Registry::builder();
        builder.register(name.clone(), answering(m))?;
        let registry = builder.freeze();

        let snapshot = Snapshot::new(Vec::new(), vec![m], c);
        let strategy = registry.lookup(&name)?;
        assert_eq!(strategy.find_best_move(&snapshot).ok(), Some(m));
    }

    #[proptest]
    fn register_fails_if_name_is_taken(
        #[strategy("[a-z]{1,8}")] name: String,
        a: u32,
        b: u32,
        c: Color,
    ) {
        let mut builder = Registry::builder();
        builder.register(name.clone(), answering(a))?;

        assert_eq!(
            builder.register(name.clone(), answering(b)).err(),
            Some(DuplicateRegistration::new(name.clone()))
        );

        let registry = builder.freeze();
        let snapshot = Snapshot::new(Vec::new(), vec![a, b], c);
        assert_eq!(registry.lookup(&name)?.find_best_move(&snapshot).ok(), Some(a));
    }

    #[proptest]
    fn names_are_case_sensitive(#[strategy("[a-z]{1,8}")] name: String, a: u32, b: u32) {
        let mut builder = Registry::builder();
        builder.register(name.clone(), answering(a))?;
        builder.register(name.to_uppercase(), answering(b))?;
        assert_eq!(builder.freeze().len(), 2);
    }

    #[proptest]
    fn lookup_fails_if_name_is_not_registered(
        #[strategy("[a-z]{1,8}")] name: String,
        #[strategy("[A-Z]{1,8}")] other: String,
        m: u32,
    ) {
        let mut builder = Registry::builder();
        builder.register(name, answering(m))?;
        let registry = builder.freeze();

        assert_eq!(
            registry.lookup(&other).err(),
            Some(StrategyNotFound::new(other))
        );
    }

    #[proptest]
    fn empty_registry_finds_nothing(name: String) {
        let registry = Registry::<Vec<u8>, u32>::builder().freeze();
        assert!(registry.is_empty());
        assert_eq!(registry.lookup(&name).err(), Some(StrategyNotFound::new(name)));
    }

    #[proptest]
    fn names_are_sorted(#[any(proptest::sample::size_range(0..=8).lift())] names: HashSet<String>) {
        let mut builder = Registry::builder();
        for name in &names {
            builder.register(name.as_str(), answering(0))?;
        }

        let registry = builder.freeze();
        let mut expected: Vec<_> = names.iter().map(String::as_str).collect();
        expected.sort_unstable();

        assert_eq!(registry.len(), names.len());
        assert_eq!(registry.names(), expected);
    }
}
