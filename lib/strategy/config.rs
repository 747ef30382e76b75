use crate::solver::{Http, Remote, TransportError};
use crate::strategy::{DuplicateRegistration, Registry, Strategy};
use crate::util::Build;
use derive_more::{Display, Error, From};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr, time::Duration};
use tracing::instrument;
use url::Url;

/// Runtime configuration for a [`Strategy`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum StrategyConfig {
    /// A solver reachable over HTTP.
    Remote {
        /// Where requests are posted to.
        #[cfg_attr(test, strategy(tests::any_endpoint()))]
        endpoint: Url,

        /// The maximum time to wait for each answer.
        #[cfg_attr(test, strategy(tests::any_timeout()))]
        #[serde(with = "humantime_serde")]
        timeout: Duration,

        /// The tag of the solver strategy, e.g. `"negamax"`.
        #[cfg_attr(test, strategy("[a-z]{1,16}"))]
        ai: String,
    },
}

impl fmt::Display for StrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`StrategyConfig`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse strategy configuration")]
pub struct ParseStrategyConfigError(ron::de::SpannedError);

impl FromStr for StrategyConfig {
    type Err = ParseStrategyConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Build<Remote> for StrategyConfig {
    type Error = TransportError;

    #[instrument(level = "trace", err)]
    fn build(self) -> Result<Remote, Self::Error> {
        match self {
            StrategyConfig::Remote {
                endpoint,
                timeout,
                ai,
            } => Ok(Remote::new(ai, Http::new(endpoint, timeout)?)),
        }
    }
}

/// A named collection of [`StrategyConfig`]s.
///
/// Entries keep the order in which they were written, including repeated names.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Catalog(Vec<(String, StrategyConfig)>);

impl Catalog {
    /// The configured entries.
    pub fn entries(&self) -> &[(String, StrategyConfig)] {
        &self.0
    }
}

impl<B, M> Build<Registry<B, M>> for Catalog
where
    Remote: Strategy<B, M>,
{
    type Error = CatalogError;

    /// Sets up every configured strategy and registers it under its name.
    #[instrument(level = "debug", skip(self), fields(entries = self.0.len()), err)]
    fn build(self) -> Result<Registry<B, M>, Self::Error> {
        let mut builder = Registry::builder();

        for (name, config) in self.0 {
            let remote: Remote = config.build()?;
            builder.register(name, remote)?;
        }

        Ok(builder.freeze())
    }
}

impl FromIterator<(String, StrategyConfig)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, StrategyConfig)>>(iter: I) -> Self {
        Catalog(iter.into_iter().collect())
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(n, c)| (n, c)))
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Entries;

        impl<'de> Visitor<'de> for Entries {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of strategy names to configurations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }

                Ok(Catalog(entries))
            }
        }

        deserializer.deserialize_map(Entries)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing a [`Catalog`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse strategy catalog")]
pub struct ParseCatalogError(ron::de::SpannedError);

impl FromStr for Catalog {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// The reason why a [`Catalog`] could not be set up.
#[derive(Debug, Display, Error, From)]
pub enum CatalogError {
    Duplicate(DuplicateRegistration),
    Transport(TransportError),
}
