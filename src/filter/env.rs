// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::str::FromStr;

pub use env_filter::Builder as EnvFilterBuilder;
use log::LevelFilter;
use log::Metadata;

use crate::Error;
use crate::filter::Filter;
use crate::filter::FilterResult;

const DEFAULT_FILTER_ENV: &str = "RUST_LOG";

/// A filter consistent with the [`env_logger`] syntax.
///
/// [`env_logger`]: https://docs.rs/env_logger/
#[derive(Debug)]
pub struct EnvFilter(env_filter::Filter);

impl EnvFilter {
    /// Initializes the filter builder from the environment using default variable name `RUST_LOG`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logappend::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env();
    /// ```
    pub fn from_default_env() -> Self {
        EnvFilter::from_env(DEFAULT_FILTER_ENV)
    }

    /// Initializes the filter builder from the environment using default variable name `RUST_LOG`.
    /// If the variable is not set, the default value will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logappend::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env_or("info");
    /// ```
    pub fn from_default_env_or<'a, V>(default: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        EnvFilter::from_env_or(DEFAULT_FILTER_ENV, default)
    }

    /// Initializes the filter builder from the environment using specific variable name.
    ///
    /// # Examples
    ///
    /// ```
    /// use logappend::filter::EnvFilter;
    /// let filter = EnvFilter::from_env("MY_LOG");
    /// ```
    pub fn from_env<'a, E>(name: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        let mut builder = EnvFilterBuilder::new();
        let name = name.into();
        if let Ok(s) = std::env::var(&*name) {
            builder.parse(&s);
        }
        EnvFilter::new(builder)
    }

    /// Initializes the filter builder from the environment using specific variable name.
    /// If the variable is not set, the default value will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logappend::filter::EnvFilter;
    /// let filter = EnvFilter::from_env_or("MY_LOG", "info");
    /// ```
    pub fn from_env_or<'a, 'b, E, V>(name: E, default: V) -> Self
    where
        E: Into<Cow<'a, str>>,
        V: Into<Cow<'b, str>>,
    {
        let mut builder = EnvFilterBuilder::new();
        let name = name.into();
        let default = default.into();
        if let Ok(s) = std::env::var(&*name) {
            builder.parse(&s);
        } else {
            builder.parse(&default);
        }
        EnvFilter::new(builder)
    }

    /// Initializes the filter builder from the [EnvFilterBuilder].
    pub fn new(mut builder: EnvFilterBuilder) -> Self {
        EnvFilter(builder.build())
    }
}

impl Filter for EnvFilter {
    fn enabled(&self, metadata: &Metadata) -> FilterResult {
        if self.0.enabled(metadata) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }

    fn matches(&self, record: &log::Record) -> FilterResult {
        if self.0.matches(record) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}

impl From<LevelFilter> for EnvFilter {
    fn from(filter: LevelFilter) -> Self {
        let mut builder = EnvFilterBuilder::new();
        builder.filter_level(filter);
        EnvFilter::new(builder)
    }
}

impl<'a> From<&'a str> for EnvFilter {
    fn from(filter: &'a str) -> Self {
        let mut builder = EnvFilterBuilder::new();
        builder.parse(filter);
        EnvFilter::new(builder)
    }
}

impl FromStr for EnvFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = EnvFilterBuilder::new();
        builder
            .try_parse(s)
            .map_err(|err| Error::new("failed to parse filter").with_source(err))?;
        Ok(EnvFilter::new(builder))
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_level_filter() {
        let filter = EnvFilter::from(LevelFilter::Info);
        assert_eq!(
            filter.enabled(&metadata(Level::Warn, "app")),
            FilterResult::Neutral
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Debug, "app")),
            FilterResult::Reject
        );
    }

    #[test]
    fn test_directive_filter() {
        let filter = EnvFilter::from("info,app::db=trace");
        assert_eq!(
            filter.enabled(&metadata(Level::Trace, "app::db")),
            FilterResult::Neutral
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Trace, "app::http")),
            FilterResult::Reject
        );
    }

    #[test]
    fn test_invalid_directive() {
        assert!(EnvFilter::from_str("app=notalevel").is_err());
    }
}
