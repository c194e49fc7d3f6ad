// src/domain/slug/options.rs
use crate::domain::errors::OptionsError;
use crate::domain::slug::record::{SlugMethod, SluggableRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_TARGET: &str = "slug";

pub const INVALID_SLUGGATOR: &str =
    "if you provide a sluggator it must be a method name or a callable";

pub type SlugFunction<R> = Arc<dyn Fn(&str, &R) -> String + Send + Sync>;

/// Sluggator override as supplied by the caller, before resolution.
pub enum Sluggator<R> {
    Method(String),
    Function(SlugFunction<R>),
}

impl<R> Sluggator<R> {
    #[must_use]
    pub fn method(name: impl Into<String>) -> Self {
        Self::Method(name.into())
    }

    #[must_use]
    pub fn function(f: impl Fn(&str, &R) -> String + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }
}

/// Resolved slug algorithm.
pub enum SluggatorStrategy<R> {
    Default,
    Method { name: String, method: SlugMethod<R> },
    Function(SlugFunction<R>),
}

impl<R> Clone for SluggatorStrategy<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Default => Self::Default,
            Self::Method { name, method } => Self::Method {
                name: name.clone(),
                method: *method,
            },
            Self::Function(f) => Self::Function(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for SluggatorStrategy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Method { name, .. } => f.debug_tuple("Method").field(name).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Per-model slug configuration. Immutable once built.
pub struct SluggableOptions<R> {
    source: String,
    target: String,
    frozen: bool,
    sluggator: SluggatorStrategy<R>,
}

impl<R> Clone for SluggableOptions<R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            target: self.target.clone(),
            frozen: self.frozen,
            sluggator: self.sluggator.clone(),
        }
    }
}

impl<R> fmt::Debug for SluggableOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SluggableOptions")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("frozen", &self.frozen)
            .field("sluggator", &self.sluggator)
            .finish()
    }
}

impl<R: SluggableRecord> SluggableOptions<R> {
    #[must_use]
    pub fn builder() -> SluggableOptionsBuilder<R> {
        SluggableOptionsBuilder::default()
    }

    /// Builds options from deserialized settings. A string `sluggator` names a method
    /// on `R`; any other value is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`SluggableOptionsBuilder::build`], plus
    /// [`OptionsError::InvalidArgument`] for a non-string `sluggator`.
    pub fn from_settings(settings: SluggableSettings) -> Result<Self, OptionsError> {
        let SluggableSettings {
            source,
            target,
            frozen,
            sluggator,
        } = settings;

        let mut builder = Self::builder();
        if let Some(source) = source {
            builder = builder.source(source);
        }
        if let Some(target) = target {
            builder = builder.target(target);
        }
        if let Some(frozen) = frozen {
            builder = builder.frozen(frozen);
        }
        match sluggator {
            None => {}
            Some(serde_json::Value::String(name)) => {
                builder = builder.sluggator(Sluggator::method(name));
            }
            Some(_) => return Err(OptionsError::InvalidArgument(INVALID_SLUGGATOR.into())),
        }

        builder.build()
    }
}

impl<R> SluggableOptions<R> {
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn frozen(&self) -> bool {
        self.frozen
    }

    #[must_use]
    pub const fn sluggator(&self) -> &SluggatorStrategy<R> {
        &self.sluggator
    }
}

pub struct SluggableOptionsBuilder<R> {
    source: Option<String>,
    target: Option<String>,
    frozen: Option<bool>,
    sluggator: Option<Sluggator<R>>,
}

impl<R> Default for SluggableOptionsBuilder<R> {
    fn default() -> Self {
        Self {
            source: None,
            target: None,
            frozen: None,
            sluggator: None,
        }
    }
}

impl<R: SluggableRecord> SluggableOptionsBuilder<R> {
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn frozen(mut self, frozen: bool) -> Self {
        self.frozen = Some(frozen);
        self
    }

    #[must_use]
    pub fn sluggator(mut self, sluggator: Sluggator<R>) -> Self {
        self.sluggator = Some(sluggator);
        self
    }

    /// # Errors
    ///
    /// [`OptionsError::MissingArgument`] when `source` is missing or empty, and
    /// [`OptionsError::InvalidArgument`] when a method sluggator does not resolve on `R`.
    pub fn build(self) -> Result<SluggableOptions<R>, OptionsError> {
        let source = self
            .source
            .filter(|source| !source.is_empty())
            .ok_or(OptionsError::MissingArgument("source"))?;

        let sluggator = match self.sluggator {
            None => SluggatorStrategy::Default,
            Some(Sluggator::Function(f)) => SluggatorStrategy::Function(f),
            Some(Sluggator::Method(name)) => {
                let method = R::slug_method(&name)
                    .ok_or_else(|| OptionsError::InvalidArgument(INVALID_SLUGGATOR.into()))?;
                SluggatorStrategy::Method { name, method }
            }
        };

        Ok(SluggableOptions {
            source,
            target: self.target.unwrap_or_else(|| DEFAULT_TARGET.to_string()),
            frozen: self.frozen.unwrap_or(true),
            sluggator,
        })
    }
}

/// Serializable form of the options, e.g. loaded from a JSON model definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SluggableSettings {
    pub source: Option<String>,
    pub target: Option<String>,
    pub frozen: Option<bool>,
    pub sluggator: Option<serde_json::Value>,
}
