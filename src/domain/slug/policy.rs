use crate::domain::errors::DomainResult;
use crate::domain::hooks::LifecycleHook;
use crate::domain::slug::options::{SluggableOptions, SluggatorStrategy};
use crate::domain::slug::record::{AttributeRecord, SluggableRecord};
use crate::domain::slug::value_objects::DerivedSlug;
use std::sync::Arc;

/// Decides when a record's slug target is (re)computed and computes it.
///
/// Cloning is cheap; clones share the same options.
pub struct SlugPolicy<R> {
    options: Arc<SluggableOptions<R>>,
}

impl<R> Clone for SlugPolicy<R> {
    fn clone(&self) -> Self {
        Self {
            options: Arc::clone(&self.options),
        }
    }
}

impl<R: SluggableRecord> SlugPolicy<R> {
    #[must_use]
    pub fn new(options: SluggableOptions<R>) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    #[must_use]
    pub fn options(&self) -> &SluggableOptions<R> {
        &self.options
    }

    /// Computes the slug for `raw` using the configured sluggator.
    #[must_use]
    pub fn derive(&self, raw: &str, record: &R) -> String {
        match self.options.sluggator() {
            SluggatorStrategy::Function(f) => f(raw, record),
            SluggatorStrategy::Method { method, .. } => method(record, raw),
            SluggatorStrategy::Default => record.to_slug(raw),
        }
    }

    /// Setter for the target attribute: stores the derived slug, never `raw` itself.
    pub fn assign_target(&self, record: &mut R, raw: &str) {
        let slug = DerivedSlug::new(self.derive(raw, record));
        record.write_slug(self.options.target(), slug);
    }

    /// Current target value, if it holds one.
    #[must_use]
    pub fn current_slug<'a>(&self, record: &'a R) -> Option<&'a str> {
        record
            .attribute(self.options.target())
            .filter(|value| !value.is_empty())
    }

    pub fn before_create(&self, record: &mut R) {
        if self.current_slug(record).is_none() {
            self.assign_from_source(record);
        }
    }

    pub fn before_update(&self, record: &mut R) {
        if !self.options.frozen() || self.current_slug(record).is_none() {
            self.assign_from_source(record);
        }
    }

    fn assign_from_source(&self, record: &mut R) {
        let source = self.options.source();
        let Some(raw) = record.attribute(source).map(str::to_owned) else {
            tracing::debug!(source, "source attribute is absent, slug left untouched");
            return;
        };

        self.assign_target(record, &raw);
        tracing::debug!(
            source,
            slug_target = self.options.target(),
            slug = record.attribute(self.options.target()),
            "slug derived"
        );
    }
}

impl SlugPolicy<AttributeRecord> {
    /// Writes one attribute of an [`AttributeRecord`]. Writes to the target go through
    /// [`SlugPolicy::assign_target`]; `None` clears the attribute.
    pub fn assign_attribute(&self, record: &mut AttributeRecord, name: &str, value: Option<&str>) {
        match value {
            Some(raw) if name == self.options.target() => self.assign_target(record, raw),
            value => record.set(name, value.map(str::to_owned)),
        }
    }
}

impl<R: SluggableRecord> LifecycleHook<R> for SlugPolicy<R> {
    fn before_create(&self, record: &mut R) -> DomainResult<()> {
        Self::before_create(self, record);
        Ok(())
    }

    fn before_update(&self, record: &mut R) -> DomainResult<()> {
        Self::before_update(self, record);
        Ok(())
    }
}
