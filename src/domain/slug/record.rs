use crate::domain::slug::normalize::normalize_slug;
use crate::domain::slug::value_objects::{DerivedSlug, RecordId};
use std::collections::BTreeMap;

/// An instance method usable as a sluggator: `(record, raw_value) -> slug`.
pub type SlugMethod<R> = fn(&R, &str) -> String;

/// What the slug policy needs from a persisted record.
///
/// The target attribute is only written through `write_slug`, which takes a
/// [`DerivedSlug`]. Callers get one by going through
/// [`SlugPolicy::assign_target`](crate::domain::slug::SlugPolicy::assign_target).
pub trait SluggableRecord: Send + Sync + Sized + 'static {
    fn attribute(&self, name: &str) -> Option<&str>;

    fn write_slug(&mut self, target: &str, slug: DerivedSlug);

    /// Slug algorithm used when no sluggator override is configured.
    fn to_slug(&self, value: &str) -> String {
        normalize_slug(value)
    }

    /// Resolves a method name given as a sluggator override.
    fn slug_method(_name: &str) -> Option<SlugMethod<Self>> {
        None
    }
}

/// Attribute-bag record, the shape rows take in the SQLite adapter.
///
/// Attributes are written through
/// [`SluggableModel::set_attribute`](crate::application::SluggableModel::set_attribute),
/// which routes the slug target through derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRecord {
    pub id: Option<RecordId>,
    pub(crate) attributes: BTreeMap<String, Option<String>>,
}

impl AttributeRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), Some(value.into()));
        self
    }

    pub(crate) fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.attributes.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Option::as_deref)
    }
}

impl SluggableRecord for AttributeRecord {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name)
    }

    fn write_slug(&mut self, target: &str, slug: DerivedSlug) {
        self.set(target, Some(slug.into()));
    }
}
