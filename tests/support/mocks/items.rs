// tests/support/mocks/items.rs
use once_cell::sync::Lazy;
use regex::Regex;
use sluggable::{DerivedSlug, RecordId, SluggableRecord, domain::slug::SlugMethod};

use super::repos::Keyed;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap());
static NON_LOWER_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Typed record with the same columns as the `items` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub sluggie: Option<String>,
}

impl Item {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

fn my_custom_sluggator(_item: &Item, value: &str) -> String {
    let value = value.strip_suffix('\n').unwrap_or(value).to_uppercase();
    NON_ALNUM.replace_all(&value, "-").into_owned()
}

impl SluggableRecord for Item {
    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "slug" => self.slug.as_deref(),
            "sluggie" => self.sluggie.as_deref(),
            _ => None,
        }
    }

    fn write_slug(&mut self, target: &str, slug: DerivedSlug) {
        let value = Some(String::from(slug));
        match target {
            "slug" => self.slug = value,
            "sluggie" => self.sluggie = value,
            _ => {}
        }
    }

    fn slug_method(name: &str) -> Option<SlugMethod<Self>> {
        match name {
            "my_custom_sluggator" => Some(my_custom_sluggator as SlugMethod<Self>),
            _ => None,
        }
    }
}

impl Keyed for Item {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

/// Record that replaces the default slug algorithm through `to_slug`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReversedItem {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl SluggableRecord for ReversedItem {
    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "slug" => self.slug.as_deref(),
            _ => None,
        }
    }

    fn write_slug(&mut self, target: &str, slug: DerivedSlug) {
        if target == "slug" {
            self.slug = Some(slug.into());
        }
    }

    fn to_slug(&self, value: &str) -> String {
        let lowered = value.trim().to_lowercase();
        NON_LOWER_ALNUM
            .replace_all(&lowered, "_")
            .chars()
            .rev()
            .collect()
    }
}

impl Keyed for ReversedItem {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}
