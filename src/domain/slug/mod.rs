pub mod normalize;
pub mod options;
pub mod policy;
pub mod record;
pub mod repository;
pub mod value_objects;

pub use normalize::normalize_slug;
pub use options::{
    DEFAULT_TARGET, INVALID_SLUGGATOR, SlugFunction, SluggableOptions, SluggableOptionsBuilder,
    SluggableSettings, Sluggator, SluggatorStrategy,
};
pub use policy::SlugPolicy;
pub use record::{AttributeRecord, SlugMethod, SluggableRecord};
pub use repository::{RecordReadRepository, RecordWriteRepository};
pub use value_objects::{DerivedSlug, LookupKey, RecordId};
