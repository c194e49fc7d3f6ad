pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::{RecordLifecycle, SlugFinder, SluggableModel};
pub use config::{ConfigError, StoreConfig};
pub use domain::errors::{DomainError, DomainResult, OptionsError};
pub use domain::hooks::{HookChain, LifecycleHook};
pub use domain::slug::{
    AttributeRecord, DerivedSlug, LookupKey, RecordId, RecordReadRepository, RecordWriteRepository,
    SlugPolicy, SluggableOptions, SluggableRecord, SluggableSettings, Sluggator,
    SluggatorStrategy, normalize_slug,
};
pub use infrastructure::repositories::SqliteRecordRepository;
