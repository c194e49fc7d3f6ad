pub mod finder;
pub mod lifecycle;
pub mod services;

pub use finder::SlugFinder;
pub use lifecycle::RecordLifecycle;
pub use services::SluggableModel;
