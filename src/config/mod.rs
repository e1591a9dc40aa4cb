pub mod settings;

pub use settings::{AppConfig, LabelSettings, LadderSettings, StoreKind};
