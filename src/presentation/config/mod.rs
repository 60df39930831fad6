mod settings;

pub use settings::{
    DEFAULT_MODEL, DatabaseSettings, LlmSettings, ServerSettings, Settings, SettingsError,
};
