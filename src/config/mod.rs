pub mod loader;
pub mod settings;

pub use loader::{load_config, load_config_with_env, load_tables, save_config};
pub use settings::AdpulseConfig;
