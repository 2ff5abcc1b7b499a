//! Storage module for configuration and session files.

pub mod config;
pub mod session;

pub use config::{
    get_config_path, get_data_dir, load_config, load_config_from, save_config, save_config_to,
    AppConfig, ConfigError, ExportSettings, SessionDefaults,
};
pub use session::{load_session, save_session, Session, SessionOptions};
