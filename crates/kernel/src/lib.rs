pub mod settings;

pub use settings::{ApiSettings, Environment, LogFormat, Settings, TelemetrySettings};
