pub mod persistence;
pub mod schema;

pub use persistence::SettingsManager;
pub use schema::AppSettings;
