pub mod db;
pub mod server;
pub mod settings;
pub mod telemetry;
