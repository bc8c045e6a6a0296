pub mod assets;
pub mod backend;
pub mod bridge;
pub mod cache;
pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod facade;
pub mod logging;
pub mod session;
pub mod settings;
pub mod tracker;

pub use error::{ClientError, ClientResult};
pub use facade::DataClient;
