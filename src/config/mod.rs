//! Configuration module

mod board;

pub use board::BoardConfig;
pub use board::ServerConfig;
pub use board::StoreConfig;
pub use board::bind_host;
