pub mod kununu_client;

pub use kununu_client::*;
