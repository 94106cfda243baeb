pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::TokenError;
pub use errors::TokenStoreError;
pub use models::Token;
pub use ports::TokenStore;
pub use service::TokenService;
