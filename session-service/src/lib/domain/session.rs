pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AuthError;
pub use models::Credentials;
pub use models::TokenPair;
pub use models::User;
pub use models::UserId;
pub use models::Username;
pub use ports::AuthServicePort;
pub use ports::UserRepository;
pub use service::AuthService;
