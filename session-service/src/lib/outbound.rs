pub mod repositories;
pub mod stores;
