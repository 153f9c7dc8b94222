#[cfg(test)]
pub mod config_repository;
pub mod json_config_repository;

#[cfg(test)]
pub use config_repository::InMemoryConfigRepository;
pub use json_config_repository::JsonConfigRepository;
