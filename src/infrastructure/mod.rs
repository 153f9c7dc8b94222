pub mod discord_bot;
pub mod health;
pub mod repositories;
pub mod settings;
