pub mod bot;
pub mod guild_snapshot;

pub use bot::run_bot;
