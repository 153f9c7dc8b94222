pub mod server;

pub use server::spawn_health_server;
