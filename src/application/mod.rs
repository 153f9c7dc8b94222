pub mod commands;
pub mod dispatcher;
pub mod handlers;
pub mod services;
