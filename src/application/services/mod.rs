pub mod config_service;
pub mod log_channel_resolver;
pub mod notification_service;
pub mod voice_formatter;

pub use config_service::{ConfigService, ConfigServiceError};
pub use log_channel_resolver::LogChannelResolver;
pub use notification_service::{MessageSink, NotificationService};
