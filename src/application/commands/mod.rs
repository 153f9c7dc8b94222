pub mod help;
pub mod set_log_channel;

pub use help::{register_help_command, run_help_command};
pub use set_log_channel::{
    parse_prefix_command, register_set_log_channel_command, run_set_log_channel,
};
