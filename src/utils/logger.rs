use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn max_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| Level::from_str(value.trim()).ok())
        .unwrap_or(Level::INFO)
}

pub fn setup_logging() {
    // LOG_LEVEL overrides the default INFO level
    let level = max_level(std::env::var("LOG_LEVEL").ok().as_deref());

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set default tracing subscriber");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(max_level(None), Level::INFO);
        assert_eq!(max_level(Some("loud")), Level::INFO);
    }

    #[test]
    fn level_is_case_insensitive() {
        assert_eq!(max_level(Some("DEBUG")), Level::DEBUG);
        assert_eq!(max_level(Some(" warn ")), Level::WARN);
    }
}
