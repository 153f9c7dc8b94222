use crate::domain::entities::VoiceTransition;

/// Renders the log line for a voice transition. `Unchanged` renders nothing.
pub fn render(user: &str, transition: &VoiceTransition) -> Option<String> {
    match transition {
        VoiceTransition::Joined(channel) => Some(format!("🔊 {} has joined {}", user, channel.name)),
        VoiceTransition::Left(channel) => Some(format!("❌ {} has left {}", user, channel.name)),
        VoiceTransition::Moved { from, to } => Some(format!(
            "🔄 {} has moved from {} to {}",
            user, from.name, to.name
        )),
        VoiceTransition::Unchanged => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VoiceChannel;

    fn lounge() -> VoiceChannel {
        VoiceChannel::new(1, "Lounge")
    }

    fn gaming() -> VoiceChannel {
        VoiceChannel::new(2, "Gaming")
    }

    #[test]
    fn join() {
        let transition = VoiceTransition::classify(None, Some(lounge()));
        assert_eq!(transition, VoiceTransition::Joined(lounge()));
        assert_eq!(
            render("alice", &transition).as_deref(),
            Some("🔊 alice has joined Lounge")
        );
    }

    #[test]
    fn leave() {
        let transition = VoiceTransition::classify(Some(lounge()), None);
        assert_eq!(transition, VoiceTransition::Left(lounge()));
        assert_eq!(
            render("alice", &transition).as_deref(),
            Some("❌ alice has left Lounge")
        );
    }

    #[test]
    fn move_between_channels() {
        let transition = VoiceTransition::classify(Some(lounge()), Some(gaming()));
        assert_eq!(
            transition,
            VoiceTransition::Moved {
                from: lounge(),
                to: gaming()
            }
        );
        assert_eq!(
            render("alice", &transition).as_deref(),
            Some("🔄 alice has moved from Lounge to Gaming")
        );
    }

    #[test]
    fn same_channel_is_unchanged() {
        // mute/deafen toggles arrive with the same channel on both sides
        let transition = VoiceTransition::classify(Some(lounge()), Some(lounge()));
        assert_eq!(transition, VoiceTransition::Unchanged);
        assert_eq!(render("alice", &transition), None);
    }

    #[test]
    fn no_channel_on_either_side_is_unchanged() {
        let transition = VoiceTransition::classify(None, None);
        assert_eq!(transition, VoiceTransition::Unchanged);
        assert_eq!(render("alice", &transition), None);
    }
}
