/// A voice channel as seen by a voice state update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannel {
    pub id: u64,
    pub name: String,
}

impl VoiceChannel {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceTransition {
    Joined(VoiceChannel),
    Left(VoiceChannel),
    Moved {
        from: VoiceChannel,
        to: VoiceChannel,
    },
    Unchanged,
}

impl VoiceTransition {
    /// Channels compare by id only; a rename between snapshots is not a move.
    pub fn classify(before: Option<VoiceChannel>, after: Option<VoiceChannel>) -> Self {
        match (before, after) {
            (None, Some(after)) => Self::Joined(after),
            (Some(before), None) => Self::Left(before),
            (Some(before), Some(after)) if before.id != after.id => Self::Moved {
                from: before,
                to: after,
            },
            _ => Self::Unchanged,
        }
    }
}
