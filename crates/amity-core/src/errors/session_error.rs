/// Evaluation-session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown session: {session_id}")]
    UnknownSession { session_id: String },

    #[error("unknown friend: {friend_id}")]
    UnknownFriend { friend_id: String },

    #[error("friend {name:?} already exists in the roster")]
    DuplicateFriend { name: String },

    #[error("friend name must not be empty")]
    EmptyName,

    #[error("roster is limited to {capacity} friends for this mode")]
    RosterFull { capacity: usize },

    #[error("roster is empty")]
    EmptyRoster,

    #[error("score {value} is outside the valid range")]
    InvalidScore { value: u8 },

    #[error("no prompt is active")]
    NoActivePrompt,

    #[error("this mode needs exactly {required} friends, got {actual}")]
    WrongRosterSize { required: usize, actual: usize },

    #[error("evaluation has not finished yet")]
    NotFinished,
}
