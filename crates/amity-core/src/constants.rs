/// Amity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest score a friend can receive on a single question.
pub const SCORE_MIN: u8 = 1;

/// Highest score; scoring this on a trait earns the perfect badge.
pub const SCORE_MAX: u8 = 5;

/// Head-to-head prompts asked per trait in versus mode.
pub const VERSUS_PROMPTS_PER_TRAIT: usize = 3;

/// Versus mode compares exactly two friends.
pub const VERSUS_ROSTER_SIZE: usize = 2;

/// Trait average strictly above this counts as a strength.
pub const STRENGTH_THRESHOLD: f64 = 2.5;

/// Improvement activities suggested per analysis.
pub const ACTIVITY_SUGGESTION_LIMIT: usize = 3;

/// Placeholder token substituted with a friend's name in question templates.
pub const FRIEND_PLACEHOLDER: &str = "{friend}";

/// Rendering of the placeholder when a prompt is not about one friend.
pub const BLANK_FRIEND: &str = "___";
