//! Question-template rendering.

use amity_core::constants::{BLANK_FRIEND, FRIEND_PLACEHOLDER};

/// Render a question template. With a name, the `{friend}` placeholder is
/// substituted; without one (friend-agnostic game modes) it renders as a
/// blank for the UI to fill visually.
pub fn render(template: &str, friend_name: Option<&str>) -> String {
    template.replace(FRIEND_PLACEHOLDER, friend_name.unwrap_or(BLANK_FRIEND))
}
