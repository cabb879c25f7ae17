//! Fixed word lists the generator draws from.
//!
//! Order is significant: the generator indexes these with fixed
//! multipliers, so reordering changes every suggestion.

use crate::domain::value_objects::UsernameLength;

pub const ADJECTIVES: [&str; 20] = [
    "Swift", "Lunar", "Nova", "Echo", "Pixel", "Aether", "Shadow", "Solar", "Binary", "Velvet",
    "Quantum", "Arctic", "Neon", "Glitch", "Serene", "Zephyr", "Crimson", "Azure", "Ivory",
    "Obsidian",
];

pub const NOUNS: [&str; 20] = [
    "Pilot", "Quest", "Forge", "Atlas", "Script", "Bloom", "Glyph", "Signal", "Pulse", "Circuit",
    "Dream", "Hive", "Studio", "Lab", "Realm", "Canvas", "Trove", "Runner", "Loop", "Beacon",
];

/// The empty suffix means "no suffix".
pub const SUFFIXES: [&str; 10] = [
    "", "HQ", "Lab", "Ops", "Dev", "Play", "Hub", "Works", "Core", "Verse",
];

/// Empty separators are weighted 3:1 over each punctuation separator.
pub const SEPARATORS: [&str; 6] = ["", "", "", "_", ".", "-"];

/// Style presets offered to the user.
pub const SUGGESTED_STYLES: [&str; 7] = [
    "minimal",
    "aesthetic",
    "edgy",
    "cyber",
    "gaming",
    "brand",
    "cute",
];

pub const SUGGESTED_LENGTHS: [UsernameLength; 3] = UsernameLength::ALL;

/// Platforms shown next to each suggestion. These are labels only; nothing
/// is checked against the platforms.
pub const AVAILABILITY_LABELS: [&str; 6] = ["IG", "TikTok", "YouTube", "X", "Twitch", "Domain"];

/// `"IG | TikTok | ..."`, as displayed under each suggestion.
pub fn availability_hint() -> String {
    AVAILABILITY_LABELS.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lists_are_alphanumeric() {
        for word in ADJECTIVES.iter().chain(NOUNS.iter()).chain(SUFFIXES.iter()) {
            assert!(word.chars().all(|c| c.is_ascii_alphanumeric()), "{word}");
        }
    }

    #[test]
    fn hint_joins_with_pipes() {
        assert_eq!(availability_hint(), "IG | TikTok | YouTube | X | Twitch | Domain");
    }
}
