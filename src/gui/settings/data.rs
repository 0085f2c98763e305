#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SettingsData {
    /// Drop cards whose source has no usable image reference. Silently
    /// shrinks the deck, so it stays a user choice.
    pub drop_missing_images: bool,
    /// Draw from the remote random endpoint instead of picking locally from
    /// the loaded deck.
    pub remote_random_draw: bool,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { drop_missing_images: false, remote_random_draw: false, dark_mode: true }
    }
}
