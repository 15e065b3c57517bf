/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Player walk speed in world units per second while input is unlocked.
    pub player_speed: f32,
    /// How long the pickup confirmation dialog stays on screen, in seconds.
    /// This is also how long `give_item` suspends the running script.
    pub item_message_seconds: f32,
}

impl EngineConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_SPEED: f32 = 96.0;
    pub const DEFAULT_ITEM_MESSAGE_SECONDS: f32 = 1.5;

    pub fn new() -> Self {
        Self {
            player_speed: Self::DEFAULT_PLAYER_SPEED,
            item_message_seconds: Self::DEFAULT_ITEM_MESSAGE_SECONDS,
        }
    }

    pub fn with_player_speed(mut self, player_speed: f32) -> Self {
        self.player_speed = player_speed;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
