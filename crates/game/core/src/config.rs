/// Spell-game difficulty.
///
/// On `Hard` the wizard loses [`GameConfig::HARD_MODE_DRAIN`] hit points at
/// the start of every player turn, before any effect resolves.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Normal,
    #[default]
    Hard,
}

impl Difficulty {
    /// Hit points lost at the start of each player turn.
    pub const fn turn_drain(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Hard => GameConfig::HARD_MODE_DRAIN,
        }
    }
}

/// Rule constants and tunable search parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// Discard frontier states that already spent more mana than the
    /// cheapest known win.
    pub prune: bool,
    /// Stop expanding after this many states; the rest stays pending.
    pub max_expansions: Option<usize>,
}

impl GameConfig {
    // ===== rule constants =====
    /// Hands available for rings.
    pub const MAX_RINGS: usize = 2;
    pub const SHIELD_ARMOR: u32 = 7;
    pub const POISON_DAMAGE: u32 = 3;
    pub const RECHARGE_MANA: u32 = 101;
    pub const HARD_MODE_DRAIN: u32 = 1;

    pub fn new() -> Self {
        Self {
            difficulty: Difficulty::default(),
            prune: true,
            max_expansions: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
