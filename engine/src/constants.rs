/// Milliseconds since the Unix epoch (UTC).
///
/// All engine arithmetic on instants uses this representation so calculators stay free of
/// any clock. Callers convert their native timestamp type at the boundary.
pub type Millis = i64;

pub const MILLIS_PER_SECOND: Millis = 1_000;
pub const MILLIS_PER_HOUR: Millis = 60 * 60 * MILLIS_PER_SECOND;

/// How many energy refills a player gets back on every UTC day rollover.
pub const MAX_ENERGY_REFILLS_PER_DAY: u32 = 6;

/// Flat bonus granted to a standard (non-premium) referee at signup.
pub const REFERRAL_BONUS_BASE: f64 = 5_000.0;

/// Flat bonus granted to a premium referee at signup.
pub const REFERRAL_BONUS_PREMIUM: f64 = 25_000.0;

/// Points per hour mined at mine level 0.
pub const MINE_BASE_POINTS_PER_HOUR: f64 = 100.0;
/// Each mine level multiplies the hourly rate by this factor. Must be > 1.
pub const MINE_RATE_GROWTH: f64 = 1.2;

/// Energy restored per second at multitap level 0.
pub const ENERGY_REGEN_BASE_PER_SECOND: u32 = 1;
/// Extra energy per second gained with each multitap level.
pub const ENERGY_REGEN_STEP_PER_SECOND: u32 = 1;

/// Energy capacity at energy-limit level 0. Also the energy a fresh player starts with.
pub const ENERGY_LIMIT_BASE: u32 = 500;
/// Capacity added by each energy-limit level.
pub const ENERGY_LIMIT_STEP: u32 = 500;

/// Longest display name accepted from a caller, in characters.
pub const MAX_DISPLAY_NAME_CHARS: usize = 64;

/// `(name, threshold, friend_bonus, friend_bonus_premium)` for the built-in level ladder.
///
/// Index 0 is the level every player starts at and never pays a referral bonus.
pub const STANDARD_LEVELS: [(&str, f64, f64, f64); 10] = [
    ("Ember", 0.0, 0.0, 0.0),
    ("Spark", 5_000.0, 20_000.0, 25_000.0),
    ("Flame", 25_000.0, 30_000.0, 50_000.0),
    ("Blaze", 100_000.0, 40_000.0, 75_000.0),
    ("Inferno", 1_000_000.0, 60_000.0, 100_000.0),
    ("Supernova", 2_000_000.0, 100_000.0, 150_000.0),
    ("Aurora", 10_000_000.0, 250_000.0, 500_000.0),
    ("Comet", 50_000_000.0, 500_000.0, 1_000_000.0),
    ("Stellar", 100_000_000.0, 1_000_000.0, 2_000_000.0),
    ("Cosmos", 1_000_000_000.0, 2_500_000.0, 5_000_000.0),
];
