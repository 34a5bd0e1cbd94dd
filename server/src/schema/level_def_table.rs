use clicker_engine::Level;
use spacetimedb::table;

/// One rung of the level ladder, public so clients can draw progress towards the next level.
///
/// Rows are seeded in `init` and read back, ordered by `level`, on every sync.
#[table(name = level_def, public)]
pub struct LevelDef {
    /// Position in the ladder. Level 0 must have `threshold = 0`.
    #[primary_key]
    pub level: u32,

    pub name: String,

    /// Lifetime points needed to reach this level.
    pub threshold: f64,

    /// Paid to the referrer when a standard referee reaches this level.
    pub friend_bonus: f64,

    /// Paid to the referrer when a premium referee reaches this level.
    pub friend_bonus_premium: f64,
}

impl From<LevelDef> for Level {
    fn from(row: LevelDef) -> Self {
        Level::new(row.name, row.threshold, row.friend_bonus, row.friend_bonus_premium)
    }
}
