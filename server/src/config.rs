//! Game configuration persisted in the `level_def` and `economy_settings` tables.

use crate::schema::*;
use clicker_engine::{ConfigError, Level, ProgressionConfig};
use spacetimedb::{ReducerContext, Table};

/// Replaces both config tables with the built-in defaults.
pub fn seed_config(ctx: &ReducerContext) {
    let standard = ProgressionConfig::standard();

    ctx.db.economy_settings().id().delete(EconomySettingsRow::ID);
    ctx.db
        .economy_settings()
        .insert(EconomySettingsRow::from(*standard.economy()));

    let stale: Vec<u32> = ctx.db.level_def().iter().map(|row| row.level).collect();
    for level in stale {
        ctx.db.level_def().level().delete(level);
    }
    for (level, def) in (0u32..).zip(standard.levels().levels()) {
        ctx.db.level_def().insert(LevelDef {
            level,
            name: def.name.clone(),
            threshold: def.threshold,
            friend_bonus: def.friend_bonus,
            friend_bonus_premium: def.friend_bonus_premium,
        });
    }
    log::info!(
        "Seeded economy settings and {} levels",
        standard.levels().len()
    );
}

/// Rebuilds a validated [`ProgressionConfig`] from the config tables.
pub fn load_config(ctx: &ReducerContext) -> Result<ProgressionConfig, ConfigError> {
    let Some(settings) = ctx.db.economy_settings().id().find(EconomySettingsRow::ID) else {
        return Err(ConfigError::MissingSettings);
    };

    let mut rows: Vec<LevelDef> = ctx.db.level_def().iter().collect();
    rows.sort_by_key(|row| row.level);
    let levels: Vec<Level> = rows.into_iter().map(Level::from).collect();

    ProgressionConfig::new(levels, (&settings).into())
}
