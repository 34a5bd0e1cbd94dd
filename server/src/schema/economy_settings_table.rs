use clicker_engine::{Accrual, EconomySettings, GeometricCurve, LinearCurve, SignupBonus};
use spacetimedb::table;

/// Economy parameters read by every sync.
///
/// Single-row table (`id = 1`), seeded in `init`. Public so clients can predict accrual
/// between syncs with the same numbers the server uses.
#[table(name = economy_settings, public)]
pub struct EconomySettingsRow {
    /// Unique id (primary key). Use a single row with `id = 1`.
    #[primary_key]
    pub id: u32,

    /// Points per hour at mine level 0.
    pub mine_base_per_hour: f64,
    /// Per-level multiplier of the mining rate. Must be > 1.
    pub mine_growth: f64,
    /// Mining stops counting after this long offline. `None` for no cap.
    pub max_offline_millis: Option<i64>,

    /// Energy per second at multitap level 0, and the increase per level.
    pub energy_regen_base: u32,
    pub energy_regen_step: u32,

    /// Energy capacity at energy-limit level 0, and the increase per level.
    pub energy_limit_base: u32,
    pub energy_limit_step: u32,

    /// Signup bonus for standard and premium referees.
    pub signup_bonus_standard: f64,
    pub signup_bonus_premium: f64,

    pub max_refills_per_day: u32,
    pub starting_energy: u32,
}

impl EconomySettingsRow {
    pub const ID: u32 = 1;
}

impl From<EconomySettings> for EconomySettingsRow {
    fn from(settings: EconomySettings) -> Self {
        let accrual = settings.accrual;
        Self {
            id: Self::ID,
            mine_base_per_hour: accrual.mine_rate.base,
            mine_growth: accrual.mine_rate.growth,
            max_offline_millis: accrual.max_offline_millis,
            energy_regen_base: accrual.energy_regen.base,
            energy_regen_step: accrual.energy_regen.step,
            energy_limit_base: accrual.energy_limit.base,
            energy_limit_step: accrual.energy_limit.step,
            signup_bonus_standard: settings.signup_bonus.standard,
            signup_bonus_premium: settings.signup_bonus.premium,
            max_refills_per_day: settings.max_refills_per_day,
            starting_energy: settings.starting_energy,
        }
    }
}

impl From<&EconomySettingsRow> for EconomySettings {
    fn from(row: &EconomySettingsRow) -> Self {
        Self {
            accrual: Accrual {
                mine_rate: GeometricCurve {
                    base: row.mine_base_per_hour,
                    growth: row.mine_growth,
                },
                energy_regen: LinearCurve {
                    base: row.energy_regen_base,
                    step: row.energy_regen_step,
                },
                energy_limit: LinearCurve {
                    base: row.energy_limit_base,
                    step: row.energy_limit_step,
                },
                max_offline_millis: row.max_offline_millis,
            },
            signup_bonus: SignupBonus {
                standard: row.signup_bonus_standard,
                premium: row.signup_bonus_premium,
            },
            max_refills_per_day: row.max_refills_per_day,
            starting_energy: row.starting_energy,
        }
    }
}
