use crate::{
    accrual::Accrual,
    constants::{ENERGY_LIMIT_BASE, MAX_ENERGY_REFILLS_PER_DAY},
    curve::{CurveTable, Level},
    error::ConfigError,
    referral::{ReferralAccumulator, SignupBonus},
};

/// Scalar economy parameters, everything except the level ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomySettings {
    pub accrual: Accrual,
    pub signup_bonus: SignupBonus,
    pub max_refills_per_day: u32,
    /// Energy a brand new player starts with. Clamped to the level-0 capacity.
    pub starting_energy: u32,
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            accrual: Accrual::default(),
            signup_bonus: SignupBonus::default(),
            max_refills_per_day: MAX_ENERGY_REFILLS_PER_DAY,
            starting_energy: ENERGY_LIMIT_BASE,
        }
    }
}

/// Immutable, validated game configuration.
///
/// Built once and handed to the calculators and the reconciler by reference. There is no
/// global instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionConfig {
    levels: CurveTable,
    economy: EconomySettings,
}

impl ProgressionConfig {
    pub fn new(levels: Vec<Level>, economy: EconomySettings) -> Result<Self, ConfigError> {
        let levels = CurveTable::new(levels)?;
        economy.accrual.validate()?;
        economy.signup_bonus.validate()?;
        Ok(Self { levels, economy })
    }

    /// Built-in ladder and default economy.
    pub fn standard() -> Self {
        Self {
            levels: CurveTable::standard(),
            economy: EconomySettings::default(),
        }
    }

    pub fn levels(&self) -> &CurveTable {
        &self.levels
    }

    pub fn economy(&self) -> &EconomySettings {
        &self.economy
    }

    pub fn accrual(&self) -> &Accrual {
        &self.economy.accrual
    }

    pub fn referrals(&self) -> ReferralAccumulator<'_> {
        ReferralAccumulator::new(&self.levels, self.economy.signup_bonus)
    }

    pub fn max_refills_per_day(&self) -> u32 {
        self.economy.max_refills_per_day
    }

    /// Starting energy, never above what a level-0 player can hold.
    pub fn starting_energy(&self) -> u32 {
        self.economy
            .starting_energy
            .min(self.economy.accrual.energy_limit(0))
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accrual::GeometricCurve;

    #[test]
    fn standard_config_validates() {
        let standard = ProgressionConfig::standard();
        let rebuilt =
            ProgressionConfig::new(standard.levels().levels().to_vec(), *standard.economy());
        assert_eq!(rebuilt, Ok(standard));
    }

    #[test]
    fn new_rejects_bad_accrual() {
        let economy = EconomySettings {
            accrual: Accrual {
                mine_rate: GeometricCurve { base: -1.0, growth: 1.2 },
                ..Accrual::default()
            },
            ..EconomySettings::default()
        };
        let err = ProgressionConfig::new(CurveTable::standard().levels().to_vec(), economy);
        assert_eq!(err, Err(ConfigError::InvalidCurve("mine_rate.base")));
    }

    #[test]
    fn starting_energy_is_clamped_to_base_capacity() {
        let economy = EconomySettings {
            starting_energy: 10_000,
            ..EconomySettings::default()
        };
        let config = ProgressionConfig::new(CurveTable::standard().levels().to_vec(), economy)
            .expect("valid config");
        assert_eq!(config.starting_energy(), 500);
    }
}
