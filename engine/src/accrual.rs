//! Time-based accrual of points and energy.
//!
//! Nothing ticks in the background. Each function receives the interval since the
//! last persisted update and returns what accumulated over it, so the result only depends
//! on the stored timestamps and the upgrade level. Intervals where `to <= from` (clock skew,
//! a duplicate call in the same instant) always accrue nothing.

use crate::{
    constants::{
        ENERGY_LIMIT_BASE, ENERGY_LIMIT_STEP, ENERGY_REGEN_BASE_PER_SECOND,
        ENERGY_REGEN_STEP_PER_SECOND, MILLIS_PER_HOUR, MILLIS_PER_SECOND, MINE_BASE_POINTS_PER_HOUR,
        MINE_RATE_GROWTH, Millis,
    },
    error::ConfigError,
};

/// `base * growth^level`. Strictly increasing when `growth > 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricCurve {
    pub base: f64,
    pub growth: f64,
}

impl GeometricCurve {
    pub fn at(&self, level: u32) -> f64 {
        let exponent = i32::try_from(level).unwrap_or(i32::MAX);
        self.base * self.growth.powi(exponent)
    }
}

/// `base + step * level`, saturating at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearCurve {
    pub base: u32,
    pub step: u32,
}

impl LinearCurve {
    pub fn at(&self, level: u32) -> u32 {
        self.base.saturating_add(self.step.saturating_mul(level))
    }
}

/// Rates for the three upgrade tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accrual {
    /// Points per hour, keyed by mine level.
    pub mine_rate: GeometricCurve,
    /// Energy per second, keyed by multitap level.
    pub energy_regen: LinearCurve,
    /// Energy capacity, keyed by energy-limit level.
    pub energy_limit: LinearCurve,
    /// Longest interval that still mines points. `None` mines for the full interval.
    pub max_offline_millis: Option<Millis>,
}

impl Default for Accrual {
    fn default() -> Self {
        Self {
            mine_rate: GeometricCurve {
                base: MINE_BASE_POINTS_PER_HOUR,
                growth: MINE_RATE_GROWTH,
            },
            energy_regen: LinearCurve {
                base: ENERGY_REGEN_BASE_PER_SECOND,
                step: ENERGY_REGEN_STEP_PER_SECOND,
            },
            energy_limit: LinearCurve {
                base: ENERGY_LIMIT_BASE,
                step: ENERGY_LIMIT_STEP,
            },
            max_offline_millis: None,
        }
    }
}

impl Accrual {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GeometricCurve { base, growth } = self.mine_rate;
        if !base.is_finite() || base <= 0.0 {
            return Err(ConfigError::InvalidCurve("mine_rate.base"));
        }
        if !growth.is_finite() || growth <= 1.0 {
            return Err(ConfigError::InvalidCurve("mine_rate.growth"));
        }
        if self.energy_limit.base == 0 {
            return Err(ConfigError::InvalidCurve("energy_limit.base"));
        }
        if matches!(self.max_offline_millis, Some(cap) if cap <= 0) {
            return Err(ConfigError::InvalidCurve("max_offline_millis"));
        }
        Ok(())
    }

    /// Points mined at `mine_level` between `from` and `to`.
    pub fn mined_points(&self, mine_level: u32, from: Millis, to: Millis) -> f64 {
        let mut elapsed = elapsed_millis(from, to);
        if let Some(cap) = self.max_offline_millis {
            elapsed = elapsed.min(cap);
        }
        if elapsed == 0 {
            return 0.0;
        }
        let per_hour = self.mine_rate.at(mine_level);
        per_hour * elapsed as f64 / MILLIS_PER_HOUR as f64
    }

    /// Whole energy units regenerated at `multitap_level` between `from` and `to`.
    ///
    /// Fractions of a unit are dropped.
    pub fn restored_energy(&self, multitap_level: u32, from: Millis, to: Millis) -> u32 {
        let elapsed = elapsed_millis(from, to);
        let per_second = i128::from(self.energy_regen.at(multitap_level));
        let restored = per_second * i128::from(elapsed) / i128::from(MILLIS_PER_SECOND);
        u32::try_from(restored).unwrap_or(u32::MAX)
    }

    /// Energy capacity at `energy_limit_level`.
    pub fn energy_limit(&self, energy_limit_level: u32) -> u32 {
        self.energy_limit.at(energy_limit_level)
    }
}

fn elapsed_millis(from: Millis, to: Millis) -> Millis {
    to.saturating_sub(from).max(0)
}
