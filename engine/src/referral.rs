use crate::{
    constants::{REFERRAL_BONUS_BASE, REFERRAL_BONUS_PREMIUM},
    curve::CurveTable,
    error::ConfigError,
};

/// Flat bonus a referee brings in when they sign up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignupBonus {
    pub standard: f64,
    pub premium: f64,
}

impl Default for SignupBonus {
    fn default() -> Self {
        Self {
            standard: REFERRAL_BONUS_BASE,
            premium: REFERRAL_BONUS_PREMIUM,
        }
    }
}

impl SignupBonus {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.standard.is_finite() || self.standard < 0.0 {
            return Err(ConfigError::InvalidCurve("signup_bonus.standard"));
        }
        if !self.premium.is_finite() || self.premium < 0.0 {
            return Err(ConfigError::InvalidCurve("signup_bonus.premium"));
        }
        Ok(())
    }

    pub fn for_referee(&self, is_premium: bool) -> f64 {
        if is_premium { self.premium } else { self.standard }
    }
}

/// Computes what a referrer is owed as their referee climbs the level ladder.
#[derive(Debug, Clone, Copy)]
pub struct ReferralAccumulator<'a> {
    levels: &'a CurveTable,
    signup: SignupBonus,
}

impl<'a> ReferralAccumulator<'a> {
    pub fn new(levels: &'a CurveTable, signup: SignupBonus) -> Self {
        Self { levels, signup }
    }

    /// Sum of the per-level friend bonus for every level in `(old_level, new_level]`.
    ///
    /// Levels past the end of the table pay nothing.
    pub fn referral_bonus(&self, old_level: usize, new_level: usize, is_referee_premium: bool) -> f64 {
        if new_level <= old_level {
            return 0.0;
        }
        self.levels
            .levels()
            .iter()
            .take(new_level.saturating_add(1))
            .skip(old_level + 1)
            .map(|level| level.bonus_for(is_referee_premium))
            .sum()
    }

    /// `(base_bonus, cascade_bonus)` for a referee created right now.
    ///
    /// The signup bonus alone may already lift the referee over several thresholds, and each
    /// of those level-ups is paid as if it had been mined.
    pub fn initial_referral_bonus(&self, is_referee_premium: bool) -> (f64, f64) {
        let base = self.signup.for_referee(is_referee_premium);
        let reached = self.levels.level_for_points(base);
        let cascade = self.referral_bonus(0, reached, is_referee_premium);
        (base, cascade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::tests::sample_table;

    fn signup() -> SignupBonus {
        SignupBonus {
            standard: 500.0,
            premium: 2_500.0,
        }
    }

    #[test]
    fn no_level_change_pays_nothing() {
        let table = sample_table();
        let acc = ReferralAccumulator::new(&table, signup());
        assert_eq!(acc.referral_bonus(3, 3, true), 0.0);
        assert_eq!(acc.referral_bonus(4, 2, false), 0.0);
    }

    #[test]
    fn multi_level_jump_sums_each_crossed_level() {
        let table = sample_table();
        let acc = ReferralAccumulator::new(&table, signup());
        assert_eq!(acc.referral_bonus(3, 5, true), 80.0 + 150.0);
        assert_eq!(acc.referral_bonus(3, 5, false), 50.0 + 100.0);
        assert_eq!(acc.referral_bonus(0, 1, false), 10.0);
    }

    #[test]
    fn levels_past_table_end_are_ignored() {
        let table = sample_table();
        let acc = ReferralAccumulator::new(&table, signup());
        assert_eq!(acc.referral_bonus(4, 99, false), 100.0);
        assert_eq!(acc.referral_bonus(usize::MAX - 1, usize::MAX, false), 0.0);
    }

    #[test]
    fn initial_bonus_replays_levels_reached_by_signup() {
        let table = sample_table();
        let acc = ReferralAccumulator::new(&table, signup());
        // 500 points reaches L2 (300): cascade pays L1 + L2.
        assert_eq!(acc.initial_referral_bonus(false), (500.0, 10.0 + 20.0));
        // 2500 points reaches L4 (2000): cascade pays L1..=L4 at premium rates.
        assert_eq!(acc.initial_referral_bonus(true), (2_500.0, 15.0 + 30.0 + 60.0 + 80.0));
    }

    #[test]
    fn zero_signup_bonus_has_no_cascade() {
        let table = sample_table();
        let acc = ReferralAccumulator::new(
            &table,
            SignupBonus {
                standard: 0.0,
                premium: 0.0,
            },
        );
        assert_eq!(acc.initial_referral_bonus(false), (0.0, 0.0));
    }
}
