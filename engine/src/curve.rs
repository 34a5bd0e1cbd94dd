use crate::{constants::STANDARD_LEVELS, error::ConfigError};

/// One rung of the level ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    /// Lifetime points required to reach this level.
    pub threshold: f64,
    /// Paid to the referrer when a standard referee reaches this level.
    pub friend_bonus: f64,
    /// Paid to the referrer when a premium referee reaches this level.
    pub friend_bonus_premium: f64,
}

impl Level {
    pub fn new(
        name: impl Into<String>,
        threshold: f64,
        friend_bonus: f64,
        friend_bonus_premium: f64,
    ) -> Self {
        Self {
            name: name.into(),
            threshold,
            friend_bonus,
            friend_bonus_premium,
        }
    }

    pub fn bonus_for(&self, is_premium: bool) -> f64 {
        if is_premium {
            self.friend_bonus_premium
        } else {
            self.friend_bonus
        }
    }
}

/// Ordered, validated level ladder.
///
/// # Invariants
/// - At least one level.
/// - `levels[0].threshold == 0`.
/// - Thresholds strictly increase with the index.
/// - Every threshold and bonus is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveTable {
    levels: Vec<Level>,
}

impl CurveTable {
    pub fn new(levels: Vec<Level>) -> Result<Self, ConfigError> {
        let Some(base) = levels.first() else {
            return Err(ConfigError::EmptyLevels);
        };
        if base.threshold != 0.0 {
            return Err(ConfigError::BaseThreshold(base.threshold));
        }

        for (index, level) in levels.iter().enumerate() {
            let values = [level.threshold, level.friend_bonus, level.friend_bonus_premium];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ConfigError::InvalidLevelValue { index });
            }
        }

        for (index, pair) in levels.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(ConfigError::ThresholdOrder {
                    index: index + 1,
                    threshold: pair[1].threshold,
                });
            }
        }

        Ok(Self { levels })
    }

    /// The built-in ladder from [`STANDARD_LEVELS`].
    pub fn standard() -> Self {
        let levels = STANDARD_LEVELS
            .iter()
            .map(|&(name, threshold, bonus, premium)| Level::new(name, threshold, bonus, premium))
            .collect();
        Self { levels }
    }

    /// Greatest level index whose threshold is `<= points`.
    ///
    /// Negative points are a caller bug and resolve to level 0.
    pub fn level_for_points(&self, points: f64) -> usize {
        self.levels
            .partition_point(|level| level.threshold <= points)
            .saturating_sub(1)
    }

    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn max_index(&self) -> usize {
        self.levels.len() - 1
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small ladder used across the engine tests.
    pub(crate) fn sample_table() -> CurveTable {
        CurveTable::new(vec![
            Level::new("L0", 0.0, 0.0, 0.0),
            Level::new("L1", 100.0, 10.0, 15.0),
            Level::new("L2", 300.0, 20.0, 30.0),
            Level::new("L3", 1_000.0, 40.0, 60.0),
            Level::new("L4", 2_000.0, 50.0, 80.0),
            Level::new("L5", 4_000.0, 100.0, 150.0),
        ])
        .expect("sample table is valid")
    }

    #[test]
    fn standard_table_passes_validation() {
        let standard = CurveTable::standard();
        assert_eq!(CurveTable::new(standard.levels().to_vec()), Ok(standard));
    }

    #[test]
    fn level_lookup_uses_inclusive_thresholds() {
        let table = sample_table();
        assert_eq!(table.level_for_points(0.0), 0);
        assert_eq!(table.level_for_points(99.99), 0);
        assert_eq!(table.level_for_points(100.0), 1);
        assert_eq!(table.level_for_points(299.0), 1);
        assert_eq!(table.level_for_points(1_500.0), 3);
        assert_eq!(table.level_for_points(4_000.0), 5);
    }

    #[test]
    fn level_lookup_clamps_to_table_bounds() {
        let table = sample_table();
        assert_eq!(table.level_for_points(f64::MAX), table.max_index());
        assert_eq!(table.level_for_points(-50.0), 0);
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(CurveTable::new(vec![]), Err(ConfigError::EmptyLevels));
    }

    #[test]
    fn rejects_nonzero_base_threshold() {
        let err = CurveTable::new(vec![Level::new("L0", 10.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, ConfigError::BaseThreshold(10.0));
    }

    #[test]
    fn rejects_non_increasing_thresholds() {
        let err = CurveTable::new(vec![
            Level::new("L0", 0.0, 0.0, 0.0),
            Level::new("L1", 100.0, 1.0, 1.0),
            Level::new("L2", 100.0, 1.0, 1.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ThresholdOrder {
                index: 2,
                threshold: 100.0
            }
        );
    }

    #[test]
    fn rejects_negative_bonus() {
        let err = CurveTable::new(vec![
            Level::new("L0", 0.0, 0.0, 0.0),
            Level::new("L1", 100.0, -1.0, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidLevelValue { index: 1 });
    }
}
