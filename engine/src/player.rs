use crate::{
    constants::{MAX_DISPLAY_NAME_CHARS, Millis},
    error::InputError,
};

/// Persisted per-player state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub external_id: String,
    pub display_name: String,
    pub is_premium: bool,

    /// Lifetime score. Only ever grows.
    pub points: f64,
    /// Spendable points.
    pub points_balance: f64,
    /// Points mined by the most recent reconciliation. Display only.
    pub offline_points_earned: f64,
    pub referral_points_earned: f64,

    pub mine_level_index: u32,
    pub multitap_level_index: u32,
    pub energy_limit_level_index: u32,

    pub energy: u32,
    pub energy_refills_left: u32,

    pub last_points_update: Millis,
    pub last_energy_update: Millis,
    pub last_energy_refills: Millis,

    /// Set at creation, never changed afterwards.
    pub referred_by: Option<String>,
}

/// Authenticated caller data for one reconciliation call.
///
/// Only constructible through [`CallerProfile::new`], so every instance has passed input
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerProfile {
    external_id: String,
    display_name: String,
    is_premium: bool,
    referrer_id: Option<String>,
}

impl CallerProfile {
    pub fn new(
        external_id: impl Into<String>,
        display_name: impl Into<String>,
        is_premium: bool,
        referrer_id: Option<String>,
    ) -> Result<Self, InputError> {
        let external_id = external_id.into().trim().to_owned();
        if external_id.is_empty() {
            return Err(InputError::MissingExternalId);
        }

        let display_name = display_name.into().trim().to_owned();
        if display_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
            return Err(InputError::DisplayNameTooLong {
                max: MAX_DISPLAY_NAME_CHARS,
            });
        }
        if display_name.chars().any(char::is_control) {
            return Err(InputError::DisplayNameControlChars);
        }

        // A blank referrer or the caller's own id cannot name anybody else.
        let referrer_id = referrer_id
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty() && *id != external_id);

        Ok(Self {
            external_id,
            display_name,
            is_premium,
            referrer_id,
        })
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn referrer_id(&self) -> Option<&str> {
        self.referrer_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_valid_input() {
        let caller = CallerProfile::new(" abc ", " Ann ", true, Some(" ref ".into())).unwrap();
        assert_eq!(caller.external_id(), "abc");
        assert_eq!(caller.display_name(), "Ann");
        assert!(caller.is_premium());
        assert_eq!(caller.referrer_id(), Some("ref"));
    }

    #[test]
    fn rejects_blank_external_id() {
        assert_eq!(
            CallerProfile::new("  ", "Ann", false, None),
            Err(InputError::MissingExternalId)
        );
    }

    #[test]
    fn rejects_overlong_display_name() {
        let name = "x".repeat(MAX_DISPLAY_NAME_CHARS + 1);
        assert_eq!(
            CallerProfile::new("abc", name, false, None),
            Err(InputError::DisplayNameTooLong {
                max: MAX_DISPLAY_NAME_CHARS
            })
        );
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(
            CallerProfile::new("abc", "A\u{7}nn", false, None),
            Err(InputError::DisplayNameControlChars)
        );
    }

    #[test]
    fn empty_display_name_is_allowed() {
        assert!(CallerProfile::new("abc", "", false, None).is_ok());
    }

    #[test]
    fn blank_or_self_referrer_is_dropped() {
        let blank = CallerProfile::new("abc", "Ann", false, Some("  ".into())).unwrap();
        assert_eq!(blank.referrer_id(), None);
        let own = CallerProfile::new("abc", "Ann", false, Some("abc".into())).unwrap();
        assert_eq!(own.referrer_id(), None);
    }
}
