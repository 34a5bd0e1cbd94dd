pub mod accrual;
pub mod clock;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod player;
pub mod reconcile;
pub mod referral;
pub mod store;

pub use accrual::{Accrual, GeometricCurve, LinearCurve};
pub use clock::is_new_utc_day;
pub use config::{EconomySettings, ProgressionConfig};
pub use constants::{MAX_DISPLAY_NAME_CHARS, MAX_ENERGY_REFILLS_PER_DAY, Millis};
pub use curve::{CurveTable, Level};
pub use error::{ConfigError, InputError, StoreError, SyncError};
pub use player::{CallerProfile, PlayerRecord};
pub use reconcile::Reconciler;
pub use referral::{ReferralAccumulator, SignupBonus};
pub use store::{
    Commit, MemoryStore, PlayerStore, PrimaryWrite, ReferrerCredit, apply_credit, check_primary,
};
