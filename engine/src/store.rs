//! Storage seam for the reconciliation protocol.
//!
//! The protocol never issues two independent writes. Everything one call changes is packed
//! into a single [`Commit`] and the store applies all of it or none of it.

use crate::{constants::Millis, error::StoreError, player::PlayerRecord};
use std::collections::HashMap;

/// The write to the caller's own record.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimaryWrite {
    /// First contact: the id must not exist yet.
    Insert(PlayerRecord),
    /// Replace an existing record.
    ///
    /// `observed_points_update` is the `last_points_update` the new state was computed from.
    /// If the stored value moved on in the meantime the commit is stale and must be rejected.
    Update {
        record: PlayerRecord,
        observed_points_update: Millis,
    },
}

impl PrimaryWrite {
    pub fn record(&self) -> &PlayerRecord {
        match self {
            PrimaryWrite::Insert(record) => record,
            PrimaryWrite::Update { record, .. } => record,
        }
    }
}

/// Points owed to another player as a side effect of this commit.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferrerCredit {
    pub referrer_id: String,
    /// Added to both `points` and `points_balance` of the referrer.
    pub amount: f64,
}

/// Everything one reconciliation writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub primary: PrimaryWrite,
    pub referrer_credit: Option<ReferrerCredit>,
}

/// Record store as seen by the reconciler.
pub trait PlayerStore {
    fn find(&self, external_id: &str) -> Result<Option<PlayerRecord>, StoreError>;

    /// Applies the primary write and the referrer credit together, or neither.
    ///
    /// Returns the primary record as stored.
    fn commit(&mut self, commit: Commit) -> Result<PlayerRecord, StoreError>;

    /// Players whose `referred_by` is `referrer_id`.
    fn referrals_of(&self, referrer_id: &str) -> Result<Vec<PlayerRecord>, StoreError>;
}

/// Checks a [`PrimaryWrite`] against the currently stored copy of the same id.
pub fn check_primary(write: &PrimaryWrite, stored: Option<&PlayerRecord>) -> Result<(), StoreError> {
    let id = &write.record().external_id;
    match (write, stored) {
        (PrimaryWrite::Insert(_), None) => Ok(()),
        (PrimaryWrite::Insert(_), Some(_)) => Err(StoreError::Duplicate(id.clone())),
        (PrimaryWrite::Update { .. }, None) => Err(StoreError::NotFound(id.clone())),
        (
            PrimaryWrite::Update {
                observed_points_update,
                ..
            },
            Some(stored),
        ) => {
            if stored.last_points_update == *observed_points_update {
                Ok(())
            } else {
                Err(StoreError::Conflict(id.clone()))
            }
        }
    }
}

/// Applies a [`ReferrerCredit`] to the referrer's record in place.
pub fn apply_credit(referrer: &mut PlayerRecord, amount: f64) {
    referrer.points += amount;
    referrer.points_balance += amount;
}

/// `HashMap`-backed store keyed by external id.
///
/// Every check runs before the first mutation, so a rejected commit leaves the map untouched.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    players: HashMap<String, PlayerRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record directly, bypassing the protocol.
    pub fn insert_raw(&mut self, record: PlayerRecord) {
        self.players.insert(record.external_id.clone(), record);
    }

    pub fn get(&self, external_id: &str) -> Option<&PlayerRecord> {
        self.players.get(external_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerStore for MemoryStore {
    fn find(&self, external_id: &str) -> Result<Option<PlayerRecord>, StoreError> {
        Ok(self.players.get(external_id).cloned())
    }

    fn commit(&mut self, commit: Commit) -> Result<PlayerRecord, StoreError> {
        let Commit {
            primary,
            referrer_credit,
        } = commit;

        check_primary(&primary, self.players.get(&primary.record().external_id))?;
        if let Some(credit) = &referrer_credit {
            if !self.players.contains_key(&credit.referrer_id) {
                return Err(StoreError::MissingReferrer(credit.referrer_id.clone()));
            }
        }

        let record = match primary {
            PrimaryWrite::Insert(record) | PrimaryWrite::Update { record, .. } => record,
        };
        if let Some(credit) = referrer_credit {
            if let Some(referrer) = self.players.get_mut(&credit.referrer_id) {
                apply_credit(referrer, credit.amount);
            }
        }
        self.players.insert(record.external_id.clone(), record.clone());
        Ok(record)
    }

    fn referrals_of(&self, referrer_id: &str) -> Result<Vec<PlayerRecord>, StoreError> {
        let mut referees: Vec<PlayerRecord> = self
            .players
            .values()
            .filter(|p| p.referred_by.as_deref() == Some(referrer_id))
            .cloned()
            .collect();
        referees.sort_by(|a, b| a.external_id.cmp(&b.external_id));
        Ok(referees)
    }
}
