//! [`PlayerStore`] over the module's tables.
//!
//! The reducer that owns a [`ReducerStore`] is the transaction: returning `Err` from it rolls
//! back every write made here. `commit` still runs all of its checks before the first write,
//! so a rejected commit never depends on that rollback.

use crate::schema::*;
use clicker_engine::{
    apply_credit, check_primary, Commit, PlayerRecord, PlayerStore, PrimaryWrite, StoreError,
};
use spacetimedb::{ReducerContext, Table};

pub struct ReducerStore<'a> {
    ctx: &'a ReducerContext,
}

impl<'a> ReducerStore<'a> {
    pub fn new(ctx: &'a ReducerContext) -> Self {
        Self { ctx }
    }
}

impl PlayerStore for ReducerStore<'_> {
    fn find(&self, external_id: &str) -> Result<Option<PlayerRecord>, StoreError> {
        Ok(Player::find(self.ctx, external_id).map(PlayerRecord::from))
    }

    fn commit(&mut self, commit: Commit) -> Result<PlayerRecord, StoreError> {
        let Commit {
            primary,
            referrer_credit,
        } = commit;

        let stored = self.find(&primary.record().external_id)?;
        check_primary(&primary, stored.as_ref())?;

        let referrer = match &referrer_credit {
            Some(credit) => match self.find(&credit.referrer_id)? {
                Some(referrer) => Some((referrer, credit.amount)),
                None => return Err(StoreError::MissingReferrer(credit.referrer_id.clone())),
            },
            None => None,
        };

        let players = self.ctx.db.player();
        let record = match primary {
            PrimaryWrite::Insert(record) => {
                let id = record.external_id.clone();
                let row = players
                    .try_insert(Player::from(record))
                    .map_err(|_| StoreError::Duplicate(id.clone()))?;
                if let Some(referrer_id) = &row.referred_by {
                    self.ctx.db.referral_link().insert(ReferralLink {
                        referee_id: id,
                        referrer_id: referrer_id.clone(),
                    });
                }
                PlayerRecord::from(row)
            }
            PrimaryWrite::Update { record, .. } => {
                PlayerRecord::from(players.external_id().update(Player::from(record)))
            }
        };

        if let Some((mut referrer, amount)) = referrer {
            apply_credit(&mut referrer, amount);
            players.external_id().update(Player::from(referrer));
        }

        Ok(record)
    }

    fn referrals_of(&self, referrer_id: &str) -> Result<Vec<PlayerRecord>, StoreError> {
        Ok(self
            .ctx
            .db
            .referral_link()
            .referrer_id()
            .filter(&referrer_id.to_owned())
            .filter_map(|link| Player::find(self.ctx, &link.referee_id))
            .map(PlayerRecord::from)
            .collect())
    }
}
