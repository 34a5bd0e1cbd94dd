use crate::utils::{millis_to_timestamp, timestamp_to_millis};
use clicker_engine::PlayerRecord;
use spacetimedb::{table, ReducerContext, Timestamp, ViewContext};

/// One row per external identity (the caller's `Identity` rendered as hex).
///
/// Created on the first `sync_player` call, then brought up to date on every later call.
/// Never deleted.
#[table(name = player, public)]
pub struct Player {
    #[primary_key]
    pub external_id: String,

    pub display_name: String,
    pub is_premium: bool,

    /// Lifetime score. Drives the level.
    pub points: f64,
    /// Spendable points.
    pub points_balance: f64,
    /// What the last sync mined while the player was away.
    pub offline_points_earned: f64,
    pub referral_points_earned: f64,

    /// Upgrade tracks. Written by purchases, read by sync.
    pub mine_level_index: u32,
    pub multitap_level_index: u32,
    pub energy_limit_level_index: u32,

    pub energy: u32,
    pub energy_refills_left: u32,

    pub last_points_update: Timestamp,
    pub last_energy_update: Timestamp,
    pub last_energy_refills: Timestamp,

    /// Referrer's `external_id`. Set at creation only.
    pub referred_by: Option<String>,
}

impl Player {
    pub fn find(ctx: &ReducerContext, external_id: &str) -> Option<Self> {
        ctx.db.player().external_id().find(external_id.to_owned())
    }

    pub fn find_in_view(ctx: &ViewContext, external_id: &str) -> Option<Self> {
        ctx.db.player().external_id().find(external_id.to_owned())
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Self {
            external_id: record.external_id,
            display_name: record.display_name,
            is_premium: record.is_premium,
            points: record.points,
            points_balance: record.points_balance,
            offline_points_earned: record.offline_points_earned,
            referral_points_earned: record.referral_points_earned,
            mine_level_index: record.mine_level_index,
            multitap_level_index: record.multitap_level_index,
            energy_limit_level_index: record.energy_limit_level_index,
            energy: record.energy,
            energy_refills_left: record.energy_refills_left,
            last_points_update: millis_to_timestamp(record.last_points_update),
            last_energy_update: millis_to_timestamp(record.last_energy_update),
            last_energy_refills: millis_to_timestamp(record.last_energy_refills),
            referred_by: record.referred_by,
        }
    }
}

impl From<Player> for PlayerRecord {
    fn from(row: Player) -> Self {
        Self {
            external_id: row.external_id,
            display_name: row.display_name,
            is_premium: row.is_premium,
            points: row.points,
            points_balance: row.points_balance,
            offline_points_earned: row.offline_points_earned,
            referral_points_earned: row.referral_points_earned,
            mine_level_index: row.mine_level_index,
            multitap_level_index: row.multitap_level_index,
            energy_limit_level_index: row.energy_limit_level_index,
            energy: row.energy,
            energy_refills_left: row.energy_refills_left,
            last_points_update: timestamp_to_millis(row.last_points_update),
            last_energy_update: timestamp_to_millis(row.last_energy_update),
            last_energy_refills: timestamp_to_millis(row.last_energy_refills),
            referred_by: row.referred_by,
        }
    }
}
