use crate::{
    config::load_config,
    store::ReducerStore,
    utils::timestamp_to_millis,
};
use clicker_engine::{CallerProfile, Reconciler, SyncError};
use spacetimedb::{Identity, ReducerContext};

/// Brings the caller's player row up to date, creating it on first contact.
///
/// Behavior:
/// - The caller is identified by `ctx.sender`; `display_name` and `is_premium` are the
///   caller's current profile and overwrite what is stored.
/// - Existing player: mines points and restores energy for the time since the last sync,
///   resets the daily refills on a new UTC day, and pays the referrer for every level
///   crossed.
/// - New player: `referrer_id` (hex identity) links the new row to an existing player and
///   pays both sides the signup bonus. An unknown or malformed referrer is ignored.
///
/// The reducer is the transaction. Any failure rolls back the caller's row and the
/// referrer's row together; clients only ever see a generic error.
#[spacetimedb::reducer]
pub fn sync_player(
    ctx: &ReducerContext,
    display_name: String,
    is_premium: bool,
    referrer_id: Option<String>,
) -> Result<(), String> {
    let referrer_id = referrer_id.and_then(|hex| match Identity::from_hex(hex.trim()) {
        Ok(identity) => Some(identity.to_hex().to_string()),
        Err(_) => {
            log::warn!("Ignoring malformed referrer id {hex:?} from {:?}", ctx.sender);
            None
        }
    });

    let caller = CallerProfile::new(
        ctx.sender.to_hex().to_string(),
        display_name,
        is_premium,
        referrer_id,
    )
    .map_err(|err| {
        log::warn!("Rejected sync from {:?}: {err}", ctx.sender);
        "Invalid request".to_string()
    })?;

    let result = load_config(ctx)
        .map_err(SyncError::from)
        .and_then(|config| {
            let mut store = ReducerStore::new(ctx);
            Reconciler::new(&config).reconcile(
                &mut store,
                &caller,
                timestamp_to_millis(ctx.timestamp),
            )
        });

    match result {
        Ok(player) => {
            log::info!(
                "Synced {}: points={} offline={} energy={}",
                player.external_id,
                player.points,
                player.offline_points_earned,
                player.energy
            );
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to sync player {}: {err}", caller.external_id());
            Err("Failed to sync player".into())
        }
    }
}
