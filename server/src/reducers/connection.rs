//! Connection lifecycle reducers.
//!
//! Player rows are not touched here. A row is created or brought up to date only by
//! `sync_player`, which the client calls right after connecting and whenever it wants fresh
//! state. These reducers only leave a trace in the module log.

use crate::schema::Player;
use spacetimedb::ReducerContext;

#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) {
    let external_id = ctx.sender.to_hex().to_string();
    if Player::find(ctx, &external_id).is_some() {
        log::info!("Client connected: {external_id}");
    } else {
        log::info!("Client connected: {external_id} (no player yet)");
    }
}

#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);
}
