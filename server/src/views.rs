use crate::schema::{player__view, referral_link__view, Player};
use spacetimedb::{view, ViewContext};

fn caller_id(ctx: &ViewContext) -> String {
    ctx.sender.to_hex().to_string()
}

/// The caller's own player row, as written by their last `sync_player`.
#[view(name = my_player, public)]
fn my_player(ctx: &ViewContext) -> Option<Player> {
    Player::find_in_view(ctx, &caller_id(ctx))
}

/// Everyone the caller referred.
///
/// **Performance & Cost**: one index scan on `referral_link`, one seek per referee
#[view(name = my_referrals, public)]
fn my_referrals(ctx: &ViewContext) -> Vec<Player> {
    let referrer_id = caller_id(ctx);
    ctx.db
        .referral_link()
        .referrer_id()
        .filter(&referrer_id)
        .filter_map(|link| ctx.db.player().external_id().find(link.referee_id))
        .collect()
}
