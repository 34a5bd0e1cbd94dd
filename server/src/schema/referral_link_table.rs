use spacetimedb::table;

/// Referee -> referrer edge, written once when the referee is created.
///
/// Mirrors `Player::referred_by` so "who did I refer" is an index seek on `referrer_id`
/// instead of a scan over every player.
#[table(name = referral_link)]
pub struct ReferralLink {
    #[primary_key]
    pub referee_id: String,

    #[index(btree)]
    pub referrer_id: String,
}
