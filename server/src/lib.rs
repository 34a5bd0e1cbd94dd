mod config;
mod reducers {
    mod connection;
    pub mod sync_player;
}
pub mod schema;
mod store;
mod utils;
mod views;

use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    config::seed_config(ctx);
}
