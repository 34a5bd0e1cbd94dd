mod economy_settings_table;
mod level_def_table;
mod player_table;
mod referral_link_table;

pub use economy_settings_table::*;
pub use level_def_table::*;
pub use player_table::*;
pub use referral_link_table::*;
