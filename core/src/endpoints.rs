//! Parameter structs for every supported endpoint.
//!
//! Each struct implements [`Endpoint`](crate::endpoint::Endpoint): it knows
//! its descriptor, whether it needs a key, how it maps onto query parameters,
//! and how its response is wrapped.

pub mod news;
pub mod player_service;
pub mod user;
pub mod user_stats;

pub use news::GetNewsForApp;
pub use player_service::{GetOwnedGames, GetRecentlyPlayedGames};
pub use user::{GetFriendList, GetPlayerSummaries, MAX_PLAYER_SUMMARY_IDS};
pub use user_stats::{
    GetGlobalAchievementPercentagesForApp, GetNumberOfCurrentPlayers, GetPlayerAchievements,
    GetSchemaForGame, GetUserStatsForGame,
};
