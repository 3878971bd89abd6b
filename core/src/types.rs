//! Result models for the Steam Web API.
//!
//! # Design
//! Field names are bound verbatim to the remote wire names with `rename`;
//! the Rust names follow Rust conventions. Fields the service omits
//! conditionally are `Option` (or `#[serde(default)]` for counters and lists),
//! so the same struct decodes from JSON and from the equivalent XML.

pub mod news;
pub mod player_service;
pub mod user;
pub mod user_stats;

pub use news::{AppNews, NewsItem};
pub use player_service::{Game, OwnedGames, RecentlyPlayedGames};
pub use user::{Friend, FriendList, PlayerSummaries, PlayerSummary};
pub use user_stats::{
    AchievementPercentage, GameSchema, GameSchemaAchievement, GameSchemaStat, GameStats,
    GlobalAchievementPercentages, NumberOfCurrentPlayers, PlayerAchievement, PlayerAchievements,
    UserStat, UserStats, UserStatsAchievement,
};
