use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::nested_list;

/// Global unlock rates (`ISteamUserStats/GetGlobalAchievementPercentagesForApp`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalAchievementPercentages {
    #[serde(
        rename = "achievements",
        default,
        deserialize_with = "achievement_percentages"
    )]
    pub achievements: Vec<AchievementPercentage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementPercentage {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "percent")]
    pub percent: f64,
}

/// Live player count (`ISteamUserStats/GetNumberOfCurrentPlayers`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberOfCurrentPlayers {
    #[serde(rename = "player_count", default)]
    pub player_count: u32,
    /// Steam's `EResult`; 1 means OK.
    #[serde(rename = "result")]
    pub result: u32,
}

/// A player's achievements for one game (`ISteamUserStats/GetPlayerAchievements`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAchievements {
    #[serde(rename = "steamID")]
    pub steam_id: String,
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(
        rename = "achievements",
        default,
        deserialize_with = "player_achievements"
    )]
    pub achievements: Vec<PlayerAchievement>,
    #[serde(rename = "success", default)]
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAchievement {
    #[serde(rename = "apiname")]
    pub api_name: String,
    /// 1 when unlocked.
    #[serde(rename = "achieved")]
    pub achieved: u8,
    /// Unix timestamp, 0 while locked.
    #[serde(rename = "unlocktime", default)]
    pub unlock_time: u64,
    /// Localized strings, only sent when a language was requested.
    #[serde(rename = "name")]
    pub name: Option<String>,
    #[serde(rename = "description")]
    pub description: Option<String>,
}

impl PlayerAchievement {
    pub fn is_achieved(&self) -> bool {
        self.achieved != 0
    }
}

impl PlayerAchievements {
    pub fn unlocked(&self) -> impl Iterator<Item = &PlayerAchievement> {
        self.achievements.iter().filter(|a| a.is_achieved())
    }
}

/// Stat and achievement definitions (`ISteamUserStats/GetSchemaForGame`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSchema {
    #[serde(rename = "gameName", default)]
    pub game_name: String,
    #[serde(rename = "gameVersion", default)]
    pub game_version: String,
    /// Absent for games without stats or achievements.
    #[serde(rename = "availableGameStats", default)]
    pub available_game_stats: GameStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(rename = "stats", default, deserialize_with = "schema_stats")]
    pub stats: Vec<GameSchemaStat>,
    #[serde(
        rename = "achievements",
        default,
        deserialize_with = "schema_achievements"
    )]
    pub achievements: Vec<GameSchemaAchievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSchemaStat {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "defaultvalue", default)]
    pub default_value: i64,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSchemaAchievement {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "defaultvalue", default)]
    pub default_value: i64,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "hidden", default)]
    pub hidden: u8,
    /// Not sent for hidden achievements.
    #[serde(rename = "description")]
    pub description: Option<String>,
    #[serde(rename = "icon", default)]
    pub icon: String,
    #[serde(rename = "icongray", default)]
    pub icon_gray: String,
}

impl GameSchemaAchievement {
    pub fn is_hidden(&self) -> bool {
        self.hidden != 0
    }
}

/// A player's stats for one game (`ISteamUserStats/GetUserStatsForGame`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "steamID")]
    pub steam_id: String,
    #[serde(rename = "gameName", default)]
    pub game_name: String,
    #[serde(rename = "stats", default, deserialize_with = "user_stats")]
    pub stats: Vec<UserStat>,
    #[serde(
        rename = "achievements",
        default,
        deserialize_with = "user_achievements"
    )]
    pub achievements: Vec<UserStatsAchievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStat {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "value")]
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatsAchievement {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "achieved")]
    pub achieved: u8,
}

impl UserStatsAchievement {
    pub fn is_achieved(&self) -> bool {
        self.achieved != 0
    }
}

impl UserStats {
    /// Value of the stat called `name`, if the player has it.
    pub fn stat(&self, name: &str) -> Option<u64> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.value)
    }
}

// Every list here uses <achievements><achievement>..</achievement></achievements>
// or <stats><stat>..</stat></stats> in XML.
fn achievement_percentages<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<AchievementPercentage>, D::Error> {
    nested_list(deserializer, "achievement")
}

fn player_achievements<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<PlayerAchievement>, D::Error> {
    nested_list(deserializer, "achievement")
}

fn schema_stats<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<GameSchemaStat>, D::Error> {
    nested_list(deserializer, "stat")
}

fn schema_achievements<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<GameSchemaAchievement>, D::Error> {
    nested_list(deserializer, "achievement")
}

fn user_stats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<UserStat>, D::Error> {
    nested_list(deserializer, "stat")
}

fn user_achievements<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<UserStatsAchievement>, D::Error> {
    nested_list(deserializer, "achievement")
}
