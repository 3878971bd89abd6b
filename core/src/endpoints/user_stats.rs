use serde::Deserialize;

use crate::decode::{EnvelopeShape, Wrapper};
use crate::endpoint::{
    Auth, Endpoint, EndpointDescriptor, GET_GLOBAL_ACHIEVEMENT_PERCENTAGES_FOR_APP,
    GET_NUMBER_OF_CURRENT_PLAYERS, GET_PLAYER_ACHIEVEMENTS, GET_SCHEMA_FOR_GAME,
    GET_USER_STATS_FOR_GAME,
};
use crate::error::ApiError;
use crate::format::{Language, OutputFormat};
use crate::query::Query;
use crate::types::{
    GameSchema, GlobalAchievementPercentages, NumberOfCurrentPlayers, PlayerAchievements,
    UserStats,
};

/// Global unlock percentage of every achievement in a game. Works without a
/// key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetGlobalAchievementPercentagesForApp {
    pub game_id: u64,
    pub format: OutputFormat,
}

impl GetGlobalAchievementPercentagesForApp {
    pub fn new(game_id: u64) -> Self {
        Self {
            game_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetGlobalAchievementPercentagesForApp {
    type Output = GlobalAchievementPercentages;

    const DESCRIPTOR: EndpointDescriptor = GET_GLOBAL_ACHIEVEMENT_PERCENTAGES_FOR_APP;
    const AUTH: Auth = Auth::Optional;
    const ENVELOPE: EnvelopeShape =
        EnvelopeShape::new(Wrapper::Field("achievementpercentages"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query.set_int("gameid", self.game_id);
        Ok(())
    }
}

/// Players currently in game. Works without a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetNumberOfCurrentPlayers {
    pub app_id: u32,
    pub format: OutputFormat,
}

impl GetNumberOfCurrentPlayers {
    pub fn new(app_id: u32) -> Self {
        Self {
            app_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetNumberOfCurrentPlayers {
    type Output = NumberOfCurrentPlayers;

    const DESCRIPTOR: EndpointDescriptor = GET_NUMBER_OF_CURRENT_PLAYERS;
    const AUTH: Auth = Auth::Optional;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::new(Wrapper::Field("response"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query.set_int("appid", self.app_id);
        Ok(())
    }
}

/// A player's achievements in one game. Requires a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetPlayerAchievements {
    pub steam_id: u64,
    pub app_id: u32,
    /// Adds localized names and descriptions.
    pub language: Option<Language>,
    pub format: OutputFormat,
}

impl GetPlayerAchievements {
    pub fn new(steam_id: u64, app_id: u32) -> Self {
        Self {
            steam_id,
            app_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetPlayerAchievements {
    type Output = PlayerAchievements;

    const DESCRIPTOR: EndpointDescriptor = GET_PLAYER_ACHIEVEMENTS;
    const AUTH: Auth = Auth::Required;
    const ENVELOPE: EnvelopeShape =
        EnvelopeShape::new(Wrapper::Field("playerstats"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query
            .set_int("steamid", self.steam_id)
            .set_int("appid", self.app_id)
            .set_opt("l", self.language);
        Ok(())
    }
}

/// Stat and achievement definitions of a game. Requires a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetSchemaForGame {
    pub app_id: u32,
    pub language: Option<Language>,
    pub format: OutputFormat,
}

impl GetSchemaForGame {
    pub fn new(app_id: u32) -> Self {
        Self {
            app_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetSchemaForGame {
    type Output = GameSchema;

    const DESCRIPTOR: EndpointDescriptor = GET_SCHEMA_FOR_GAME;
    const AUTH: Auth = Auth::Required;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::new(Wrapper::Field("game"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query
            .set_int("appid", self.app_id)
            .set_opt("l", self.language);
        Ok(())
    }
}

/// A player's stats in one game. Requires a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetUserStatsForGame {
    pub steam_id: u64,
    pub app_id: u32,
    pub language: Option<Language>,
    pub format: OutputFormat,
}

impl GetUserStatsForGame {
    pub fn new(steam_id: u64, app_id: u32) -> Self {
        Self {
            steam_id,
            app_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetUserStatsForGame {
    type Output = UserStats;

    const DESCRIPTOR: EndpointDescriptor = GET_USER_STATS_FOR_GAME;
    const AUTH: Auth = Auth::Required;
    const ENVELOPE: EnvelopeShape =
        EnvelopeShape::new(Wrapper::Field("playerstats"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query
            .set_int("steamid", self.steam_id)
            .set_int("appid", self.app_id)
            .set_opt("l", self.language);
        Ok(())
    }
}
