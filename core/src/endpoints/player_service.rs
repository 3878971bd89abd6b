use serde::{Deserialize, Serialize};

use crate::decode::{EnvelopeShape, Wrapper};
use crate::endpoint::{
    Auth, Endpoint, EndpointDescriptor, GET_OWNED_GAMES, GET_RECENTLY_PLAYED_GAMES,
};
use crate::error::ApiError;
use crate::format::{Language, OutputFormat};
use crate::query::Query;
use crate::types::{OwnedGames, RecentlyPlayedGames};

/// Games a player owns, with playtime. Requires a key; private profiles only
/// answer for the key owner's own account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetOwnedGames {
    pub steam_id: u64,
    /// Include name and icon for each game.
    pub include_app_info: bool,
    /// Include free games the player has launched.
    pub include_played_free_games: bool,
    /// Restrict the result to these apps. Empty means no filter.
    pub app_ids_filter: Vec<u32>,
    pub language: Option<Language>,
    pub format: OutputFormat,
}

impl GetOwnedGames {
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id,
            ..Default::default()
        }
    }
}

/// The `input_json` filter object. Keys are declared in sorted order.
#[derive(Serialize)]
struct OwnedGamesInput<'a> {
    #[serde(skip_serializing_if = "<[u32]>::is_empty")]
    appids_filter: &'a [u32],
    include_appinfo: bool,
    include_played_free_games: bool,
    steamid: u64,
}

impl Endpoint for GetOwnedGames {
    type Output = OwnedGames;

    const DESCRIPTOR: EndpointDescriptor = GET_OWNED_GAMES;
    const AUTH: Auth = Auth::Required;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::new(Wrapper::Field("response"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        let input = OwnedGamesInput {
            appids_filter: &self.app_ids_filter,
            include_appinfo: self.include_app_info,
            include_played_free_games: self.include_played_free_games,
            steamid: self.steam_id,
        };
        query.set_json("input_json", &input)?;
        query.set_opt("l", self.language);
        Ok(())
    }
}

/// Games played in the last two weeks. Requires a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetRecentlyPlayedGames {
    pub steam_id: u64,
    /// Limit the number of games. `None` returns all of them.
    pub count: Option<u32>,
    pub format: OutputFormat,
}

impl GetRecentlyPlayedGames {
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetRecentlyPlayedGames {
    type Output = RecentlyPlayedGames;

    const DESCRIPTOR: EndpointDescriptor = GET_RECENTLY_PLAYED_GAMES;
    const AUTH: Auth = Auth::Required;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::new(Wrapper::Field("response"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query
            .set_int("steamid", self.steam_id)
            .set_opt_int("count", self.count);
        Ok(())
    }
}
