//! Endpoint metadata and request URL composition.
//!
//! # Design
//! Every remote operation is a `const EndpointDescriptor` plus an [`Endpoint`]
//! implementation on its parameter struct. The trait carries everything the
//! generic executor in `SteamClient::call` needs: where to send the request,
//! whether a key is mandatory, how to encode parameters, and how the
//! response is wrapped in each format.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::decode::EnvelopeShape;
use crate::error::ApiError;
use crate::format::OutputFormat;
use crate::query::Query;

/// Default Steam Web API base address.
pub const STEAM_API_BASE_URL: &str = "https://api.steampowered.com";

pub const PLAYER_SERVICE: &str = "IPlayerService";
pub const STEAM_NEWS: &str = "ISteamNews";
pub const STEAM_USER: &str = "ISteamUser";
pub const STEAM_USER_STATS: &str = "ISteamUserStats";

/// Identifies a remote operation by interface, method and version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointDescriptor {
    pub interface: &'static str,
    pub method: &'static str,
    pub version: &'static str,
}

impl EndpointDescriptor {
    pub const fn new(interface: &'static str, method: &'static str, version: &'static str) -> Self {
        Self {
            interface,
            method,
            version,
        }
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/v{}", self.interface, self.method, self.version)
    }
}

pub const GET_OWNED_GAMES: EndpointDescriptor =
    EndpointDescriptor::new(PLAYER_SERVICE, "GetOwnedGames", "1");
pub const GET_RECENTLY_PLAYED_GAMES: EndpointDescriptor =
    EndpointDescriptor::new(PLAYER_SERVICE, "GetRecentlyPlayedGames", "1");
pub const GET_NEWS_FOR_APP: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_NEWS, "GetNewsForApp", "2");
pub const GET_PLAYER_SUMMARIES: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_USER, "GetPlayerSummaries", "2");
pub const GET_FRIEND_LIST: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_USER, "GetFriendList", "1");
pub const GET_GLOBAL_ACHIEVEMENT_PERCENTAGES_FOR_APP: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_USER_STATS, "GetGlobalAchievementPercentagesForApp", "2");
pub const GET_NUMBER_OF_CURRENT_PLAYERS: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_USER_STATS, "GetNumberOfCurrentPlayers", "1");
pub const GET_PLAYER_ACHIEVEMENTS: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_USER_STATS, "GetPlayerAchievements", "1");
pub const GET_SCHEMA_FOR_GAME: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_USER_STATS, "GetSchemaForGame", "2");
pub const GET_USER_STATS_FOR_GAME: EndpointDescriptor =
    EndpointDescriptor::new(STEAM_USER_STATS, "GetUserStatsForGame", "2");

/// Every endpoint this crate can call.
pub const ALL_ENDPOINTS: [EndpointDescriptor; 10] = [
    GET_OWNED_GAMES,
    GET_RECENTLY_PLAYED_GAMES,
    GET_NEWS_FOR_APP,
    GET_PLAYER_SUMMARIES,
    GET_FRIEND_LIST,
    GET_GLOBAL_ACHIEVEMENT_PERCENTAGES_FOR_APP,
    GET_NUMBER_OF_CURRENT_PLAYERS,
    GET_PLAYER_ACHIEVEMENTS,
    GET_SCHEMA_FOR_GAME,
    GET_USER_STATS_FOR_GAME,
];

/// Whether an endpoint may be called without an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Required,
    Optional,
}

/// A parameter struct bound to one remote operation.
pub trait Endpoint {
    /// Payload handed back to the caller once the envelope is removed.
    type Output: DeserializeOwned + fmt::Debug;

    const DESCRIPTOR: EndpointDescriptor;
    const AUTH: Auth;
    const ENVELOPE: EnvelopeShape;

    /// Format to request and to decode with.
    fn format(&self) -> OutputFormat;

    /// Write endpoint-specific parameters. `format` and `key` are added by
    /// the client.
    fn encode(&self, query: &mut Query) -> Result<(), ApiError>;
}

/// Compose `{base}/{interface}/{method}/v{version}?{query}`.
pub fn build_url(base_url: &str, endpoint: &EndpointDescriptor, query: &Query) -> String {
    format!(
        "{}/{}/{}/v{}?{}",
        base_url.trim_end_matches('/'),
        endpoint.interface,
        endpoint.method,
        endpoint.version,
        query.encode()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn url_without_params() {
        let endpoint = EndpointDescriptor::new(STEAM_NEWS, "GetNewsForApp", "0002");
        let url = build_url(STEAM_API_BASE_URL, &endpoint, &Query::new());
        assert_eq!(url, "https://api.steampowered.com/ISteamNews/GetNewsForApp/v0002?");
    }

    #[test]
    fn url_with_params() {
        let mut query = Query::new();
        query.set_int("appid", 420u32).set("format", "json");
        let url = build_url("http://localhost:3000", &GET_NEWS_FOR_APP, &query);
        assert_eq!(
            url,
            "http://localhost:3000/ISteamNews/GetNewsForApp/v2?appid=420&format=json"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let url = build_url("http://localhost:3000/", &GET_FRIEND_LIST, &Query::new());
        assert_eq!(url, "http://localhost:3000/ISteamUser/GetFriendList/v1?");
    }

    #[test]
    fn query_survives_the_url() {
        let mut query = Query::new();
        query
            .set("steamids", "1,2,3")
            .set("input_json", r#"{"steamid":1}"#)
            .set("l", "german");
        let url = build_url(STEAM_API_BASE_URL, &GET_PLAYER_SUMMARIES, &query);
        let (_, encoded) = url.split_once('?').unwrap();
        assert_eq!(Query::parse(encoded), query);
    }

    #[test]
    fn descriptor_display() {
        assert_eq!(GET_OWNED_GAMES.to_string(), "IPlayerService/GetOwnedGames/v1");
        assert_eq!(GET_SCHEMA_FOR_GAME.to_string(), "ISteamUserStats/GetSchemaForGame/v2");
    }

    #[test]
    fn endpoint_table_is_unique() {
        let unique: HashSet<_> = ALL_ENDPOINTS.iter().map(|e| (e.interface, e.method)).collect();
        assert_eq!(unique.len(), ALL_ENDPOINTS.len());
    }
}
