//! Request builder, response parser and executor for the Steam Web API.
//!
//! # Design
//! `SteamClient` holds a base URL, an optional API key and a [`Transport`],
//! and carries no mutable state between calls. Every operation goes through
//! the same three steps:
//!
//! - [`SteamClient::build_request`] checks the key and format, encodes the
//!   parameters and produces an [`HttpRequest`] without touching the network;
//! - the transport performs the GET;
//! - [`SteamClient::parse_response`] maps non-2xx statuses to errors and
//!   decodes the body with the same format that was requested.
//!
//! Callers who want to run the I/O themselves can use the first and last
//! step directly; [`SteamClient::call`] ties them to the client's transport.

use std::fmt;

use crate::config::ClientConfig;
use crate::decode::decode_enveloped;
use crate::endpoint::{build_url, Auth, Endpoint};
use crate::endpoints::{
    GetFriendList, GetGlobalAchievementPercentagesForApp, GetNewsForApp, GetNumberOfCurrentPlayers,
    GetOwnedGames, GetPlayerAchievements, GetPlayerSummaries, GetRecentlyPlayedGames,
    GetSchemaForGame, GetUserStatsForGame,
};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::query::Query;
use crate::types::{
    AppNews, FriendList, GameSchema, GlobalAchievementPercentages, NumberOfCurrentPlayers,
    OwnedGames, PlayerAchievements, PlayerSummaries, RecentlyPlayedGames, UserStats,
};

/// Synchronous client for the Steam Web API.
#[derive(Clone)]
pub struct SteamClient<T> {
    base_url: String,
    key: Option<String>,
    transport: T,
}

impl<T: Transport> SteamClient<T> {
    /// An anonymous client. Endpoints that require a key fail with
    /// `AuthenticationRequired` without sending anything.
    pub fn new(transport: T) -> Self {
        Self::from_config(ClientConfig::default(), transport)
    }

    /// A client that attaches `key` to every request. An empty key counts as
    /// no key.
    pub fn with_key(key: impl Into<String>, transport: T) -> Self {
        Self::from_config(ClientConfig::default().with_key(key), transport)
    }

    pub fn from_config(config: ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url,
            key: config.key.filter(|key| !key.is_empty()),
            transport,
        }
    }

    /// Send requests to `base_url` instead of the public Steam host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the GET request for `params`.
    ///
    /// Fails before any I/O. The key is checked first, then the parameters,
    /// then whether the format can be decoded.
    pub fn build_request<E: Endpoint>(&self, params: &E) -> Result<HttpRequest, ApiError> {
        let endpoint = E::DESCRIPTOR;
        if E::AUTH == Auth::Required && self.key.is_none() {
            return Err(ApiError::AuthenticationRequired { endpoint });
        }

        let mut query = Query::new();
        params.encode(&mut query)?;

        let format = params.format();
        if !format.is_supported() {
            return Err(ApiError::UnsupportedFormat(format.to_string()));
        }
        query.set("format", format.as_str());
        if let Some(key) = &self.key {
            query.set("key", key.as_str());
        }

        tracing::debug!(
            interface = endpoint.interface,
            method = endpoint.method,
            version = endpoint.version,
            %format,
            "dispatching request"
        );

        Ok(HttpRequest {
            endpoint,
            url: build_url(&self.base_url, &endpoint, &query),
        })
    }

    /// Turn the response to a request built from `params` into its payload.
    pub fn parse_response<E: Endpoint>(
        &self,
        params: &E,
        response: HttpResponse,
    ) -> Result<E::Output, ApiError> {
        tracing::debug!(
            method = E::DESCRIPTOR.method,
            status = response.status,
            "received response"
        );
        check_status(&response)?;
        decode_enveloped(params.format(), &response.body, &E::ENVELOPE)
    }

    /// Build, send and parse in one go.
    pub fn call<E: Endpoint>(&self, params: &E) -> Result<E::Output, ApiError> {
        let request = self.build_request(params)?;
        let response = self.transport.get(&request.url)?;
        self.parse_response(params, response)
    }

    pub fn get_owned_games(&self, params: &GetOwnedGames) -> Result<OwnedGames, ApiError> {
        self.call(params)
    }

    pub fn get_recently_played_games(
        &self,
        params: &GetRecentlyPlayedGames,
    ) -> Result<RecentlyPlayedGames, ApiError> {
        self.call(params)
    }

    pub fn get_news_for_app(&self, params: &GetNewsForApp) -> Result<AppNews, ApiError> {
        self.call(params)
    }

    pub fn get_player_summaries(
        &self,
        params: &GetPlayerSummaries,
    ) -> Result<PlayerSummaries, ApiError> {
        self.call(params)
    }

    pub fn get_friend_list(&self, params: &GetFriendList) -> Result<FriendList, ApiError> {
        self.call(params)
    }

    pub fn get_global_achievement_percentages_for_app(
        &self,
        params: &GetGlobalAchievementPercentagesForApp,
    ) -> Result<GlobalAchievementPercentages, ApiError> {
        self.call(params)
    }

    pub fn get_number_of_current_players(
        &self,
        params: &GetNumberOfCurrentPlayers,
    ) -> Result<NumberOfCurrentPlayers, ApiError> {
        self.call(params)
    }

    pub fn get_player_achievements(
        &self,
        params: &GetPlayerAchievements,
    ) -> Result<PlayerAchievements, ApiError> {
        self.call(params)
    }

    pub fn get_schema_for_game(&self, params: &GetSchemaForGame) -> Result<GameSchema, ApiError> {
        self.call(params)
    }

    pub fn get_user_stats_for_game(
        &self,
        params: &GetUserStatsForGame,
    ) -> Result<UserStats, ApiError> {
        self.call(params)
    }
}

impl<T> fmt::Debug for SteamClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamClient")
            .field("base_url", &self.base_url)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Map any non-2xx status to `HttpStatus`, keeping the body undecoded.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::endpoint::{ALL_ENDPOINTS, GET_OWNED_GAMES};
    use crate::error::{TransportError, ValidationError};
    use crate::format::OutputFormat;

    const BASE: &str = "http://localhost:3000";

    /// Records every URL and answers with a canned response.
    struct Recorder {
        urls: RefCell<Vec<String>>,
        status: u16,
        body: String,
    }

    impl Recorder {
        fn ok(body: &str) -> Self {
            Self::with_status(200, body)
        }

        fn with_status(status: u16, body: &str) -> Self {
            Self {
                urls: RefCell::new(Vec::new()),
                status,
                body: body.to_string(),
            }
        }

        fn calls(&self) -> usize {
            self.urls.borrow().len()
        }

        fn last_query(&self) -> Query {
            let urls = self.urls.borrow();
            let url = urls.last().expect("no request was sent");
            let (_, query) = url.split_once('?').expect("url without query");
            Query::parse(query)
        }
    }

    impl Transport for Recorder {
        fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(HttpResponse::new(self.status, self.body.clone()))
        }
    }

    struct Unreachable;

    impl Transport for Unreachable {
        fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
            Err(TransportError::new("connection refused"))
        }
    }

    fn keyed(transport: &Recorder) -> SteamClient<&Recorder> {
        SteamClient::with_key("TESTKEY", transport).with_base_url(BASE)
    }

    fn anonymous(transport: &Recorder) -> SteamClient<&Recorder> {
        SteamClient::new(transport).with_base_url(BASE)
    }

    #[test]
    fn owned_games_scenario() {
        let transport = Recorder::ok(
            r#"{"response":{"game_count":1,"games":[{"appid":10,"playtime_forever":69,"playtime_windows_forever":0,"playtime_mac_forever":0,"playtime_linux_forever":0}]}}"#,
        );
        let client = keyed(&transport);
        let params = GetOwnedGames {
            include_app_info: true,
            include_played_free_games: true,
            ..GetOwnedGames::new(123456)
        };

        let owned = client.get_owned_games(&params).unwrap();
        assert_eq!(owned.game_count, 1);
        assert_eq!(owned.games.len(), 1);
        assert_eq!(owned.games[0].app_id, 10);
        assert_eq!(owned.games[0].playtime_forever, 69);

        let url = transport.urls.borrow()[0].clone();
        assert!(url.starts_with("http://localhost:3000/IPlayerService/GetOwnedGames/v1?"));
        let query = transport.last_query();
        assert_eq!(query.get("format"), Some("json"));
        assert_eq!(query.get("key"), Some("TESTKEY"));
        assert_eq!(
            query.get("input_json"),
            Some(r#"{"include_appinfo":true,"include_played_free_games":true,"steamid":123456}"#)
        );
    }

    #[test]
    fn news_scenario_unwraps_appnews() {
        let transport = Recorder::ok(
            r#"{"appnews":{"appid":420,"newsitems":[{"gid":"1","title":"Half-Life 2: Episode Two","url":"https://example.com/1","is_external_url":true,"author":"","contents":"E","feedlabel":"PC Gamer","date":1700000000,"feedname":"pcgamer","feed_type":0,"appid":420}],"count":75}}"#,
        );
        let client = anonymous(&transport);
        let params = GetNewsForApp {
            count: Some(75),
            max_length: Some(1),
            ..GetNewsForApp::new(420)
        };

        let news = client.get_news_for_app(&params).unwrap();
        assert_eq!(news.app_id, 420);
        assert_eq!(news.count, 75);
        assert_eq!(news.news_items.len(), 1);
        assert_eq!(news.news_items[0].feed_label, "PC Gamer");

        let query = transport.last_query();
        assert_eq!(query.get("appid"), Some("420"));
        assert_eq!(query.get("count"), Some("75"));
        assert_eq!(query.get("maxlength"), Some("1"));
        assert!(!query.contains("key"));
    }

    #[test]
    fn unsupported_format_fails_for_every_endpoint() {
        let transport = Recorder::ok("{}");
        let client = keyed(&transport);

        fn check<E: Endpoint>(client: &SteamClient<&Recorder>, params: E) {
            let err = client.call(&params).unwrap_err();
            assert!(
                matches!(&err, ApiError::UnsupportedFormat(name) if name == "vdf"),
                "{} returned {err:?}",
                E::DESCRIPTOR
            );
            assert_eq!(err.to_string(), "unsupported format requested: vdf");
        }

        let vdf = OutputFormat::Vdf;
        check(
            &client,
            GetOwnedGames {
                format: vdf,
                ..GetOwnedGames::new(1)
            },
        );
        check(
            &client,
            GetRecentlyPlayedGames {
                format: vdf,
                ..GetRecentlyPlayedGames::new(1)
            },
        );
        check(
            &client,
            GetNewsForApp {
                format: vdf,
                ..GetNewsForApp::new(440)
            },
        );
        check(
            &client,
            GetPlayerSummaries {
                format: vdf,
                ..GetPlayerSummaries::new(vec![1])
            },
        );
        check(
            &client,
            GetFriendList {
                format: vdf,
                ..GetFriendList::new(1)
            },
        );
        check(
            &client,
            GetGlobalAchievementPercentagesForApp {
                format: vdf,
                ..GetGlobalAchievementPercentagesForApp::new(440)
            },
        );
        check(
            &client,
            GetNumberOfCurrentPlayers {
                format: vdf,
                ..GetNumberOfCurrentPlayers::new(440)
            },
        );
        check(
            &client,
            GetPlayerAchievements {
                format: vdf,
                ..GetPlayerAchievements::new(1, 440)
            },
        );
        check(
            &client,
            GetSchemaForGame {
                format: vdf,
                ..GetSchemaForGame::new(440)
            },
        );
        check(
            &client,
            GetUserStatsForGame {
                format: vdf,
                ..GetUserStatsForGame::new(1, 440)
            },
        );

        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn key_required_endpoints_fail_without_io() {
        let transport = Recorder::ok("{}");
        let client = anonymous(&transport);

        let errors = [
            client.get_owned_games(&GetOwnedGames::new(1)).unwrap_err(),
            client
                .get_recently_played_games(&GetRecentlyPlayedGames::new(1))
                .unwrap_err(),
            client
                .get_player_summaries(&GetPlayerSummaries::new(vec![1]))
                .unwrap_err(),
            client.get_friend_list(&GetFriendList::new(1)).unwrap_err(),
            client
                .get_player_achievements(&GetPlayerAchievements::new(1, 440))
                .unwrap_err(),
            client
                .get_schema_for_game(&GetSchemaForGame::new(440))
                .unwrap_err(),
            client
                .get_user_stats_for_game(&GetUserStatsForGame::new(1, 440))
                .unwrap_err(),
        ];
        for err in errors {
            match err {
                ApiError::AuthenticationRequired { endpoint } => {
                    assert!(ALL_ENDPOINTS.contains(&endpoint));
                }
                other => panic!("expected AuthenticationRequired, got {other:?}"),
            }
        }
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn auth_error_names_the_endpoint() {
        let transport = Recorder::ok("{}");
        let err = anonymous(&transport)
            .get_owned_games(&GetOwnedGames::new(1))
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::AuthenticationRequired { endpoint } if endpoint == GET_OWNED_GAMES
        ));
    }

    #[test]
    fn empty_key_counts_as_anonymous() {
        let transport = Recorder::ok("{}");
        let client = SteamClient::with_key("", &transport);
        assert!(!client.has_key());
        let err = client.get_friend_list(&GetFriendList::new(1)).unwrap_err();
        assert!(matches!(err, ApiError::AuthenticationRequired { .. }));
    }

    #[test]
    fn optional_endpoints_work_anonymously() {
        let transport = Recorder::ok(r#"{"response":{"player_count":1234,"result":1}}"#);
        let client = anonymous(&transport);
        let players = client
            .get_number_of_current_players(&GetNumberOfCurrentPlayers::new(730))
            .unwrap();
        assert_eq!(players.player_count, 1234);
        assert_eq!(players.result, 1);

        let query = transport.last_query();
        assert!(!query.contains("key"));
        assert_eq!(query.get("appid"), Some("730"));
        assert_eq!(query.get("format"), Some("json"));
    }

    #[test]
    fn optional_endpoints_still_send_a_configured_key() {
        let transport = Recorder::ok(r#"{"achievementpercentages":{"achievements":[]}}"#);
        let client = keyed(&transport);
        let percentages = client
            .get_global_achievement_percentages_for_app(
                &GetGlobalAchievementPercentagesForApp::new(440),
            )
            .unwrap();
        assert!(percentages.achievements.is_empty());
        assert_eq!(transport.last_query().get("key"), Some("TESTKEY"));
        assert_eq!(transport.last_query().get("gameid"), Some("440"));
    }

    #[test]
    fn too_many_steam_ids_fail_without_io() {
        let transport = Recorder::ok("{}");
        let client = keyed(&transport);
        for len in [101u64, 150] {
            let params = GetPlayerSummaries::new((0..len).collect::<Vec<_>>());
            let err = client.get_player_summaries(&params).unwrap_err();
            assert!(matches!(
                err,
                ApiError::Validation(ValidationError::TooMany { key: "steamids", max: 100, .. })
            ));
        }
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn empty_steam_ids_fail_without_io() {
        let transport = Recorder::ok("{}");
        let client = keyed(&transport);
        let err = client
            .get_player_summaries(&GetPlayerSummaries::new(Vec::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::Empty { key: "steamids" })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn invalid_parameters_are_reported_before_the_format() {
        let transport = Recorder::ok("{}");
        let client = keyed(&transport);
        let params = GetPlayerSummaries {
            format: OutputFormat::Vdf,
            ..GetPlayerSummaries::new((0..150).collect::<Vec<_>>())
        };
        let err = client.call(&params).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::TooMany { len: 150, .. })
        ));

        let err = anonymous(&transport).call(&params).unwrap_err();
        assert!(matches!(err, ApiError::AuthenticationRequired { .. }));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn non_success_status_keeps_the_body() {
        let transport = Recorder::with_status(403, "<html>Forbidden</html>");
        let client = keyed(&transport);
        let err = client.get_friend_list(&GetFriendList::new(1)).unwrap_err();
        match err {
            ApiError::HttpStatus { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "<html>Forbidden</html>");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn transport_errors_propagate() {
        let client = SteamClient::new(Unreachable);
        let err = client
            .get_number_of_current_players(&GetNumberOfCurrentPlayers::new(730))
            .unwrap_err();
        match err {
            ApiError::Transport(inner) => assert_eq!(inner.to_string(), "connection refused"),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let transport = Recorder::ok("not json");
        let client = anonymous(&transport);
        let err = client
            .get_news_for_app(&GetNewsForApp::new(440))
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Decode { format: OutputFormat::Json, .. }
        ));
    }

    #[test]
    fn xml_is_requested_and_decoded_as_xml() {
        let transport = Recorder::ok(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<friendslist><friends><friend><steamid>76561197960265731</steamid><relationship>friend</relationship><friend_since>0</friend_since></friend></friends></friendslist>",
        );
        let client = keyed(&transport);
        let params = GetFriendList {
            format: OutputFormat::Xml,
            ..GetFriendList::new(76561197960435530)
        };
        let friends = client.get_friend_list(&params).unwrap();
        assert_eq!(friends.friends.len(), 1);
        assert_eq!(friends.friends[0].steam_id, "76561197960265731");
        assert_eq!(transport.last_query().get("format"), Some("xml"));
    }

    #[test]
    fn build_request_is_pure() {
        let transport = Recorder::ok("{}");
        let client = keyed(&transport);
        let request = client
            .build_request(&GetSchemaForGame::new(440))
            .unwrap();
        assert_eq!(
            request.url,
            "http://localhost:3000/ISteamUserStats/GetSchemaForGame/v2?appid=440&format=json&key=TESTKEY"
        );
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn parse_response_without_transport() {
        let transport = Recorder::ok("");
        let client = keyed(&transport);
        let params = GetUserStatsForGame::new(1, 440);
        let stats = client
            .parse_response(
                &params,
                HttpResponse::new(
                    200,
                    r#"{"playerstats":{"steamID":"1","gameName":"Team Fortress 2","stats":[{"name":"kills","value":7}]}}"#,
                ),
            )
            .unwrap();
        assert_eq!(stats.game_name, "Team Fortress 2");
        assert_eq!(stats.stat("kills"), Some(7));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn debug_redacts_the_key() {
        let transport = Recorder::ok("");
        let debug = format!("{:?}", keyed(&transport));
        assert!(!debug.contains("TESTKEY"));
        assert!(debug.contains("localhost:3000"));
    }
}
