use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::nested_list;

/// Profiles returned by `ISteamUser/GetPlayerSummaries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPlayerSummaries")]
pub struct PlayerSummaries {
    #[serde(rename = "players")]
    pub players: Vec<PlayerSummary>,
}

// XML answers carry either <players><player>..</player></players> or bare
// <player> elements under the root.
#[derive(Deserialize)]
struct RawPlayerSummaries {
    #[serde(default, deserialize_with = "players")]
    players: Vec<PlayerSummary>,
    #[serde(default)]
    player: Vec<PlayerSummary>,
}

impl From<RawPlayerSummaries> for PlayerSummaries {
    fn from(raw: RawPlayerSummaries) -> Self {
        let mut players = raw.players;
        players.extend(raw.player);
        Self { players }
    }
}

/// Public profile data for one account.
///
/// Fields marked optional are only sent when the profile is public or when
/// the user filled them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// 64-bit SteamID, as a decimal string.
    #[serde(rename = "steamid")]
    pub steam_id: String,
    /// 1 = private or friends only, 3 = public.
    #[serde(rename = "communityvisibilitystate")]
    pub community_visibility_state: u32,
    /// 1 when the user has configured a community profile.
    #[serde(rename = "profilestate", default)]
    pub profile_state: u32,
    #[serde(rename = "personaname")]
    pub persona_name: String,
    #[serde(rename = "commentpermission")]
    pub comment_permission: Option<u32>,
    #[serde(rename = "profileurl")]
    pub profile_url: String,
    #[serde(rename = "avatar")]
    pub avatar: String,
    #[serde(rename = "avatarmedium")]
    pub avatar_medium: String,
    #[serde(rename = "avatarfull")]
    pub avatar_full: String,
    #[serde(rename = "avatarhash", default)]
    pub avatar_hash: String,
    /// Unix timestamp.
    #[serde(rename = "lastlogoff")]
    pub last_log_off: Option<u64>,
    /// 0 offline, 1 online, 2 busy, 3 away, 4 snooze, 5 looking to trade,
    /// 6 looking to play.
    #[serde(rename = "personastate")]
    pub persona_state: u32,
    #[serde(rename = "realname")]
    pub real_name: Option<String>,
    #[serde(rename = "primaryclanid")]
    pub primary_clan_id: Option<String>,
    /// Unix timestamp.
    #[serde(rename = "timecreated")]
    pub time_created: Option<u64>,
    #[serde(rename = "personastateflags")]
    pub persona_state_flags: Option<u32>,
    /// Set while the user is in game.
    #[serde(rename = "gameid")]
    pub game_id: Option<String>,
    #[serde(rename = "gameextrainfo")]
    pub game_extra_info: Option<String>,
    #[serde(rename = "loccountrycode")]
    pub loc_country_code: Option<String>,
    #[serde(rename = "locstatecode")]
    pub loc_state_code: Option<String>,
    #[serde(rename = "loccityid")]
    pub loc_city_id: Option<u32>,
}

impl PlayerSummary {
    pub fn is_public(&self) -> bool {
        self.community_visibility_state == 3
    }
}

/// Friends of an account (`ISteamUser/GetFriendList`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendList {
    #[serde(rename = "friends", default, deserialize_with = "friends")]
    pub friends: Vec<Friend>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "relationship")]
    pub relationship: String,
    /// Unix timestamp, 0 when unknown.
    #[serde(rename = "friend_since", default)]
    pub friend_since: u64,
}

// XML: <players><player>..</player></players>
fn players<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<PlayerSummary>, D::Error> {
    nested_list(deserializer, "player")
}

// XML: <friends><friend>..</friend></friends>
fn friends<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Friend>, D::Error> {
    nested_list(deserializer, "friend")
}
