use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::nested_list;

/// Games owned by a player (`IPlayerService/GetOwnedGames`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedGames {
    #[serde(rename = "game_count", default)]
    pub game_count: u32,
    /// Absent from the response when the profile is private.
    #[serde(rename = "games", default, deserialize_with = "games")]
    pub games: Vec<Game>,
}

/// Games played in the last two weeks (`IPlayerService/GetRecentlyPlayedGames`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentlyPlayedGames {
    #[serde(rename = "total_count", default)]
    pub total_count: u32,
    #[serde(rename = "games", default, deserialize_with = "games")]
    pub games: Vec<Game>,
}

/// A game entry shared by both player service responses. Playtimes are in
/// minutes, timestamps are unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "appid")]
    pub app_id: u32,
    /// Only sent when app info was requested or for recently played games.
    #[serde(rename = "name")]
    pub name: Option<String>,
    #[serde(rename = "playtime_forever", default)]
    pub playtime_forever: u32,
    #[serde(rename = "img_icon_url")]
    pub img_icon_url: Option<String>,
    #[serde(rename = "rtime_last_played")]
    pub rtime_last_played: Option<u64>,
    #[serde(rename = "playtime_2weeks")]
    pub playtime_2weeks: Option<u32>,
    #[serde(rename = "playtime_windows_forever", default)]
    pub playtime_windows_forever: u32,
    #[serde(rename = "playtime_mac_forever", default)]
    pub playtime_mac_forever: u32,
    #[serde(rename = "playtime_linux_forever", default)]
    pub playtime_linux_forever: u32,
    #[serde(rename = "playtime_deck_forever", default)]
    pub playtime_deck_forever: u32,
    #[serde(rename = "playtime_disconnected", default)]
    pub playtime_disconnected: u32,
    #[serde(
        rename = "content_descriptorids",
        default,
        deserialize_with = "content_descriptor_ids"
    )]
    pub content_descriptor_ids: Vec<u32>,
}

// XML: <games><message>..</message></games>
fn games<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Game>, D::Error> {
    nested_list(deserializer, "message")
}

// XML: <content_descriptorids><uint32>..</uint32></content_descriptorids>
fn content_descriptor_ids<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<u32>, D::Error> {
    nested_list(deserializer, "uint32")
}

impl OwnedGames {
    /// Total playtime across all returned games, in minutes.
    pub fn total_playtime(&self) -> u64 {
        self.games.iter().map(|g| u64::from(g.playtime_forever)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::format::OutputFormat;

    #[test]
    fn game_optional_fields_default() {
        let game: Game =
            decode(OutputFormat::Json, r#"{"appid":10,"playtime_forever":69}"#).unwrap();
        assert_eq!(game.app_id, 10);
        assert_eq!(game.playtime_forever, 69);
        assert!(game.name.is_none());
        assert!(game.rtime_last_played.is_none());
        assert!(game.content_descriptor_ids.is_empty());
    }

    #[test]
    fn content_descriptors_decode_from_both_formats() {
        let json: Game = decode(
            OutputFormat::Json,
            r#"{"appid":730,"content_descriptorids":[2,5]}"#,
        )
        .unwrap();
        let xml: Game = decode(
            OutputFormat::Xml,
            "<message><appid>730</appid><content_descriptorids><uint32>2</uint32><uint32>5</uint32></content_descriptorids></message>",
        )
        .unwrap();
        assert_eq!(json.content_descriptor_ids, vec![2, 5]);
        assert_eq!(json, xml);
    }

    #[test]
    fn private_profile_has_no_games() {
        let owned: OwnedGames = decode(OutputFormat::Json, "{}").unwrap();
        assert_eq!(owned, OwnedGames::default());
    }

    #[test]
    fn total_playtime_sums_minutes() {
        let owned = OwnedGames {
            game_count: 2,
            games: vec![
                Game {
                    app_id: 1,
                    playtime_forever: 30,
                    ..Default::default()
                },
                Game {
                    app_id: 2,
                    playtime_forever: 45,
                    ..Default::default()
                },
            ],
        };
        assert_eq!(owned.total_playtime(), 75);
    }
}
