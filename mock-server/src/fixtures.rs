//! Canned responses, one per supported endpoint.
//!
//! The JSON and XML body of each fixture carry the same data, laid out the
//! way the live service lays them out: JSON nests the payload under a
//! wrapper field, XML makes the payload the root element and spells lists as
//! a parent element with repeated children.

/// One endpoint the server answers.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub interface: &'static str,
    pub method: &'static str,
    /// Path segment, including the `v` prefix.
    pub version: &'static str,
    pub key_required: bool,
    /// Query parameters that must be present.
    pub required_params: &'static [&'static str],
    pub json: &'static str,
    pub xml: &'static str,
}

/// Find the fixture served at `/{interface}/{method}/{version}`.
pub fn find(interface: &str, method: &str, version: &str) -> Option<&'static Fixture> {
    FIXTURES
        .iter()
        .find(|f| f.interface == interface && f.method == method && f.version == version)
}

pub const FIXTURES: &[Fixture] = &[
    Fixture {
        interface: "IPlayerService",
        method: "GetOwnedGames",
        version: "v1",
        key_required: true,
        required_params: &["input_json"],
        json: OWNED_GAMES_JSON,
        xml: OWNED_GAMES_XML,
    },
    Fixture {
        interface: "IPlayerService",
        method: "GetRecentlyPlayedGames",
        version: "v1",
        key_required: true,
        required_params: &["steamid"],
        json: RECENTLY_PLAYED_JSON,
        xml: RECENTLY_PLAYED_XML,
    },
    Fixture {
        interface: "ISteamNews",
        method: "GetNewsForApp",
        version: "v2",
        key_required: false,
        required_params: &["appid"],
        json: NEWS_JSON,
        xml: NEWS_XML,
    },
    Fixture {
        interface: "ISteamUser",
        method: "GetPlayerSummaries",
        version: "v2",
        key_required: true,
        required_params: &["steamids"],
        json: PLAYER_SUMMARIES_JSON,
        xml: PLAYER_SUMMARIES_XML,
    },
    Fixture {
        interface: "ISteamUser",
        method: "GetFriendList",
        version: "v1",
        key_required: true,
        required_params: &["steamid"],
        json: FRIEND_LIST_JSON,
        xml: FRIEND_LIST_XML,
    },
    Fixture {
        interface: "ISteamUserStats",
        method: "GetGlobalAchievementPercentagesForApp",
        version: "v2",
        key_required: false,
        required_params: &["gameid"],
        json: ACHIEVEMENT_PERCENTAGES_JSON,
        xml: ACHIEVEMENT_PERCENTAGES_XML,
    },
    Fixture {
        interface: "ISteamUserStats",
        method: "GetNumberOfCurrentPlayers",
        version: "v1",
        key_required: false,
        required_params: &["appid"],
        json: CURRENT_PLAYERS_JSON,
        xml: CURRENT_PLAYERS_XML,
    },
    Fixture {
        interface: "ISteamUserStats",
        method: "GetPlayerAchievements",
        version: "v1",
        key_required: true,
        required_params: &["steamid", "appid"],
        json: PLAYER_ACHIEVEMENTS_JSON,
        xml: PLAYER_ACHIEVEMENTS_XML,
    },
    Fixture {
        interface: "ISteamUserStats",
        method: "GetSchemaForGame",
        version: "v2",
        key_required: true,
        required_params: &["appid"],
        json: SCHEMA_JSON,
        xml: SCHEMA_XML,
    },
    Fixture {
        interface: "ISteamUserStats",
        method: "GetUserStatsForGame",
        version: "v2",
        key_required: true,
        required_params: &["steamid", "appid"],
        json: USER_STATS_JSON,
        xml: USER_STATS_XML,
    },
];

const OWNED_GAMES_JSON: &str = r#"{"response":{"game_count":2,"games":[{"appid":10,"name":"Counter-Strike","playtime_forever":69,"img_icon_url":"6b0312cda02f5f777efa2f3318c307ff9acafbb5","playtime_windows_forever":69,"playtime_mac_forever":0,"playtime_linux_forever":0,"playtime_deck_forever":0,"rtime_last_played":1456772405,"playtime_disconnected":0},{"appid":440,"name":"Team Fortress 2","playtime_forever":1234,"img_icon_url":"e3f595a92552da3d664ad00277fad2107345f743","playtime_2weeks":60,"playtime_windows_forever":1200,"playtime_mac_forever":0,"playtime_linux_forever":34,"playtime_deck_forever":0,"rtime_last_played":1700000000,"content_descriptorids":[2,5],"playtime_disconnected":0}]}}"#;

const OWNED_GAMES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE response>
<response>
	<game_count>2</game_count>
	<games>
		<message>
			<appid>10</appid>
			<name>Counter-Strike</name>
			<playtime_forever>69</playtime_forever>
			<img_icon_url>6b0312cda02f5f777efa2f3318c307ff9acafbb5</img_icon_url>
			<playtime_windows_forever>69</playtime_windows_forever>
			<playtime_mac_forever>0</playtime_mac_forever>
			<playtime_linux_forever>0</playtime_linux_forever>
			<playtime_deck_forever>0</playtime_deck_forever>
			<rtime_last_played>1456772405</rtime_last_played>
			<playtime_disconnected>0</playtime_disconnected>
		</message>
		<message>
			<appid>440</appid>
			<name>Team Fortress 2</name>
			<playtime_forever>1234</playtime_forever>
			<img_icon_url>e3f595a92552da3d664ad00277fad2107345f743</img_icon_url>
			<playtime_2weeks>60</playtime_2weeks>
			<playtime_windows_forever>1200</playtime_windows_forever>
			<playtime_mac_forever>0</playtime_mac_forever>
			<playtime_linux_forever>34</playtime_linux_forever>
			<playtime_deck_forever>0</playtime_deck_forever>
			<rtime_last_played>1700000000</rtime_last_played>
			<content_descriptorids>
				<uint32>2</uint32>
				<uint32>5</uint32>
			</content_descriptorids>
			<playtime_disconnected>0</playtime_disconnected>
		</message>
	</games>
</response>"#;

const RECENTLY_PLAYED_JSON: &str = r#"{"response":{"total_count":1,"games":[{"appid":440,"name":"Team Fortress 2","playtime_2weeks":60,"playtime_forever":1234,"img_icon_url":"e3f595a92552da3d664ad00277fad2107345f743","playtime_windows_forever":1200,"playtime_mac_forever":0,"playtime_linux_forever":34,"playtime_deck_forever":0}]}}"#;

const RECENTLY_PLAYED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE response>
<response>
	<total_count>1</total_count>
	<games>
		<message>
			<appid>440</appid>
			<name>Team Fortress 2</name>
			<playtime_2weeks>60</playtime_2weeks>
			<playtime_forever>1234</playtime_forever>
			<img_icon_url>e3f595a92552da3d664ad00277fad2107345f743</img_icon_url>
			<playtime_windows_forever>1200</playtime_windows_forever>
			<playtime_mac_forever>0</playtime_mac_forever>
			<playtime_linux_forever>34</playtime_linux_forever>
			<playtime_deck_forever>0</playtime_deck_forever>
		</message>
	</games>
</response>"#;

const NEWS_JSON: &str = r#"{"appnews":{"appid":440,"newsitems":[{"gid":"5124590488839571745","title":"Team Fortress 2 Update Released","url":"https://steamstore-a.akamaihd.net/news/externalpost/tf2_blog/5124590488839571745","is_external_url":true,"author":"","contents":"An update to Team Fortress 2 has been released.","feedlabel":"TF2 Blog","date":1700000000,"feedname":"tf2_blog","feed_type":0,"appid":440,"tags":["patchnotes"]},{"gid":"5124590488839571746","title":"Community Spotlight","url":"https://steamstore-a.akamaihd.net/news/externalpost/steam_community_announcements/5124590488839571746","is_external_url":false,"author":"erics","contents":"This week's community spotlight.","feedlabel":"Community Announcements","date":1699990000,"feedname":"steam_community_announcements","feed_type":1,"appid":440}],"count":3264}}"#;

const NEWS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE appnews>
<appnews>
	<appid>440</appid>
	<newsitems>
		<newsitem>
			<gid>5124590488839571745</gid>
			<title>Team Fortress 2 Update Released</title>
			<url>https://steamstore-a.akamaihd.net/news/externalpost/tf2_blog/5124590488839571745</url>
			<is_external_url>true</is_external_url>
			<author></author>
			<contents>An update to Team Fortress 2 has been released.</contents>
			<feedlabel>TF2 Blog</feedlabel>
			<date>1700000000</date>
			<feedname>tf2_blog</feedname>
			<feed_type>0</feed_type>
			<appid>440</appid>
			<tags>
				<tag>patchnotes</tag>
			</tags>
		</newsitem>
		<newsitem>
			<gid>5124590488839571746</gid>
			<title>Community Spotlight</title>
			<url>https://steamstore-a.akamaihd.net/news/externalpost/steam_community_announcements/5124590488839571746</url>
			<is_external_url>false</is_external_url>
			<author>erics</author>
			<contents>This week's community spotlight.</contents>
			<feedlabel>Community Announcements</feedlabel>
			<date>1699990000</date>
			<feedname>steam_community_announcements</feedname>
			<feed_type>1</feed_type>
			<appid>440</appid>
		</newsitem>
	</newsitems>
	<count>3264</count>
</appnews>"#;

const PLAYER_SUMMARIES_JSON: &str = r#"{"response":{"players":[{"steamid":"76561197960435530","communityvisibilitystate":3,"profilestate":1,"personaname":"Robin","profileurl":"https://steamcommunity.com/id/robinwalker/","avatar":"https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c1af7058aaf7a9.jpg","avatarmedium":"https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c1af7058aaf7a9_medium.jpg","avatarfull":"https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c1af7058aaf7a9_full.jpg","avatarhash":"81b5478529dce13bf24b55ac42c1af7058aaf7a9","personastate":0,"realname":"Robin Walker","primaryclanid":"103582791429521412","timecreated":1063407589,"personastateflags":0,"loccountrycode":"US","locstatecode":"WA","loccityid":3961}]}}"#;

const PLAYER_SUMMARIES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE response>
<response>
	<players>
		<player>
			<steamid>76561197960435530</steamid>
			<communityvisibilitystate>3</communityvisibilitystate>
			<profilestate>1</profilestate>
			<personaname>Robin</personaname>
			<profileurl>https://steamcommunity.com/id/robinwalker/</profileurl>
			<avatar>https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c1af7058aaf7a9.jpg</avatar>
			<avatarmedium>https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c1af7058aaf7a9_medium.jpg</avatarmedium>
			<avatarfull>https://avatars.steamstatic.com/81b5478529dce13bf24b55ac42c1af7058aaf7a9_full.jpg</avatarfull>
			<avatarhash>81b5478529dce13bf24b55ac42c1af7058aaf7a9</avatarhash>
			<personastate>0</personastate>
			<realname>Robin Walker</realname>
			<primaryclanid>103582791429521412</primaryclanid>
			<timecreated>1063407589</timecreated>
			<personastateflags>0</personastateflags>
			<loccountrycode>US</loccountrycode>
			<locstatecode>WA</locstatecode>
			<loccityid>3961</loccityid>
		</player>
	</players>
</response>"#;

const FRIEND_LIST_JSON: &str = r#"{"friendslist":{"friends":[{"steamid":"76561197960265731","relationship":"friend","friend_since":0},{"steamid":"76561197960265738","relationship":"friend","friend_since":1250000000}]}}"#;

const FRIEND_LIST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE friendslist>
<friendslist>
	<friends>
		<friend>
			<steamid>76561197960265731</steamid>
			<relationship>friend</relationship>
			<friend_since>0</friend_since>
		</friend>
		<friend>
			<steamid>76561197960265738</steamid>
			<relationship>friend</relationship>
			<friend_since>1250000000</friend_since>
		</friend>
	</friends>
</friendslist>"#;

const ACHIEVEMENT_PERCENTAGES_JSON: &str = r#"{"achievementpercentages":{"achievements":[{"name":"TF_PLAY_GAME_EVERYCLASS","percent":56.5},{"name":"TF_GET_HEALPOINTS","percent":43.25},{"name":"TF_BURN_PLAYERSINMINIMUMTIME","percent":12.5}]}}"#;

const ACHIEVEMENT_PERCENTAGES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE achievementpercentages>
<achievementpercentages>
	<achievements>
		<achievement>
			<name>TF_PLAY_GAME_EVERYCLASS</name>
			<percent>56.5</percent>
		</achievement>
		<achievement>
			<name>TF_GET_HEALPOINTS</name>
			<percent>43.25</percent>
		</achievement>
		<achievement>
			<name>TF_BURN_PLAYERSINMINIMUMTIME</name>
			<percent>12.5</percent>
		</achievement>
	</achievements>
</achievementpercentages>"#;

const CURRENT_PLAYERS_JSON: &str = r#"{"response":{"player_count":61234,"result":1}}"#;

const CURRENT_PLAYERS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE response>
<response>
	<player_count>61234</player_count>
	<result>1</result>
</response>"#;

const PLAYER_ACHIEVEMENTS_JSON: &str = r#"{"playerstats":{"steamID":"76561197960435530","gameName":"Team Fortress 2","achievements":[{"apiname":"TF_PLAY_GAME_EVERYCLASS","achieved":1,"unlocktime":1192579200},{"apiname":"TF_GET_HEALPOINTS","achieved":0,"unlocktime":0}],"success":true}}"#;

const PLAYER_ACHIEVEMENTS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE playerstats>
<playerstats>
	<steamID>76561197960435530</steamID>
	<gameName>Team Fortress 2</gameName>
	<achievements>
		<achievement>
			<apiname>TF_PLAY_GAME_EVERYCLASS</apiname>
			<achieved>1</achieved>
			<unlocktime>1192579200</unlocktime>
		</achievement>
		<achievement>
			<apiname>TF_GET_HEALPOINTS</apiname>
			<achieved>0</achieved>
			<unlocktime>0</unlocktime>
		</achievement>
	</achievements>
	<success>true</success>
</playerstats>"#;

const SCHEMA_JSON: &str = r#"{"game":{"gameName":"Team Fortress 2","gameVersion":"142","availableGameStats":{"stats":[{"name":"Scout.accum.iNumberOfKills","defaultvalue":0,"displayName":"Scout kills"}],"achievements":[{"name":"TF_PLAY_GAME_EVERYCLASS","defaultvalue":0,"displayName":"Head of the Class","hidden":0,"description":"Play a complete round with every class.","icon":"https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/tf_play_game_everyclass.jpg","icongray":"https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/tf_play_game_everyclass_bw.jpg"},{"name":"TF_HIDDEN","defaultvalue":0,"displayName":"Hidden","hidden":1,"icon":"https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/hidden.jpg","icongray":"https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/hidden_bw.jpg"}]}}}"#;

const SCHEMA_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE game>
<game>
	<gameName>Team Fortress 2</gameName>
	<gameVersion>142</gameVersion>
	<availableGameStats>
		<stats>
			<stat>
				<name>Scout.accum.iNumberOfKills</name>
				<defaultvalue>0</defaultvalue>
				<displayName>Scout kills</displayName>
			</stat>
		</stats>
		<achievements>
			<achievement>
				<name>TF_PLAY_GAME_EVERYCLASS</name>
				<defaultvalue>0</defaultvalue>
				<displayName>Head of the Class</displayName>
				<hidden>0</hidden>
				<description>Play a complete round with every class.</description>
				<icon>https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/tf_play_game_everyclass.jpg</icon>
				<icongray>https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/tf_play_game_everyclass_bw.jpg</icongray>
			</achievement>
			<achievement>
				<name>TF_HIDDEN</name>
				<defaultvalue>0</defaultvalue>
				<displayName>Hidden</displayName>
				<hidden>1</hidden>
				<icon>https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/hidden.jpg</icon>
				<icongray>https://cdn.steamstatic.com/steamcommunity/public/images/apps/440/hidden_bw.jpg</icongray>
			</achievement>
		</achievements>
	</availableGameStats>
</game>"#;

const USER_STATS_JSON: &str = r#"{"playerstats":{"steamID":"76561197960435530","gameName":"Team Fortress 2","stats":[{"name":"Scout.accum.iNumberOfKills","value":1337},{"name":"Scout.max.iNumberOfKills","value":12}],"achievements":[{"name":"TF_PLAY_GAME_EVERYCLASS","achieved":1}]}}"#;

const USER_STATS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE playerstats>
<playerstats>
	<steamID>76561197960435530</steamID>
	<gameName>Team Fortress 2</gameName>
	<stats>
		<stat>
			<name>Scout.accum.iNumberOfKills</name>
			<value>1337</value>
		</stat>
		<stat>
			<name>Scout.max.iNumberOfKills</name>
			<value>12</value>
		</stat>
	</stats>
	<achievements>
		<achievement>
			<name>TF_PLAY_GAME_EVERYCLASS</name>
			<achieved>1</achieved>
		</achievement>
	</achievements>
</playerstats>"#;
