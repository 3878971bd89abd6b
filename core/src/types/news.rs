use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::nested_list;

/// News for an app (`ISteamNews/GetNewsForApp`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppNews {
    #[serde(rename = "appid")]
    pub app_id: u32,
    #[serde(rename = "newsitems", default, deserialize_with = "news_items")]
    pub news_items: Vec<NewsItem>,
    #[serde(rename = "count", default)]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(rename = "gid")]
    pub gid: String,
    #[serde(rename = "title")]
    pub title: String,
    #[serde(rename = "url")]
    pub url: String,
    #[serde(rename = "is_external_url")]
    pub is_external_url: bool,
    #[serde(rename = "author", default)]
    pub author: String,
    #[serde(rename = "contents", default)]
    pub contents: String,
    #[serde(rename = "feedlabel", default)]
    pub feed_label: String,
    /// Unix timestamp.
    #[serde(rename = "date")]
    pub date: u64,
    #[serde(rename = "feedname", default)]
    pub feed_name: String,
    #[serde(rename = "feed_type", default)]
    pub feed_type: u32,
    /// App the item was posted for; may differ from the requested app.
    #[serde(rename = "appid")]
    pub app_id: u32,
    #[serde(rename = "tags", default, deserialize_with = "tags")]
    pub tags: Vec<String>,
}

// XML: <newsitems><newsitem>..</newsitem></newsitems>
fn news_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<NewsItem>, D::Error> {
    nested_list(deserializer, "newsitem")
}

// XML: <tags><tag>..</tag></tags>
fn tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    nested_list(deserializer, "tag")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::format::OutputFormat;

    #[test]
    fn tags_decode_from_both_formats() {
        let json: NewsItem = decode(
            OutputFormat::Json,
            r#"{"gid":"1","title":"t","url":"u","is_external_url":false,"date":5,"appid":440,"tags":["patchnotes","mod_require_rereview"]}"#,
        )
        .unwrap();
        let xml: NewsItem = decode(
            OutputFormat::Xml,
            "<newsitem><gid>1</gid><title>t</title><url>u</url><is_external_url>false</is_external_url><date>5</date><appid>440</appid><tags><tag>patchnotes</tag><tag>mod_require_rereview</tag></tags></newsitem>",
        )
        .unwrap();
        assert_eq!(json.tags, vec!["patchnotes", "mod_require_rereview"]);
        assert_eq!(json, xml);
    }
}
