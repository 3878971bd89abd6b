use serde::Deserialize;

use crate::decode::{EnvelopeShape, Wrapper};
use crate::endpoint::{Auth, Endpoint, EndpointDescriptor, GET_NEWS_FOR_APP};
use crate::error::ApiError;
use crate::format::OutputFormat;
use crate::query::Query;
use crate::types::AppNews;

/// Latest news for an app. Works without a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetNewsForApp {
    pub app_id: u32,
    /// Number of posts to return. The server defaults to 20.
    pub count: Option<u32>,
    /// Truncate contents to this many characters. 0 returns full contents.
    pub max_length: Option<u32>,
    /// Only return posts dated before this unix timestamp.
    pub end_date: Option<u32>,
    /// Only return posts from these feed names.
    pub feeds: Vec<String>,
    pub format: OutputFormat,
}

impl GetNewsForApp {
    pub fn new(app_id: u32) -> Self {
        Self {
            app_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetNewsForApp {
    type Output = AppNews;

    const DESCRIPTOR: EndpointDescriptor = GET_NEWS_FOR_APP;
    const AUTH: Auth = Auth::Optional;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::new(Wrapper::Field("appnews"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query
            .set_int("appid", self.app_id)
            .set_opt_int("count", self.count)
            .set_opt_int("maxlength", self.max_length)
            .set_opt_int("enddate", self.end_date)
            .set_list("feeds", &self.feeds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_requested_fields_only() {
        let params = GetNewsForApp {
            count: Some(75),
            max_length: Some(1),
            ..GetNewsForApp::new(420)
        };
        let mut query = Query::new();
        params.encode(&mut query).unwrap();
        assert_eq!(query.get("appid"), Some("420"));
        assert_eq!(query.get("count"), Some("75"));
        assert_eq!(query.get("maxlength"), Some("1"));
        assert!(!query.contains("enddate"));
        assert!(!query.contains("feeds"));
    }

    #[test]
    fn feeds_are_comma_joined() {
        let params = GetNewsForApp {
            feeds: vec!["steam_community_announcements".into(), "PC Gamer".into()],
            end_date: Some(1_700_000_000),
            ..GetNewsForApp::new(440)
        };
        let mut query = Query::new();
        params.encode(&mut query).unwrap();
        assert_eq!(query.get("feeds"), Some("steam_community_announcements,PC Gamer"));
        assert_eq!(query.get("enddate"), Some("1700000000"));
    }
}
