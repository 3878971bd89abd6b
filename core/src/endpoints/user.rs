use serde::Deserialize;

use crate::decode::{EnvelopeShape, Wrapper};
use crate::endpoint::{Auth, Endpoint, EndpointDescriptor, GET_FRIEND_LIST, GET_PLAYER_SUMMARIES};
use crate::error::ApiError;
use crate::format::{OutputFormat, Relationship};
use crate::query::{check_len, check_non_empty, Query};
use crate::types::{FriendList, PlayerSummaries};

/// Most SteamIDs a single `GetPlayerSummaries` call accepts.
pub const MAX_PLAYER_SUMMARY_IDS: usize = 100;

/// Profile data for up to [`MAX_PLAYER_SUMMARY_IDS`] accounts. Requires a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetPlayerSummaries {
    pub steam_ids: Vec<u64>,
    pub format: OutputFormat,
}

impl GetPlayerSummaries {
    pub fn new(steam_ids: impl Into<Vec<u64>>) -> Self {
        Self {
            steam_ids: steam_ids.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for GetPlayerSummaries {
    type Output = PlayerSummaries;

    const DESCRIPTOR: EndpointDescriptor = GET_PLAYER_SUMMARIES;
    const AUTH: Auth = Auth::Required;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::new(Wrapper::Field("response"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        check_non_empty("steamids", self.steam_ids.len())?;
        check_len("steamids", self.steam_ids.len(), MAX_PLAYER_SUMMARY_IDS)?;
        query.set_list("steamids", &self.steam_ids);
        Ok(())
    }
}

/// Friends of a public profile. Requires a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetFriendList {
    pub steam_id: u64,
    pub relationship: Relationship,
    pub format: OutputFormat,
}

impl GetFriendList {
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id,
            ..Default::default()
        }
    }
}

impl Endpoint for GetFriendList {
    type Output = FriendList;

    const DESCRIPTOR: EndpointDescriptor = GET_FRIEND_LIST;
    const AUTH: Auth = Auth::Required;
    const ENVELOPE: EnvelopeShape =
        EnvelopeShape::new(Wrapper::Field("friendslist"), Wrapper::Root);

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn encode(&self, query: &mut Query) -> Result<(), ApiError> {
        query
            .set_int("steamid", self.steam_id)
            .set("relationship", self.relationship.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn steam_ids_are_comma_joined() {
        let params = GetPlayerSummaries::new(vec![76561197960435530, 76561197960265731]);
        let mut query = Query::new();
        params.encode(&mut query).unwrap();
        assert_eq!(
            query.get("steamids"),
            Some("76561197960435530,76561197960265731")
        );
    }

    #[test]
    fn exactly_one_hundred_ids_are_accepted() {
        let params = GetPlayerSummaries::new((0..100).collect::<Vec<u64>>());
        assert!(params.encode(&mut Query::new()).is_ok());
    }

    #[test]
    fn one_hundred_and_one_ids_are_rejected() {
        let params = GetPlayerSummaries::new((0..101).collect::<Vec<u64>>());
        let mut query = Query::new();
        let err = params.encode(&mut query).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::TooMany {
                key: "steamids",
                len: 101,
                max: 100
            })
        ));
        assert!(query.is_empty());
    }

    #[test]
    fn empty_id_list_is_rejected() {
        let mut query = Query::new();
        let err = GetPlayerSummaries::new(Vec::new())
            .encode(&mut query)
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::Empty { key: "steamids" })
        ));
        assert!(query.is_empty());
    }

    #[test]
    fn friend_list_sends_relationship() {
        let mut query = Query::new();
        GetFriendList::new(12345).encode(&mut query).unwrap();
        assert_eq!(query.get("steamid"), Some("12345"));
        assert_eq!(query.get("relationship"), Some("all"));

        let params = GetFriendList {
            relationship: Relationship::Friend,
            ..GetFriendList::new(12345)
        };
        let mut query = Query::new();
        params.encode(&mut query).unwrap();
        assert_eq!(query.get("relationship"), Some("friend"));
    }
}
