use crate::gong_types::CrmObjectType;

use serde::{Deserialize, Serialize};

/// The normalized list envelope every paginated method returns, whatever the upstream named its
/// array field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Records in upstream page order.
    pub records: Vec<T>,
    /// Opaque continuation token.  `None` means this was the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Upstream's count of matches across all pages, not `records.len()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
}

impl<T> PaginatedResponse<T> {
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            cursor: None,
            total_records: None,
        }
    }
}

/// Pagination block nested under `records` in every Gong list envelope.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordsMeta {
    pub total_records: Option<u64>,
    pub current_page_size: Option<u64>,
    pub current_page_number: Option<u64>,
    pub cursor: Option<String>,
}

/// Body shape shared by every POST endpoint: `{"filter": {...}, "cursor": "..."}`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredRequest<'a, F: Serialize> {
    pub filter: &'a F,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_selector: Option<&'a ContentSelector>,
}

impl<'a, F: Serialize> FilteredRequest<'a, F> {
    pub fn new(filter: &'a F) -> Self {
        Self {
            filter,
            cursor: None,
            content_selector: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<&'a str>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn content_selector(mut self, content_selector: &'a ContentSelector) -> Self {
        self.content_selector = Some(content_selector);
        self
    }
}

/// Which enrichment blocks `/calls/extensive` should return.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSelector {
    pub exposed_fields: ExposedFields,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExposedFields {
    pub parties: bool,
    pub content: ContentFields,
    pub collaboration: CollaborationFields,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentFields {
    pub trackers: bool,
    pub topics: bool,
    pub points_of_interest: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationFields {
    pub public_comments: bool,
}

/// Query for `GET /calls`.
#[derive(Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListCallsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Accepted by `search_calls`.  Only the date window and cursor reach upstream; there is no
/// search endpoint, so `search_term` and `primary_user_ids` are dropped.
#[derive(Clone, Default, Debug)]
pub struct SearchCallsParams {
    pub search_term: Option<String>,
    pub primary_user_ids: Option<Vec<String>>,
    pub from_date_time: Option<String>,
    pub to_date_time: Option<String>,
    pub cursor: Option<String>,
}

impl From<&SearchCallsParams> for ListCallsParams {
    fn from(params: &SearchCallsParams) -> Self {
        Self {
            from_date_time: params.from_date_time.clone(),
            to_date_time: params.to_date_time.clone(),
            workspace_id: None,
            cursor: params.cursor.clone(),
        }
    }
}

/// Query for `GET /users`.
#[derive(Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_avatars: Option<bool>,
}

/// Filter for `POST /crm/deals`.  `cursor` travels beside the filter, not inside it.
#[derive(Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListDealsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip)]
    pub cursor: Option<String>,
}

/// Filter for `POST /activity/emails`.
#[derive(Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListEmailsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
    #[serde(skip)]
    pub cursor: Option<String>,
}

/// Filter for paging through `POST /calls/transcript`.
#[derive(Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListTranscriptsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_ids: Option<Vec<String>>,
    #[serde(skip)]
    pub cursor: Option<String>,
}

/// Filter for `POST /stats/activity/aggregate`.  Dates are plain `YYYY-MM-DD`.
#[derive(Serialize, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
    #[serde(skip)]
    pub cursor: Option<String>,
}

/// Filter for `POST /calls/crm-links`.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CrmCallsParams {
    pub object_type: CrmObjectType,
    pub object_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date_time: Option<String>,
}

/// Filter keyed by call ids (`/calls/extensive`, single transcript lookup).
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CallIdsFilter<'a> {
    pub call_ids: &'a [String],
}

/// Filter keyed by user ids (`/users/extensive`).
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserIdsFilter<'a> {
    pub user_ids: &'a [String],
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<&'a str>,
}
