use crate::client::GongClient;
use crate::consts::EXTENSIVE_CONTENT_SELECTOR;
use crate::envelope::{normalize, unwrap_records, unwrap_single, Resource};
use crate::error::GongError;
use crate::gong_types::{
    AggregateStats, Call, CallTranscript, CrmCallsLink, Deal, Email, LibraryFolder, User,
};
use crate::types::{
    AggregateStatsParams, CallIdsFilter, CrmCallsParams, FilteredRequest, ListCallsParams,
    ListDealsParams, ListEmailsParams, ListTranscriptsParams, ListUsersParams, PaginatedResponse,
    SearchCallsParams, UserIdsFilter, WorkspaceQuery,
};
use crate::utils::{with_path_segment, with_query};

use serde_json::Value;
use tracing::debug;

impl GongClient {
    /// `GET /calls`: one page of calls in a time window.
    pub async fn list_calls(
        &self,
        params: &ListCallsParams,
    ) -> Result<PaginatedResponse<Call>, GongError> {
        let endpoint = with_query("/calls", params)?;
        let envelope: Value = self.get(&endpoint).await?;
        normalize(Resource::Calls, envelope)
    }

    /// There is no search endpoint upstream, so this is `list_calls` over the date window.
    /// `search_term` and `primary_user_ids` are accepted and dropped.
    pub async fn search_calls(
        &self,
        params: &SearchCallsParams,
    ) -> Result<PaginatedResponse<Call>, GongError> {
        if params.search_term.is_some() || params.primary_user_ids.is_some() {
            debug!(
                search_term=?params.search_term,
                primary_user_ids=?params.primary_user_ids,
                "search filters are not sent upstream"
            );
        }
        self.list_calls(&ListCallsParams::from(params)).await
    }

    /// `GET /calls/{id}`.
    pub async fn get_call(&self, call_id: &str) -> Result<Option<Call>, GongError> {
        let endpoint = with_path_segment("/calls", call_id)?;
        let envelope: Value = self.get(&endpoint).await?;
        unwrap_single(Resource::Call, envelope)
    }

    /// `POST /calls/extensive`: calls enriched with parties, content and public comments.
    pub async fn get_extensive_calls(&self, call_ids: &[String]) -> Result<Vec<Call>, GongError> {
        let filter = CallIdsFilter { call_ids };
        let body = FilteredRequest::new(&filter).content_selector(&EXTENSIVE_CONTENT_SELECTOR);
        let envelope: Value = self.post("/calls/extensive", &body).await?;
        unwrap_records(Resource::Calls, envelope)
    }

    /// Transcript for one call, or `None` if upstream has none for that id.
    pub async fn get_transcript(
        &self,
        call_id: &str,
    ) -> Result<Option<CallTranscript>, GongError> {
        let call_ids = [call_id.to_string()];
        let filter = CallIdsFilter {
            call_ids: &call_ids,
        };
        let envelope: Value = self
            .post("/calls/transcript", &FilteredRequest::new(&filter))
            .await?;
        let transcripts: Vec<CallTranscript> = unwrap_records(Resource::Transcripts, envelope)?;
        Ok(transcripts.into_iter().next())
    }

    /// `POST /calls/transcript` over a time window or id set, one page at a time.
    pub async fn list_transcripts(
        &self,
        params: &ListTranscriptsParams,
    ) -> Result<PaginatedResponse<CallTranscript>, GongError> {
        let body = FilteredRequest::new(params).cursor(params.cursor.as_deref());
        let envelope: Value = self.post("/calls/transcript", &body).await?;
        normalize(Resource::Transcripts, envelope)
    }

    /// `POST /calls/crm-links`: which calls touch each of the given CRM objects.
    pub async fn get_calls_by_crm_object(
        &self,
        params: &CrmCallsParams,
    ) -> Result<Vec<CrmCallsLink>, GongError> {
        let envelope: Value = self
            .post("/calls/crm-links", &FilteredRequest::new(params))
            .await?;
        unwrap_records(Resource::CrmCallsLinks, envelope)
    }

    /// `GET /users`.
    pub async fn list_users(
        &self,
        params: &ListUsersParams,
    ) -> Result<PaginatedResponse<User>, GongError> {
        let endpoint = with_query("/users", params)?;
        let envelope: Value = self.get(&endpoint).await?;
        normalize(Resource::Users, envelope)
    }

    /// `GET /users/{id}`.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, GongError> {
        let endpoint = with_path_segment("/users", user_id)?;
        let envelope: Value = self.get(&endpoint).await?;
        unwrap_single(Resource::User, envelope)
    }

    /// `POST /users/extensive`: bulk lookup by id.
    pub async fn get_users(&self, user_ids: &[String]) -> Result<Vec<User>, GongError> {
        let filter = UserIdsFilter { user_ids };
        let envelope: Value = self
            .post("/users/extensive", &FilteredRequest::new(&filter))
            .await?;
        unwrap_records(Resource::Users, envelope)
    }

    /// `POST /crm/deals`.  Empty when no CRM is connected.
    pub async fn list_deals(
        &self,
        params: &ListDealsParams,
    ) -> Result<PaginatedResponse<Deal>, GongError> {
        let body = FilteredRequest::new(params).cursor(params.cursor.as_deref());
        let envelope: Value = self.post("/crm/deals", &body).await?;
        normalize(Resource::Deals, envelope)
    }

    /// `POST /activity/emails`.  Empty when email sync is off.
    pub async fn list_emails(
        &self,
        params: &ListEmailsParams,
    ) -> Result<PaginatedResponse<Email>, GongError> {
        let body = FilteredRequest::new(params).cursor(params.cursor.as_deref());
        let envelope: Value = self.post("/activity/emails", &body).await?;
        normalize(Resource::Emails, envelope)
    }

    /// `GET /library/folders`.
    pub async fn list_library_folders(
        &self,
        workspace_id: Option<&str>,
    ) -> Result<Vec<LibraryFolder>, GongError> {
        let endpoint = with_query("/library/folders", &WorkspaceQuery { workspace_id })?;
        let envelope: Value = self.get(&endpoint).await?;
        unwrap_records(Resource::LibraryFolders, envelope)
    }

    /// `POST /stats/activity/aggregate`.  Records are left as untyped JSON objects.
    pub async fn get_aggregate_stats(
        &self,
        params: &AggregateStatsParams,
    ) -> Result<PaginatedResponse<AggregateStats>, GongError> {
        let body = FilteredRequest::new(params).cursor(params.cursor.as_deref());
        let envelope: Value = self.post("/stats/activity/aggregate", &body).await?;
        normalize(Resource::AggregateStats, envelope)
    }
}
