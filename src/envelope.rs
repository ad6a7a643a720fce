//! Every Gong endpoint wraps its payload differently: list calls come back under `calls`, email
//! activity under `emailActivities`, CRM links under `crmCallsLinks`, and so on.  Pagination
//! metadata lives in a `records` object next to the payload.  This module keeps that knowledge in
//! one table and folds any envelope into a [`PaginatedResponse`].

use crate::error::GongError;
use crate::types::{PaginatedResponse, RecordsMeta};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

/// Every upstream payload this crate understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Call,
    Calls,
    Transcripts,
    User,
    Users,
    Deals,
    Emails,
    CrmCallsLinks,
    LibraryFolders,
    AggregateStats,
}

/// Where a resource's payload and pagination block sit inside the response envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopeShape {
    pub records_field: &'static str,
    pub metadata_field: &'static str,
}

const METADATA_FIELD: &str = "records";

impl Resource {
    pub const fn shape(self) -> EnvelopeShape {
        let records_field = match self {
            Resource::Call => "call",
            Resource::Calls => "calls",
            Resource::Transcripts => "callTranscripts",
            Resource::User => "user",
            Resource::Users => "users",
            Resource::Deals => "deals",
            Resource::Emails => "emailActivities",
            Resource::CrmCallsLinks => "crmCallsLinks",
            Resource::LibraryFolders => "folders",
            Resource::AggregateStats => "usersAggregateActivityStats",
        };
        EnvelopeShape {
            records_field,
            metadata_field: METADATA_FIELD,
        }
    }
}

/// Pull a field out of the envelope, treating absence and `null` alike.
fn take_field(envelope: &mut Value, field: &str) -> Option<Value> {
    match envelope.get_mut(field).map(Value::take) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// Fold a raw envelope into the uniform page shape.  A missing payload array (an integration
/// that isn't configured upstream) gives an empty page, never an error.
pub fn normalize<T: DeserializeOwned>(
    resource: Resource,
    mut envelope: Value,
) -> Result<PaginatedResponse<T>, GongError> {
    let shape = resource.shape();
    let records: Vec<T> = match take_field(&mut envelope, shape.records_field) {
        Some(value) => serde_json::from_value(value)?,
        None => {
            trace!(resource=?resource, field=shape.records_field, "payload field absent");
            Vec::new()
        }
    };
    let meta: RecordsMeta = match take_field(&mut envelope, shape.metadata_field) {
        Some(value) => serde_json::from_value(value)?,
        None => RecordsMeta::default(),
    };

    Ok(PaginatedResponse {
        records,
        cursor: meta.cursor,
        total_records: meta.total_records,
    })
}

/// For endpoints that never paginate: just the payload array.
pub fn unwrap_records<T: DeserializeOwned>(
    resource: Resource,
    envelope: Value,
) -> Result<Vec<T>, GongError> {
    normalize(resource, envelope).map(|page| page.records)
}

/// For endpoints whose payload is a single object.
pub fn unwrap_single<T: DeserializeOwned>(
    resource: Resource,
    mut envelope: Value,
) -> Result<Option<T>, GongError> {
    match take_field(&mut envelope, resource.shape().records_field) {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
