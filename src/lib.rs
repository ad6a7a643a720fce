//! Typed client for the Gong REST API.
//!
//! Every list endpoint is normalized to [`PaginatedResponse`], whatever name upstream gives its
//! payload array.  Pass a returned `cursor` back unchanged to fetch the next page; a page without
//! one is the last.

mod client;
mod config;
mod envelope;
mod error;
mod gong_types;
mod pagination;
mod resources;
mod types;
mod utils;

pub use client::{GongClient, HttpMethod};
pub use config::GongConfig;
pub use envelope::{normalize, EnvelopeShape, Resource};
pub use error::GongError;
pub use gong_types::*;
pub use pagination::pages;
pub use types::{
    AggregateStatsParams, CollaborationFields, ContentFields, ContentSelector, CrmCallsParams,
    ExposedFields, ListCallsParams, ListDealsParams, ListEmailsParams, ListTranscriptsParams,
    ListUsersParams, PaginatedResponse, RecordsMeta, SearchCallsParams,
};

pub mod consts {
    use crate::types::{CollaborationFields, ContentFields, ContentSelector, ExposedFields};

    pub const DEFAULT_BASE_URL: &str = "https://api.gong.io/v2";

    /// Fixed selector sent with every extensive calls lookup.
    pub static EXTENSIVE_CONTENT_SELECTOR: ContentSelector = ContentSelector {
        exposed_fields: ExposedFields {
            parties: true,
            content: ContentFields {
                trackers: true,
                topics: true,
                points_of_interest: true,
            },
            collaboration: CollaborationFields {
                public_comments: true,
            },
        },
    };
}
