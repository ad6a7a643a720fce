use serde::{Deserialize, Deserializer};

/// Decode `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod calls {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Call {
        pub id: String,
        #[serde(default)]
        pub url: Option<String>,
        #[serde(default)]
        pub title: Option<String>,
        // ISO-8601 timestamps, passed through as upstream sends them
        #[serde(default)]
        pub scheduled: Option<String>,
        #[serde(default)]
        pub started: Option<String>,
        /// Seconds.
        #[serde(default)]
        pub duration: Option<u64>,
        #[serde(default)]
        pub primary_user_id: Option<String>,
        #[serde(default)]
        pub direction: Option<CallDirection>,
        #[serde(default)]
        pub system: Option<String>,
        #[serde(default)]
        pub scope: Option<CallScope>,
        #[serde(default)]
        pub media: Option<String>,
        #[serde(default)]
        pub language: Option<String>,
        #[serde(default)]
        pub workspace_id: Option<String>,
        #[serde(default)]
        pub purpose: Option<String>,
        #[serde(default)]
        pub meeting_url: Option<String>,
        #[serde(default)]
        pub is_private: Option<bool>,
        #[serde(default)]
        pub client_unique_id: Option<String>,
        #[serde(default)]
        pub custom_data: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub parties: Vec<Party>,
        /// Only filled by the extensive lookup.
        #[serde(default)]
        pub content: Option<CallContent>,
        /// Only filled by the extensive lookup.
        #[serde(default)]
        pub context: Option<Vec<CallContext>>,
        /// Only filled by the extensive lookup.
        #[serde(default)]
        pub collaboration: Option<Collaboration>,
    }

    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CallDirection {
        Inbound,
        Outbound,
        Conference,
        #[serde(other)]
        Unknown,
    }

    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CallScope {
        Internal,
        External,
        #[serde(other)]
        Unknown,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Party {
        pub id: String,
        #[serde(default)]
        pub email_address: Option<String>,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub user_id: Option<String>,
        #[serde(default)]
        pub speaker_id: Option<String>,
        #[serde(default)]
        pub phone_number: Option<String>,
        #[serde(default)]
        pub affiliation: Option<Affiliation>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub methods: Vec<String>,
    }

    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Affiliation {
        Internal,
        External,
        #[serde(other)]
        Unknown,
    }

    #[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct CallContent {
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub trackers: Vec<Tracker>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub topics: Vec<Topic>,
        #[serde(default)]
        pub points_of_interest: Option<PointsOfInterest>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Tracker {
        #[serde(default)]
        pub id: Option<String>,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub count: Option<u32>,
        #[serde(default, rename = "type")]
        pub kind: Option<String>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    pub struct Topic {
        #[serde(default)]
        pub name: Option<String>,
        /// Seconds spent on the topic.
        #[serde(default)]
        pub duration: Option<f64>,
    }

    #[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct PointsOfInterest {
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub action_items: Vec<ActionItem>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct ActionItem {
        #[serde(default)]
        pub snippet: Option<String>,
        #[serde(default)]
        pub snippet_start_time: Option<f64>,
        #[serde(default)]
        pub snippet_end_time: Option<f64>,
        #[serde(default)]
        pub speaker_id: Option<String>,
    }

    /// External system (CRM etc.) records tied to the call.
    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct CallContext {
        #[serde(default)]
        pub system: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub objects: Vec<ContextObject>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct ContextObject {
        #[serde(default)]
        pub object_type: Option<String>,
        #[serde(default)]
        pub object_id: Option<String>,
    }

    #[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Collaboration {
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub public_comments: Vec<Comment>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Comment {
        pub id: String,
        #[serde(default)]
        pub commenter_user_id: Option<String>,
        #[serde(default)]
        pub comment: Option<String>,
        #[serde(default)]
        pub posted: Option<String>,
    }
}
pub use calls::*;

mod transcripts {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct CallTranscript {
        pub call_id: String,
        /// Speaker turns in spoken order.
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub transcript: Vec<SpeakerTurn>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct SpeakerTurn {
        #[serde(default)]
        pub speaker_id: Option<String>,
        #[serde(default)]
        pub topic: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub sentences: Vec<Sentence>,
    }

    /// `start`/`end` are milliseconds from the beginning of the call.
    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    pub struct Sentence {
        #[serde(default)]
        pub start: Option<u64>,
        #[serde(default)]
        pub end: Option<u64>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub text: String,
    }

    impl CallTranscript {
        /// The whole transcript as plain text, one line per speaker turn.
        pub fn plain_text(&self) -> String {
            self.transcript
                .iter()
                .map(|turn| {
                    let text = turn
                        .sentences
                        .iter()
                        .map(|s| s.text.as_str())
                        .collect::<Vec<&str>>()
                        .join(" ");
                    let speaker = turn.speaker_id.as_deref().unwrap_or("unknown");
                    format!("{speaker}: {text}")
                })
                .collect::<Vec<String>>()
                .join("\n")
        }
    }
}
pub use transcripts::*;

mod users {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct User {
        pub id: String,
        #[serde(default)]
        pub email_address: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub email_aliases: Vec<String>,
        #[serde(default)]
        pub first_name: Option<String>,
        #[serde(default)]
        pub last_name: Option<String>,
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub phone_number: Option<String>,
        #[serde(default)]
        pub extension: Option<String>,
        #[serde(default)]
        pub manager_id: Option<String>,
        #[serde(default)]
        pub created: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub active: bool,
        #[serde(default)]
        pub meeting_consent_page_url: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub spoken_languages: Vec<SpokenLanguage>,
        #[serde(default)]
        pub settings: Option<UserSettings>,
    }

    /// Recording consent and import switches.
    #[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
    #[serde(rename_all = "camelCase")]
    pub struct UserSettings {
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub web_conferences_recorded: bool,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub prevent_web_conference_recording: bool,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub telephony_calls_imported: bool,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub emails_imported: bool,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub prevent_email_import: bool,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub non_recorded_meetings_imported: bool,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub gong_connect_enabled: bool,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
    #[serde(rename_all = "camelCase")]
    pub struct SpokenLanguage {
        #[serde(default)]
        pub language: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub primary: bool,
    }

    impl User {
        pub fn full_name(&self) -> Option<String> {
            match (&self.first_name, &self.last_name) {
                (Some(first), Some(last)) => Some(format!("{first} {last}")),
                (Some(name), None) | (None, Some(name)) => Some(name.clone()),
                (None, None) => None,
            }
        }
    }
}
pub use users::*;

mod crm {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CrmObjectType {
        Account,
        Deal,
        Lead,
        Contact,
    }

    /// One CRM object and the ids of every call associated with it.
    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct CrmCallsLink {
        pub object_id: String,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub calls: Vec<String>,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Deal {
        pub id: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub crm_object_id: Option<String>,
        #[serde(default)]
        pub account_id: Option<String>,
        #[serde(default)]
        pub owner_id: Option<String>,
        #[serde(default)]
        pub stage: Option<String>,
        #[serde(default)]
        pub amount: Option<f64>,
        #[serde(default)]
        pub close_date: Option<String>,
        #[serde(default)]
        pub status: Option<String>,
    }
}
pub use crm::*;

mod emails {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub enum EmailDirection {
        Inbound,
        Outbound,
        #[serde(other)]
        Unknown,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct Email {
        pub id: String,
        #[serde(default)]
        pub direction: Option<EmailDirection>,
        #[serde(default)]
        pub from: Option<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub to: Vec<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub cc: Vec<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        pub bcc: Vec<String>,
        #[serde(default)]
        pub subject: Option<String>,
        #[serde(default)]
        pub body: Option<String>,
        #[serde(default)]
        pub sent: Option<String>,
        #[serde(default)]
        pub user_id: Option<String>,
    }
}
pub use emails::*;

mod library {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct LibraryFolder {
        pub id: String,
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub parent_folder_id: Option<String>,
        #[serde(default)]
        pub created_by: Option<String>,
        #[serde(default)]
        pub updated: Option<String>,
    }
}
pub use library::*;

/// Upstream makes no promise about the shape of aggregate activity stats.
pub type AggregateStats = serde_json::Map<String, serde_json::Value>;
