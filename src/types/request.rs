use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub(crate) struct Credentials {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Deserialize)]
pub(crate) struct NewChirp {
    pub(crate) body: String,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChirpQuery {
    pub(crate) author_id: Option<String>,
    #[serde(default)]
    pub(crate) sort: SortOrder,
}

#[derive(Deserialize)]
pub(crate) struct WebhookData {
    pub(crate) user_id: Uuid,
}

#[derive(Deserialize)]
pub(crate) struct Webhook {
    pub(crate) event: String,
    pub(crate) data: WebhookData,
}
