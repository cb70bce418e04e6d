//! Request bodies for the HTTP API

use leadwheel_common::LeadInput;
use serde::{Deserialize, Serialize};

/// Body of a lead batch submission.
///
/// Missing fields default to empty so they surface as validation errors.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegisterLeadsParam {
    #[serde(default, alias = "referencia")]
    pub reference: String,
    #[serde(default)]
    pub leads: Vec<LeadInput>,
}
