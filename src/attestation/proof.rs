//! Attestation proof payload types.
//!
//! Shapes match what the attestation network posts to the callback
//! endpoint. Fields beyond the identifier are best-effort: SDK versions
//! disagree on whether the claim context arrives as a JSON object or as a
//! JSON-encoded string, and extracted parameter values may be numbers or
//! numeric strings. Everything except the identifier degrades to a default
//! instead of failing deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A proof delivered by the attestation network after a user completes
/// verification. Cryptographic material (signatures, witness data) is
/// carried opaquely and checked by the verifier seam, not parsed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationProof {
    /// Unique proof identifier assigned by the attestation network.
    #[serde(default)]
    pub identifier: String,

    #[serde(default)]
    pub claim_data: ClaimData,

    /// Top-level context; some SDK versions put the wallet address here
    /// instead of inside the claim context.
    #[serde(default)]
    pub context: Option<ProofContext>,
}

impl AttestationProof {
    /// Wallet address bound to this proof, wherever the SDK put it.
    pub fn wallet_address(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.user_address.as_deref())
            .or(self.claim_data.context.user_address.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimData {
    #[serde(default)]
    pub provider: String,

    /// Claim context holding the extracted parameters. Arrives either as
    /// a JSON object or as a JSON-encoded string.
    #[serde(default, deserialize_with = "context_from_value")]
    pub context: ProofContext,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofContext {
    #[serde(default)]
    pub user_address: Option<String>,

    /// Key-value pairs the provider extracted from the user's account.
    /// Values are kept raw; the extraction layer parses them leniently.
    #[serde(default)]
    pub extracted_parameters: HashMap<String, Value>,

    /// Recent-post statistics, when the provider supplies them.
    #[serde(default, alias = "recent_tweets")]
    pub recent_tweets: Vec<TweetStats>,

    /// Account creation timestamp (RFC 3339), when the provider supplies it.
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

/// Engagement counters for a single post. Providers use two naming
/// conventions for each field; both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweetStats {
    #[serde(default, alias = "favorite_count", deserialize_with = "lenient_count")]
    pub likes: u64,

    #[serde(default, alias = "retweet_count", deserialize_with = "lenient_count")]
    pub retweets: u64,

    #[serde(default, alias = "reply_count", deserialize_with = "lenient_count")]
    pub replies: u64,

    #[serde(default, alias = "impression_count", deserialize_with = "lenient_count")]
    pub impressions: u64,
}

fn context_from_value<'de, D>(deserializer: D) -> Result<ProofContext, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_context(&value))
}

/// Accept both context encodings; malformed input degrades to an empty
/// context so a bad payload costs the proof its metrics, not the request.
fn parse_context(value: &Value) -> ProofContext {
    match value {
        Value::String(encoded) => serde_json::from_str(encoded).unwrap_or_default(),
        other => serde_json::from_value(other.clone()).unwrap_or_default(),
    }
}

/// Parse a count that may arrive as a number or a numeric string.
/// Negative and non-numeric values collapse to zero.
pub(crate) fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.max(0) as u64
            } else if let Some(u) = n.as_u64() {
                u
            } else {
                n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map_or(0, |f| f as u64)
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f > 0.0)
            .map_or(0, |f| f as u64),
        _ => 0,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}
