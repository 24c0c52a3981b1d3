use serde::{Deserialize, Serialize};

/// Proxy-style response: `{"statusCode": .., "body": ".."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub body: String,
}

pub fn ok<T>(body: &T) -> Result<Envelope, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    Ok(Envelope {
        status_code: 200,
        body: serde_json::to_string(body)?,
    })
}
