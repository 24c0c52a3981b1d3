use crate::error::ModelError;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw row as the table hands it back.
pub type Item = HashMap<String, AttributeValue>;

/// Public shape of a stored row: `pk`, `sk` and the `Description` attribute
/// renamed to `description`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub pk: String,
    pub sk: String,
    pub description: String,
}

impl ResultItem {
    pub fn from_dynamo_item(item: &Item) -> Result<ResultItem, ModelError> {
        let sk = string_attribute(item, "sk");
        let missing = |attribute: &'static str| ModelError::MissingAttribute {
            attribute,
            sk: sk.clone(),
        };

        Ok(ResultItem {
            pk: string_attribute(item, "pk").ok_or_else(|| missing("pk"))?,
            sk: sk.clone().ok_or_else(|| missing("sk"))?,
            description: string_attribute(item, "Description")
                .ok_or_else(|| missing("Description"))?,
        })
    }
}

fn string_attribute(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|value| value.as_s().ok())
        .map(|s| s.to_owned())
}
