use crate::config::TABLE_NAME_VAR;
use crate::error::{map_query_error, RepositoryError, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::{types::AttributeValue, Client};
use maplit::hashmap;
use model::item::{Item, ResultItem};

/// Read access to one partition of the item table.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Rows of the first result page, in the store's sort-key order.
    async fn query_partition(&self, partition_key: &str) -> Result<Vec<Item>>;
}

pub struct ItemRepository {
    client: Client,
    table_name: Option<String>,
}

impl ItemRepository {
    pub fn new(shared_config: &SdkConfig, table_name: Option<String>) -> ItemRepository {
        ItemRepository::from_client(Client::new(shared_config), table_name)
    }

    pub fn from_client(client: Client, table_name: Option<String>) -> ItemRepository {
        ItemRepository { client, table_name }
    }
}

#[async_trait]
impl ItemSource for ItemRepository {
    async fn query_partition(&self, partition_key: &str) -> Result<Vec<Item>> {
        let table_name = self.table_name.as_deref().ok_or_else(|| {
            RepositoryError::DependencyUnavailable(format!("{} is not set", TABLE_NAME_VAR))
        })?;

        let attribute_values = hashmap! {
            ":pk".to_string() => AttributeValue::S(partition_key.to_string())
        };

        // Only the first page is read, continuation keys are not followed.
        let response = self
            .client
            .query()
            .key_condition_expression("pk = :pk")
            .set_expression_attribute_values(Some(attribute_values))
            .table_name(table_name)
            .send()
            .await
            .map_err(|err| map_query_error(err, table_name))?;

        if response.last_evaluated_key().is_some() {
            tracing::warn!(
                "Query on {} for {} returned more than one page, only the first is used",
                table_name,
                partition_key
            );
        }

        Ok(response.items().to_vec())
    }
}

/// Projects rows in order, failing on the first malformed one.
pub fn to_results(items: &[Item]) -> Result<Vec<ResultItem>> {
    items
        .iter()
        .map(|item| ResultItem::from_dynamo_item(item).map_err(RepositoryError::from))
        .collect()
}
