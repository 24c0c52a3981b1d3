use aws_config::{BehaviorVersion, SdkConfig};
use std::env;

pub const TABLE_NAME_VAR: &str = "DYNAMODB_TABLE_NAME";
pub const LOCALSTACK_HOSTNAME_VAR: &str = "LOCALSTACK_HOSTNAME";

const LOCALSTACK_PORT: u16 = 4566;

/// Where the item table lives. Both values are optional: a missing table name
/// only surfaces once a query is attempted, and without an endpoint override
/// the SDK talks to the regular managed endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: Option<String>,
    pub endpoint_url: Option<String>,
}

impl TableConfig {
    pub fn from_env() -> TableConfig {
        TableConfig::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> TableConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        TableConfig {
            table_name: non_empty(TABLE_NAME_VAR),
            endpoint_url: non_empty(LOCALSTACK_HOSTNAME_VAR)
                .map(|hostname| format!("http://{}:{}", hostname, LOCALSTACK_PORT)),
        }
    }

    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = &self.endpoint_url {
            tracing::info!("Using endpoint override {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        }
        loader.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_managed_endpoint() {
        let config = TableConfig::from_lookup(lookup(&[(TABLE_NAME_VAR, "items")]));

        assert_eq!(
            config,
            TableConfig {
                table_name: Some("items".to_string()),
                endpoint_url: None,
            }
        );
    }

    #[test]
    fn localstack_hostname_overrides_endpoint() {
        let config = TableConfig::from_lookup(lookup(&[
            (TABLE_NAME_VAR, "items"),
            (LOCALSTACK_HOSTNAME_VAR, "localhost.localstack.cloud"),
        ]));

        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localhost.localstack.cloud:4566")
        );
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = TableConfig::from_lookup(lookup(&[
            (TABLE_NAME_VAR, ""),
            (LOCALSTACK_HOSTNAME_VAR, ""),
        ]));

        assert_eq!(config, TableConfig::default());
    }
}
