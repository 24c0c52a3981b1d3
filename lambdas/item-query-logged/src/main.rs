use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use model::event::CorrelationPath;
use repository::config::TableConfig;
use repository::item::{ItemRepository, ItemSource};
use response::Envelope;
use serde_json::Value;
use service::ItemQueryService;
use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

const CORRELATION_ID_PATH_VAR: &str = "CORRELATION_ID_PATH";

static COLD_START: AtomicBool = AtomicBool::new(true);

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        // remove the name of the function from every log entry
        .with_target(false)
        .init();

    let correlation_path = match env::var(CORRELATION_ID_PATH_VAR) {
        Ok(path) => CorrelationPath::from_str(&path)?,
        Err(_) => CorrelationPath::default(),
    };

    let table_config = TableConfig::from_env();
    if table_config.table_name.is_none() {
        tracing::warn!("DYNAMODB_TABLE_NAME is not set, every invocation will fail");
    }
    let shared_config = table_config.load_sdk_config().await;
    let service_ref = &ItemQueryService::new(ItemRepository::new(
        &shared_config,
        table_config.table_name,
    ));

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        func(event, correlation_path, service_ref, &COLD_START).await
    }))
    .await?;
    Ok(())
}

async fn func<S: ItemSource>(
    event: LambdaEvent<Value>,
    correlation_path: CorrelationPath,
    service: &ItemQueryService<S>,
    cold_start: &AtomicBool,
) -> Result<Envelope, Error> {
    InvocationRecord::new(&event, correlation_path, cold_start).emit();

    Ok(service.handle(&event.payload).await?)
}

/// Fields attached to the single log line written per invocation.
#[derive(Debug, PartialEq)]
struct InvocationRecord<'a> {
    correlation_id: Option<&'a str>,
    cold_start: bool,
    function_request_id: &'a str,
    function_name: &'a str,
    function_arn: &'a str,
    function_memory_size: i32,
    xray_trace_id: Option<&'a str>,
}

impl<'a> InvocationRecord<'a> {
    fn new(
        event: &'a LambdaEvent<Value>,
        correlation_path: CorrelationPath,
        cold_start: &AtomicBool,
    ) -> InvocationRecord<'a> {
        InvocationRecord {
            correlation_id: correlation_path.extract(&event.payload),
            cold_start: cold_start.swap(false, Ordering::Relaxed),
            function_request_id: &event.context.request_id,
            function_name: &event.context.env_config.function_name,
            function_arn: &event.context.invoked_function_arn,
            function_memory_size: event.context.env_config.memory,
            xray_trace_id: event.context.xray_trace_id.as_deref(),
        }
    }

    fn emit(&self) {
        tracing::info!(
            correlation_id = self.correlation_id,
            cold_start = self.cold_start,
            function_request_id = self.function_request_id,
            function_name = self.function_name,
            function_arn = self.function_arn,
            function_memory_size = self.function_memory_size,
            xray_trace_id = self.xray_trace_id,
            "Querying items"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use aws_sdk_dynamodb::types::AttributeValue;
    use lambda_runtime::{Config, Context};
    use model::item::Item;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct SingleRow;

    #[async_trait]
    impl ItemSource for SingleRow {
        async fn query_partition(&self, partition_key: &str) -> repository::error::Result<Vec<Item>> {
            let mut item = HashMap::new();
            item.insert("pk".to_string(), AttributeValue::S(partition_key.to_string()));
            item.insert("sk".to_string(), AttributeValue::S("1".to_string()));
            item.insert("Description".to_string(), AttributeValue::S("first".to_string()));
            Ok(vec![item])
        }
    }

    fn gateway_event() -> LambdaEvent<Value> {
        let mut context = Context::default();
        context.request_id = "8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_string();
        context.invoked_function_arn =
            "arn:aws:lambda:eu-central-1:123456789012:function:item-query".to_string();
        context.xray_trace_id = Some("Root=1-5759e988-bd862e3fe1be46a994272793".to_string());
        context.env_config = Arc::new(Config {
            function_name: "item-query".to_string(),
            memory: 128,
            ..Config::default()
        });

        LambdaEvent::new(
            json!({
                "resource": "/items",
                "httpMethod": "GET",
                "requestContext": { "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef" }
            }),
            context,
        )
    }

    #[test]
    fn record_carries_invocation_context() {
        let event = gateway_event();
        let cold_start = AtomicBool::new(true);

        let record = InvocationRecord::new(&event, CorrelationPath::ApiGatewayRest, &cold_start);

        assert_eq!(
            record,
            InvocationRecord {
                correlation_id: Some("c6af9ac6-7b61-11e6-9a41-93e8deadbeef"),
                cold_start: true,
                function_request_id: "8476a536-e9f4-11e8-9739-2dfe598c3fcd",
                function_name: "item-query",
                function_arn: "arn:aws:lambda:eu-central-1:123456789012:function:item-query",
                function_memory_size: 128,
                xray_trace_id: Some("Root=1-5759e988-bd862e3fe1be46a994272793"),
            }
        );
    }

    #[test]
    fn record_without_correlation_field_has_none() {
        let event = LambdaEvent::new(json!({ "source": "aws.events" }), Context::default());

        let record =
            InvocationRecord::new(&event, CorrelationPath::ApiGatewayRest, &AtomicBool::new(false));

        assert_eq!(record.correlation_id, None);
        assert!(!record.cold_start);
    }

    #[tokio::test]
    async fn func_returns_envelope_and_clears_cold_start() {
        let service = ItemQueryService::new(SingleRow);
        let cold_start = AtomicBool::new(true);

        let envelope = func(
            gateway_event(),
            CorrelationPath::ApiGatewayRest,
            &service,
            &cold_start,
        )
        .await
        .unwrap();

        assert_eq!(
            envelope,
            Envelope {
                status_code: 200,
                body: r#"[{"pk":"SAMPLE_PK","sk":"1","description":"first"}]"#.to_string(),
            }
        );
        assert!(!cold_start.load(Ordering::Relaxed));

        let next_event = gateway_event();
        let second = InvocationRecord::new(&next_event, CorrelationPath::ApiGatewayRest, &cold_start);
        assert!(!second.cold_start);
    }
}
