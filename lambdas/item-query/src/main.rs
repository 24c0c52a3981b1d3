use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use repository::config::TableConfig;
use repository::item::ItemRepository;
use response::Envelope;
use serde_json::Value;
use service::ItemQueryService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let table_config = TableConfig::from_env();
    let shared_config = table_config.load_sdk_config().await;
    let service_ref = &ItemQueryService::new(ItemRepository::new(
        &shared_config,
        table_config.table_name,
    ));

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        let envelope: Envelope = service_ref.handle(&event.payload).await?;
        Ok::<Envelope, Error>(envelope)
    }))
    .await?;
    Ok(())
}
