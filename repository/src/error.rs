use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::query::QueryError;
use model::error::ModelError;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Item table is unavailable: {0}")]
    DependencyUnavailable(String),
    #[error("Malformed item record: {0}")]
    MalformedRecord(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Every failure of the query call means the store could not serve it.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
    table_name: &str,
) -> RepositoryError {
    let message = match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            format!("store unreachable: {}", DisplayErrorContext(&err))
        }
        SdkError::ServiceError(_) => match err.into_service_error() {
            QueryError::ResourceNotFoundException(_) => {
                format!("table `{}` not found", table_name)
            }
            QueryError::ProvisionedThroughputExceededException(_)
            | QueryError::RequestLimitExceeded(_) => {
                format!("throughput exceeded on table `{}`", table_name)
            }
            QueryError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
            err => format!("query on table `{}` failed: {}", table_name, DisplayErrorContext(&err)),
        },
        err => format!("query on table `{}` failed: {}", table_name, DisplayErrorContext(&err)),
    };
    RepositoryError::DependencyUnavailable(message)
}
