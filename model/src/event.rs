//! Correlation id lookup on raw invocation events.
//!
//! Events are kept as loose JSON because the handlers can sit behind
//! different triggers. Each [`CorrelationPath`] names where a given trigger
//! carries its request-tracing token.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrelationPath {
    #[default]
    ApiGatewayRest,
    ApiGatewayHttp,
    ApplicationLoadBalancer,
    EventBridge,
}

impl std::str::FromStr for CorrelationPath {
    type Err = String;

    fn from_str(s: &str) -> Result<CorrelationPath, String> {
        match s {
            "API_GATEWAY_REST" => Ok(CorrelationPath::ApiGatewayRest),
            "API_GATEWAY_HTTP" => Ok(CorrelationPath::ApiGatewayHttp),
            "APPLICATION_LOAD_BALANCER" => Ok(CorrelationPath::ApplicationLoadBalancer),
            "EVENT_BRIDGE" => Ok(CorrelationPath::EventBridge),
            other => Err(format!("unknown correlation path `{}`", other)),
        }
    }
}

impl CorrelationPath {
    /// JSON pointer to the correlation field for this trigger.
    pub fn pointer(&self) -> &'static str {
        match self {
            CorrelationPath::ApiGatewayRest | CorrelationPath::ApiGatewayHttp => {
                "/requestContext/requestId"
            }
            CorrelationPath::ApplicationLoadBalancer => "/headers/x-amzn-trace-id",
            CorrelationPath::EventBridge => "/id",
        }
    }

    /// Returns `None` when the field is absent or not a string.
    pub fn extract<'a>(&self, event: &'a Value) -> Option<&'a str> {
        event.pointer(self.pointer()).and_then(Value::as_str)
    }
}
