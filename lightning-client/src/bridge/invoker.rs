use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::environment::HostEnvironment;
use crate::error::{ClientError, ClientResult};

/// Execute one named operation on the native host.
///
/// A single attempt: the call either resolves with the host's JSON result or
/// fails. There are no retries at this layer.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, operation: &str, args: Value) -> ClientResult<Value>;
}

/// Invoker guarded by the detected host environment.
///
/// Outside the desktop shell every call fails with
/// [`ClientError::BridgeUnavailable`] without touching the transport.
#[derive(Clone)]
pub struct BackendInvoker {
    environment: HostEnvironment,
    transport: Option<Arc<dyn Invoker>>,
}

impl BackendInvoker {
    pub fn new(environment: HostEnvironment, transport: Option<Arc<dyn Invoker>>) -> Self {
        Self {
            environment,
            transport,
        }
    }

    /// Invoke and decode the result into `T`
    pub async fn invoke_as<T: DeserializeOwned>(&self, operation: &str, args: Value) -> ClientResult<T> {
        let value = self.invoke(operation, args).await?;
        decode_result(operation, value)
    }
}

#[async_trait]
impl Invoker for BackendInvoker {
    async fn invoke(&self, operation: &str, args: Value) -> ClientResult<Value> {
        if !self.environment.is_native() {
            tracing::warn!("Refusing '{}' outside of the native host", operation);
            return Err(ClientError::BridgeUnavailable);
        }
        let transport = self.transport.as_ref().ok_or(ClientError::BridgeUnavailable)?;
        transport.invoke(operation, args).await
    }
}

/// Decode a host result, tagging failures with the operation name
pub fn decode_result<T: DeserializeOwned>(operation: &str, value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode {
        operation: operation.to_string(),
        message: e.to_string(),
    })
}
