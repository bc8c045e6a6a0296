use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tonic::Request;
use tonic::transport::{Channel, Endpoint};
use uuid::Uuid;

use lightning_common::proto::{InvokeRequest, native_bridge_client::NativeBridgeClient};

use super::invoker::Invoker;
use crate::error::{ClientError, ClientResult};

/// gRPC transport to the native host
///
/// `NativeBridgeClient<Channel>` is backed by one multiplexed H2 connection;
/// cloning it per call only clones the handle.
#[derive(Clone)]
pub struct GrpcInvoker {
    client: NativeBridgeClient<Channel>,
}

impl GrpcInvoker {
    /// Create an invoker for the given bridge URL.
    ///
    /// The connection is established lazily on the first call, so this never
    /// blocks and does not fail when the host is not up yet.
    pub fn connect_lazy(bridge_url: &str, connect_timeout: Duration) -> anyhow::Result<Self> {
        let channel = Endpoint::from_shared(bridge_url.to_string())?
            .connect_timeout(connect_timeout)
            .connect_lazy();

        tracing::info!("Native bridge endpoint set to {}", bridge_url);

        Ok(Self {
            client: NativeBridgeClient::new(channel),
        })
    }

    /// Create an invoker on an already connected channel
    pub async fn connect(bridge_url: &str) -> anyhow::Result<Self> {
        let channel = Channel::from_shared(bridge_url.to_string())?
            .connect()
            .await?;

        tracing::info!("Connected to native bridge at {}", bridge_url);

        Ok(Self {
            client: NativeBridgeClient::new(channel),
        })
    }
}

#[async_trait]
impl Invoker for GrpcInvoker {
    async fn invoke(&self, operation: &str, args: Value) -> ClientResult<Value> {
        let request_id = Uuid::now_v7().to_string();
        let args_json = match args {
            Value::Null => "{}".to_string(),
            other => other.to_string(),
        };

        tracing::debug!("Invoking '{}' (request_id={})", operation, request_id);

        let mut client = self.client.clone();
        let reply = client
            .invoke(Request::new(InvokeRequest {
                request_id: request_id.clone(),
                operation: operation.to_string(),
                args_json,
            }))
            .await
            .map_err(|status| {
                ClientError::operation(
                    operation,
                    format!("{:?}: {}", status.code(), status.message()),
                )
            })?
            .into_inner();

        if !reply.success {
            tracing::debug!(
                "'{}' rejected by host (request_id={}): {}",
                operation,
                request_id,
                reply.error
            );
            return Err(ClientError::operation(operation, reply.error));
        }

        if reply.result_json.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&reply.result_json).map_err(|e| ClientError::Decode {
            operation: operation.to_string(),
            message: e.to_string(),
        })
    }
}
