use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status};

use lightning_client::backend::{NativeBackend, mock};
use lightning_client::bridge::{BackendInvoker, GrpcInvoker, Invoker};
use lightning_client::environment::HostEnvironment;
use lightning_client::{ClientError, DataClient};
use lightning_common::proto::{
    InvokeReply, InvokeRequest,
    native_bridge_server::{NativeBridge, NativeBridgeServer},
};
use lightning_common::{AppSettings, Credentials};

/// Native host double: knows one summoner and keeps credentials in memory
#[derive(Default)]
struct MockHost {
    credentials: Mutex<Option<(String, String)>>,
    seen: Mutex<Vec<String>>,
}

impl MockHost {
    fn handle(&self, operation: &str, args: Value) -> Result<Value, String> {
        match operation {
            "get_current_summoner" => Ok(json!("Faker")),
            "get_dashboard_data" => {
                let name = args["summonerName"].as_str().unwrap_or_default();
                if name == "Broken" {
                    return Err("summoner lookup failed".to_string());
                }
                let mut snapshot = mock::mock_snapshot();
                snapshot.summoner.display_name = name.to_string();
                snapshot.summoner.level = 512;
                Ok(serde_json::to_value(snapshot).unwrap())
            }
            "load_credentials" => Ok(json!(self.credentials.lock().unwrap().clone())),
            "save_credentials" => {
                let id = args["clientId"].as_str().unwrap_or_default().to_string();
                let secret = args["clientSecret"].as_str().unwrap_or_default().to_string();
                *self.credentials.lock().unwrap() = Some((id, secret));
                Ok(Value::Null)
            }
            "get_current_match_data" => Err("game client is not running".to_string()),
            other => Err(format!("unknown operation {}", other)),
        }
    }
}

#[tonic::async_trait]
impl NativeBridge for MockHost {
    async fn invoke(&self, request: Request<InvokeRequest>) -> Result<Response<InvokeReply>, Status> {
        let req = request.into_inner();
        self.seen.lock().unwrap().push(req.operation.clone());

        let args: Value = serde_json::from_str(&req.args_json)
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let reply = match self.handle(&req.operation, args) {
            Ok(result) => InvokeReply {
                request_id: req.request_id,
                success: true,
                result_json: result.to_string(),
                error: String::new(),
            },
            Err(error) => InvokeReply {
                request_id: req.request_id,
                success: false,
                result_json: String::new(),
                error,
            },
        };
        Ok(Response::new(reply))
    }
}

async fn start_host() -> (Arc<MockHost>, SocketAddr) {
    let host = Arc::new(MockHost::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = NativeBridgeServer::from_arc(host.clone());
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    (host, addr)
}

fn native_client(transport: GrpcInvoker) -> DataClient {
    let transport: Arc<dyn Invoker> = Arc::new(transport);
    let invoker = BackendInvoker::new(HostEnvironment::Native, Some(transport));
    DataClient::new(Arc::new(NativeBackend::new(Arc::new(invoker))))
}

#[tokio::test]
async fn test_dashboard_for_current_summoner() {
    let (host, addr) = start_host().await;
    let transport = GrpcInvoker::connect(&format!("http://{}", addr)).await.unwrap();
    let client = native_client(transport);

    let snapshot = client.get_dashboard_data(None).await;

    assert_eq!(snapshot.summoner.display_name, "Faker");
    assert_eq!(snapshot.summoner.level, 512);
    assert_eq!(
        *host.seen.lock().unwrap(),
        vec!["get_current_summoner".to_string(), "get_dashboard_data".to_string()]
    );
}

#[tokio::test]
async fn test_host_error_falls_back_to_mock() {
    let (_host, addr) = start_host().await;
    let transport = GrpcInvoker::connect(&format!("http://{}", addr)).await.unwrap();
    let client = native_client(transport);

    assert_eq!(client.get_dashboard_data(Some("Broken")).await, mock::mock_snapshot());

    let err = client.get_current_match().await.unwrap_err();
    match err {
        ClientError::OperationError { operation, message } => {
            assert_eq!(operation, "get_current_match_data");
            assert_eq!(message, "game client is not running");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_settings_round_trip_through_host() {
    let (host, addr) = start_host().await;
    let transport = GrpcInvoker::connect(&format!("http://{}", addr)).await.unwrap();
    let client = native_client(transport);

    // Nothing stored yet
    let loaded = client.load_settings().await.unwrap();
    assert_eq!(loaded, AppSettings::default());

    let edited = AppSettings::with_credentials(Credentials::new("client-id", "client-secret"));
    client.save_settings(&edited).await.unwrap();
    assert_eq!(
        *host.credentials.lock().unwrap(),
        Some(("client-id".to_string(), "client-secret".to_string()))
    );

    let reloaded = client.load_settings().await.unwrap();
    assert_eq!(reloaded.credentials(), edited.credentials());
}

#[tokio::test]
async fn test_unreachable_host_serves_mock() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport =
        GrpcInvoker::connect_lazy(&format!("http://{}", addr), Duration::from_secs(1)).unwrap();
    let client = native_client(transport);

    assert_eq!(client.get_dashboard_data(None).await, mock::mock_snapshot());
    assert!(client.save_settings(&AppSettings::default()).await.is_err());
}
