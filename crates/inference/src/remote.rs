//! gRPC client for an external quality inference service.
//!
//! The service speaks `quality.QualityInference/Evaluate` (see
//! `proto/quality.proto`). The client owns a single-threaded tokio runtime
//! and blocks on each call, so it plugs into the synchronous
//! `InferenceEngine` seam. It must not be used from inside another tokio
//! runtime.

use std::sync::Mutex;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tracing::{debug, error, info};

use crate::InferenceEngine;
use crate::error::{InferenceError, Result};
use crate::proto::{EVALUATE_PATH, EvaluateRequest, EvaluateResponse};
use crate::signals::SignalInputs;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote quality inference service.
pub struct RemoteInferenceEngine {
    runtime: Runtime,
    client: Mutex<Grpc<Channel>>,
    service_addr: String,
}

impl RemoteInferenceEngine {
    /// Connect to the inference service.
    ///
    /// # Arguments
    /// * `addr` - Address of the gRPC service (e.g., "http://localhost:50051")
    pub fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        info!("Connecting to inference service at {}", addr);

        let runtime = Builder::new_current_thread().enable_all().build()?;

        let endpoint = Channel::from_shared(addr.clone())
            .map_err(|e| InferenceError::ConnectionError(format!("{}: {}", addr, e)))?
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(CALL_TIMEOUT);

        let channel = runtime.block_on(endpoint.connect()).map_err(|e| {
            error!("Failed to connect to inference service at {}: {}", addr, e);
            InferenceError::ConnectionError(format!("{}: {}", addr, e))
        })?;

        Ok(Self {
            runtime,
            client: Mutex::new(Grpc::new(channel)),
            service_addr: addr,
        })
    }

    /// Get the address of the service this client is connected to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }

    async fn call(mut client: Grpc<Channel>, request: EvaluateRequest) -> Result<EvaluateResponse> {
        client
            .ready()
            .await
            .map_err(|e| InferenceError::CallFailed(format!("service not ready: {}", e)))?;

        let codec: ProstCodec<EvaluateRequest, EvaluateResponse> = ProstCodec::default();
        let path = PathAndQuery::from_static(EVALUATE_PATH);

        let response = client
            .unary(tonic::Request::new(request), path, codec)
            .await
            .map_err(|status| {
                error!("gRPC error while evaluating quality: {}", status);
                InferenceError::CallFailed(status.to_string())
            })?;

        Ok(response.into_inner())
    }
}

impl InferenceEngine for RemoteInferenceEngine {
    fn name(&self) -> &str {
        "remote"
    }

    fn evaluate(&self, inputs: &SignalInputs) -> Result<f64> {
        inputs.validate()?;
        let request = to_request(inputs);

        let client = self
            .client
            .lock()
            .map_err(|_| InferenceError::CallFailed("client lock poisoned".to_string()))?
            .clone();

        debug!(title = inputs.title(), addr = %self.service_addr, "Calling inference service");
        let response = self.runtime.block_on(Self::call(client, request))?;
        checked_score(response.score)
    }
}

pub(crate) fn to_request(inputs: &SignalInputs) -> EvaluateRequest {
    EvaluateRequest {
        title: inputs.title().to_string(),
        inputs: inputs.iter().map(|(k, v)| (k.to_string(), v)).collect(),
    }
}

/// Reject scores outside [0, 100] and non-finite values
pub(crate) fn checked_score(score: f64) -> Result<f64> {
    if score.is_finite() && (0.0..=100.0).contains(&score) {
        Ok(score)
    } else {
        Err(InferenceError::InvalidOutput(score))
    }
}
