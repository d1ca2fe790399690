//! Remote engine against an in-process `quality.QualityInference` service.
//!
//! The client blocks on its own runtime, so the service runs on a separate
//! thread with a runtime of its own.

use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::thread;

use inference::proto::{EVALUATE_PATH, EvaluateRequest, EvaluateResponse};
use inference::signals::{SIGNAL_NAMES, STORY_QUALITY};
use inference::{InferenceEngine, InferenceError, RemoteInferenceEngine, SignalInputs};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::ProstCodec;
use tonic::codegen::{Body, BoxFuture, Service, StdError, empty_body, http};
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::transport::Server;

// ============================================================================
// Mock inference service
// ============================================================================

/// Answers every Evaluate call with a fixed score and records the requests
#[derive(Clone)]
struct MockQualityService {
    score: f64,
    received: Arc<Mutex<Vec<EvaluateRequest>>>,
}

impl NamedService for MockQualityService {
    const NAME: &'static str = "quality.QualityInference";
}

struct Evaluate(MockQualityService);

impl UnaryService<EvaluateRequest> for Evaluate {
    type Response = EvaluateResponse;
    type Future = BoxFuture<tonic::Response<EvaluateResponse>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<EvaluateRequest>) -> Self::Future {
        let service = self.0.clone();
        Box::pin(async move {
            service.received.lock().unwrap().push(request.into_inner());
            Ok(tonic::Response::new(EvaluateResponse {
                score: service.score,
            }))
        })
    }
}

impl<B> Service<http::Request<B>> for MockQualityService
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<B>) -> Self::Future {
        if request.uri().path() == EVALUATE_PATH {
            let service = self.clone();
            Box::pin(async move {
                let codec: ProstCodec<EvaluateResponse, EvaluateRequest> = ProstCodec::default();
                let mut grpc = Grpc::new(codec);
                Ok(grpc.unary(Evaluate(service), request).await)
            })
        } else {
            // UNIMPLEMENTED
            Box::pin(async move {
                Ok(http::Response::builder()
                    .status(200)
                    .header("grpc-status", "12")
                    .header("content-type", "application/grpc")
                    .body(empty_body())
                    .unwrap())
            })
        }
    }
}

/// Start the mock service on a random port and return its address
fn start_mock_service(score: f64) -> (String, Arc<Mutex<Vec<EvaluateRequest>>>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock service");
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().expect("Failed to get local address");

    let received = Arc::new(Mutex::new(Vec::new()));
    let service = MockQualityService {
        score,
        received: received.clone(),
    };

    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to build server runtime");
        runtime.block_on(async move {
            let listener = TcpListener::from_std(listener).expect("Failed to adopt listener");
            Server::builder()
                .add_service(service)
                .serve_with_incoming(TcpListenerStream::new(listener))
                .await
                .expect("Mock inference service failed");
        });
    });

    (format!("http://{}", addr), received)
}

fn heat_inputs() -> SignalInputs {
    SIGNAL_NAMES
        .iter()
        .fold(SignalInputs::new("Heat"), |inputs, name| inputs.with(name, 7.5))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_evaluate_sends_named_signals_and_returns_score() {
    let (addr, received) = start_mock_service(63.5);
    let engine = RemoteInferenceEngine::connect(addr.as_str()).unwrap();
    assert_eq!(engine.service_address(), addr);

    assert_eq!(engine.evaluate(&heat_inputs()).unwrap(), 63.5);
    // The client is reusable across calls
    assert_eq!(engine.evaluate(&heat_inputs()).unwrap(), 63.5);

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 2);

    let request = &received[0];
    assert_eq!(request.title, "Heat");
    assert_eq!(request.inputs.len(), SIGNAL_NAMES.len());
    for name in SIGNAL_NAMES {
        assert_eq!(request.inputs.get(name), Some(&7.5), "missing {}", name);
    }
}

#[test]
fn test_out_of_range_response_is_rejected() {
    let (addr, received) = start_mock_service(150.0);
    let engine = RemoteInferenceEngine::connect(addr.as_str()).unwrap();

    let result = engine.evaluate(&heat_inputs());
    assert!(matches!(result, Err(InferenceError::InvalidOutput(score)) if score == 150.0));
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[test]
fn test_incomplete_inputs_never_reach_the_service() {
    let (addr, received) = start_mock_service(50.0);
    let engine = RemoteInferenceEngine::connect(addr.as_str()).unwrap();

    let inputs = SignalInputs::new("Heat").with(STORY_QUALITY, 8.0);
    assert!(matches!(
        engine.evaluate(&inputs),
        Err(InferenceError::MissingInput(_))
    ));
    assert!(received.lock().unwrap().is_empty());
}
