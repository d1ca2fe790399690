//! Protobuf messages for the `quality.QualityInference` service.
//!
//! Mirrors `proto/quality.proto`.

use std::collections::HashMap;

/// Full method path of the Evaluate RPC
pub const EVALUATE_PATH: &str = "/quality.QualityInference/Evaluate";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EvaluateRequest {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(map = "string, double", tag = "2")]
    pub inputs: HashMap<::prost::alloc::string::String, f64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EvaluateResponse {
    #[prost(double, tag = "1")]
    pub score: f64,
}
