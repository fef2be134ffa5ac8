//! Frontend Models
//!
//! Data structures matching backend API payloads.

use serde::{Deserialize, Serialize};

/// Catalog item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: u32,
    pub name: String,
    pub message: String,
    pub url: String,
    pub category: String,
}

/// Request counters embedded in the health payload (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoMetrics {
    pub total_requests: u64,
    pub last_request: Option<String>,
    pub uptime_seconds: f64,
    pub environment: String,
}

/// Health check payload (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub features: Vec<String>,
    pub timestamp: String,
    pub metrics: DemoMetrics,
}
