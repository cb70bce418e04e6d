//! HTTP response bodies for the Leadwheel API

use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use leadwheel_common::LeadInput;
use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResult {
            error: error.into(),
        }
    }

    pub fn http_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
        HttpResponseBuilder::new(status).json(ErrorResult::new(message))
    }
}

/// Response to a registrant sign-up
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrantResponse {
    pub success: bool,
    pub message: String,
    pub registrant: LeadInput,
}

impl RegistrantResponse {
    pub fn new(registrant: LeadInput) -> Self {
        Self {
            success: true,
            message: "User registered successfully!".to_string(),
            registrant,
        }
    }
}

/// Response to a lead batch submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeadsSavedResponse {
    pub success: bool,
    pub message: String,
    pub leads_saved: Vec<LeadInput>,
}

impl LeadsSavedResponse {
    pub fn new(leads_saved: Vec<LeadInput>) -> Self {
        Self {
            success: true,
            message: format!("{} leads registered successfully!", leads_saved.len()),
            leads_saved,
        }
    }
}

/// Response to a prize draw
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrizeDrawResponse {
    pub success: bool,
    pub prize: String,
    pub message: String,
}

impl PrizeDrawResponse {
    pub fn new(prize: &str) -> Self {
        Self {
            success: true,
            prize: prize.to_string(),
            message: format!("Congratulations! You won: {}", prize),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrizeListResponse {
    pub success: bool,
    pub prizes: Vec<String>,
}

impl PrizeListResponse {
    pub fn new(prizes: &[&str]) -> Self {
        Self {
            success: true,
            prizes: prizes.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}
