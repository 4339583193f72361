//! HTTP request handlers.
//!
//! Controllers extract the caller identity, convert wire DTOs to operation
//! parameters, call the service layer, and convert the results back to
//! DTOs. No business rules live here.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

use serde::Deserialize;

/// Offset/limit pagination query shared by item and request listings.
#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_page_size")]
    pub size: u64,
}

fn default_page_size() -> u64 {
    10
}
