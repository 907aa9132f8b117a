use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flattened read view: auction fields merged with item fields.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuctionDto {
    pub id: Uuid,
    pub reserve_price: i64,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i64>,
    pub current_high_bid: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: String,
    pub make: String,
    pub model: String,
    pub color: String,
    pub mileage: i32,
    pub year: i32,
}

/// Payload to create an auction together with its item.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAuctionDto {
    pub make: String,
    pub model: String,
    pub color: String,
    pub mileage: i32,
    pub year: i32,
    pub reserve_price: i64,
    pub auction_end: DateTime<Utc>,
    pub seller: String,
}

/// Patch payload: an absent field leaves the stored value unchanged.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateAuctionDto {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub year: Option<i32>,
}
