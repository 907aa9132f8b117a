/// Hand-written mappings between storage shapes and wire shapes.
/// Every field correspondence lives here so it stays auditable.
// region:    --- Imports
use crate::catalog::dto::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
use crate::catalog::model::{Auction, AuctionRecord, Item, STATUS_LIVE};
use chrono::Utc;
use uuid::Uuid;

// endregion: --- Imports

/// Joined row -> flattened read DTO.
pub fn record_to_dto(record: AuctionRecord) -> AuctionDto {
    AuctionDto {
        id: record.id,
        reserve_price: record.reserve_price,
        seller: record.seller,
        winner: record.winner,
        sold_amount: record.sold_amount,
        current_high_bid: record.current_high_bid,
        created_at: record.created_at,
        updated_at: record.updated_at,
        auction_end: record.auction_end,
        status: record.status,
        make: record.make,
        model: record.model,
        color: record.color,
        mileage: record.mileage,
        year: record.year,
    }
}

/// Auction/item pair -> flattened read DTO, for responses built from
/// entities already in hand (the create path).
pub fn entities_to_dto(auction: Auction, item: Item) -> AuctionDto {
    AuctionDto {
        id: auction.id,
        reserve_price: auction.reserve_price,
        seller: auction.seller,
        winner: auction.winner,
        sold_amount: auction.sold_amount,
        current_high_bid: auction.current_high_bid,
        created_at: auction.created_at,
        updated_at: auction.updated_at,
        auction_end: auction.auction_end,
        status: auction.status,
        make: item.make,
        model: item.model,
        color: item.color,
        mileage: item.mileage,
        year: item.year,
    }
}

/// Create payload -> a fresh auction/item pair with a newly assigned id.
pub fn new_auction(dto: CreateAuctionDto) -> (Auction, Item) {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let auction = Auction {
        id,
        reserve_price: dto.reserve_price,
        seller: dto.seller,
        winner: None,
        sold_amount: None,
        current_high_bid: 0,
        created_at: now,
        updated_at: now,
        auction_end: dto.auction_end,
        status: STATUS_LIVE.to_string(),
    };
    let item = Item {
        auction_id: id,
        make: dto.make,
        model: dto.model,
        color: dto.color,
        mileage: dto.mileage,
        year: dto.year,
    };
    (auction, item)
}

/// Patch payload applied over the stored item: provided fields replace,
/// absent fields keep the stored value.
pub fn patched_item(record: &AuctionRecord, dto: UpdateAuctionDto) -> Item {
    Item {
        auction_id: record.id,
        make: dto.make.unwrap_or_else(|| record.make.clone()),
        model: dto.model.unwrap_or_else(|| record.model.clone()),
        color: dto.color.unwrap_or_else(|| record.color.clone()),
        mileage: dto.mileage.unwrap_or(record.mileage),
        year: dto.year.unwrap_or(record.year),
    }
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample_record() -> AuctionRecord {
        let now = Utc::now();
        AuctionRecord {
            id: Uuid::new_v4(),
            reserve_price: 20000,
            seller: "alice".to_string(),
            winner: None,
            sold_amount: None,
            current_high_bid: 0,
            created_at: now,
            updated_at: now,
            auction_end: now + Duration::days(7),
            status: STATUS_LIVE.to_string(),
            make: "Ford".to_string(),
            model: "GT".to_string(),
            color: "White".to_string(),
            mileage: 50000,
            year: 2020,
        }
    }

    #[test]
    fn record_to_dto_carries_every_field() {
        let record = sample_record();
        let id = record.id;
        let dto = record_to_dto(record);
        assert_eq!(dto.id, id);
        assert_eq!(dto.reserve_price, 20000);
        assert_eq!(dto.seller, "alice");
        assert_eq!(dto.winner, None);
        assert_eq!(dto.sold_amount, None);
        assert_eq!(dto.current_high_bid, 0);
        assert_eq!(dto.status, "Live");
        assert_eq!(dto.make, "Ford");
        assert_eq!(dto.model, "GT");
        assert_eq!(dto.color, "White");
        assert_eq!(dto.mileage, 50000);
        assert_eq!(dto.year, 2020);
    }

    #[test]
    fn entities_and_record_views_agree() {
        let record = sample_record();
        let auction = Auction {
            id: record.id,
            reserve_price: record.reserve_price,
            seller: record.seller.clone(),
            winner: record.winner.clone(),
            sold_amount: record.sold_amount,
            current_high_bid: record.current_high_bid,
            created_at: record.created_at,
            updated_at: record.updated_at,
            auction_end: record.auction_end,
            status: record.status.clone(),
        };
        let item = Item {
            auction_id: record.id,
            make: record.make.clone(),
            model: record.model.clone(),
            color: record.color.clone(),
            mileage: record.mileage,
            year: record.year,
        };
        let from_entities = entities_to_dto(auction, item);
        let from_record = record_to_dto(record);
        assert_eq!(
            serde_json::to_value(&from_entities).expect("serializable dto"),
            serde_json::to_value(&from_record).expect("serializable dto"),
        );
    }

    #[test]
    fn new_auction_assigns_identity_and_defaults() {
        let dto = CreateAuctionDto {
            make: "Bugatti".to_string(),
            model: "Veyron".to_string(),
            color: "Black".to_string(),
            mileage: 15035,
            year: 2018,
            reserve_price: 150000,
            auction_end: Utc::now() + Duration::days(30),
            seller: "bob".to_string(),
        };
        let (auction, item) = new_auction(dto);
        assert_eq!(auction.id, item.auction_id);
        assert_eq!(auction.current_high_bid, 0);
        assert_eq!(auction.status, STATUS_LIVE);
        assert!(auction.winner.is_none());
        assert!(auction.sold_amount.is_none());
        assert_eq!(auction.created_at, auction.updated_at);
        assert_eq!(item.make, "Bugatti");
        assert_eq!(item.year, 2018);
    }

    #[test]
    fn patch_replaces_only_provided_fields() {
        let record = sample_record();
        let patch = UpdateAuctionDto {
            model: Some("Mustang".to_string()),
            ..Default::default()
        };
        let item = patched_item(&record, patch);
        assert_eq!(item.model, "Mustang");
        assert_eq!(item.make, "Ford");
        assert_eq!(item.color, "White");
        assert_eq!(item.mileage, 50000);
        assert_eq!(item.year, 2020);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let record = sample_record();
        let item = patched_item(&record, UpdateAuctionDto::default());
        assert_eq!(item.make, record.make);
        assert_eq!(item.model, record.model);
        assert_eq!(item.color, record.color);
        assert_eq!(item.mileage, record.mileage);
        assert_eq!(item.year, record.year);
    }

    #[test]
    fn absent_json_fields_deserialize_to_none() {
        let patch: UpdateAuctionDto =
            serde_json::from_str(r#"{"color": "Red"}"#).expect("valid patch JSON");
        assert_eq!(patch.color.as_deref(), Some("Red"));
        assert!(patch.make.is_none());
        assert!(patch.model.is_none());
        assert!(patch.mileage.is_none());
        assert!(patch.year.is_none());
    }
}
// endregion: --- Tests
