// region:    --- Imports
use super::queries;
use crate::catalog::model::{Auction, AuctionRecord, Item};
use crate::database::DatabaseManager;
use sqlx::Error as SqlxError;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Read Side

/// All auctions with their item, ordered by item make ascending
pub async fn list_auctions(db_manager: &DatabaseManager) -> Result<Vec<AuctionRecord>, SqlxError> {
    info!("{:<12} --> list all auctions", "Query");
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, AuctionRecord>(queries::LIST_AUCTIONS)
                    .fetch_all(&mut **tx)
                    .await
            })
        })
        .await
}

/// One auction with its item, None when the id is unknown
pub async fn get_auction(
    db_manager: &DatabaseManager,
    id: Uuid,
) -> Result<Option<AuctionRecord>, SqlxError> {
    info!("{:<12} --> get auction id: {}", "Query", id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, AuctionRecord>(queries::GET_AUCTION)
                    .bind(id)
                    .fetch_optional(&mut **tx)
                    .await
            })
        })
        .await
}

/// Existence check without joining the item
pub async fn auction_exists(db_manager: &DatabaseManager, id: Uuid) -> Result<bool, SqlxError> {
    info!("{:<12} --> auction exists id: {}", "Query", id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let found = sqlx::query_scalar::<_, Uuid>(queries::GET_AUCTION_ID)
                    .bind(id)
                    .fetch_optional(&mut **tx)
                    .await?;
                Ok(found.is_some())
            })
        })
        .await
}

// endregion: --- Read Side

// region:    --- Write Side

/// Insert the auction/item pair in one unit of work, returning rows affected
pub async fn create_auction(
    db_manager: &DatabaseManager,
    auction: Auction,
    item: Item,
) -> Result<u64, SqlxError> {
    info!("{:<12} --> create auction id: {}", "Command", auction.id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let auction_rows = sqlx::query(queries::INSERT_AUCTION)
                    .bind(auction.id)
                    .bind(auction.reserve_price)
                    .bind(&auction.seller)
                    .bind(&auction.winner)
                    .bind(auction.sold_amount)
                    .bind(auction.current_high_bid)
                    .bind(auction.created_at)
                    .bind(auction.updated_at)
                    .bind(auction.auction_end)
                    .bind(&auction.status)
                    .execute(&mut **tx)
                    .await?
                    .rows_affected();

                let item_rows = sqlx::query(queries::INSERT_ITEM)
                    .bind(item.auction_id)
                    .bind(&item.make)
                    .bind(&item.model)
                    .bind(&item.color)
                    .bind(item.mileage)
                    .bind(item.year)
                    .execute(&mut **tx)
                    .await?
                    .rows_affected();

                Ok(auction_rows + item_rows)
            })
        })
        .await
}

/// Overwrite the item's descriptive fields, returning rows affected
pub async fn update_item(db_manager: &DatabaseManager, item: Item) -> Result<u64, SqlxError> {
    info!(
        "{:<12} --> update item of auction id: {}",
        "Command", item.auction_id
    );
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let rows = sqlx::query(queries::UPDATE_ITEM)
                    .bind(item.auction_id)
                    .bind(&item.make)
                    .bind(&item.model)
                    .bind(&item.color)
                    .bind(item.mileage)
                    .bind(item.year)
                    .execute(&mut **tx)
                    .await?
                    .rows_affected();
                Ok(rows)
            })
        })
        .await
}

/// Remove an auction (the item goes with it), returning rows affected
pub async fn delete_auction(db_manager: &DatabaseManager, id: Uuid) -> Result<u64, SqlxError> {
    info!("{:<12} --> delete auction id: {}", "Command", id);
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                let rows = sqlx::query(queries::DELETE_AUCTION)
                    .bind(id)
                    .execute(&mut **tx)
                    .await?
                    .rows_affected();
                Ok(rows)
            })
        })
        .await
}

// endregion: --- Write Side
