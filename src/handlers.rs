// region:    --- Imports
use crate::catalog::dto::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
use crate::catalog::mapper;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::query;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Query Handlers

/// List every auction with its item, ordered by item make
pub async fn handle_get_auctions(
    State(db_manager): State<Arc<DatabaseManager>>,
) -> Result<Json<Vec<AuctionDto>>, ApiError> {
    info!("{:<12} --> list auctions", "Handler");
    let records = query::handlers::list_auctions(&db_manager).await?;
    let dtos = records.into_iter().map(mapper::record_to_dto).collect();
    Ok(Json(dtos))
}

/// Fetch one auction by id
pub async fn handle_get_auction(
    State(db_manager): State<Arc<DatabaseManager>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuctionDto>, ApiError> {
    info!("{:<12} --> get auction id: {}", "Handler", id);
    let record = query::handlers::get_auction(&db_manager, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(mapper::record_to_dto(record)))
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// Create an auction together with its item
pub async fn handle_create_auction(
    State(db_manager): State<Arc<DatabaseManager>>,
    Json(dto): Json<CreateAuctionDto>,
) -> Result<impl IntoResponse, ApiError> {
    info!("{:<12} --> create auction: {:?}", "Handler", dto);
    let (auction, item) = mapper::new_auction(dto);

    let rows = query::handlers::create_auction(&db_manager, auction.clone(), item.clone()).await?;
    if rows == 0 {
        return Err(ApiError::SaveFailed("Could not save new auction to DB"));
    }

    let location = format!("/api/auctions/{}", auction.id);
    let body = mapper::entities_to_dto(auction, item);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    ))
}

/// Patch the item fields of an auction that has no bids yet
pub async fn handle_update_auction(
    State(db_manager): State<Arc<DatabaseManager>>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateAuctionDto>,
) -> Result<StatusCode, ApiError> {
    info!("{:<12} --> update auction id: {} patch: {:?}", "Handler", id, dto);
    let record = query::handlers::get_auction(&db_manager, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Item fields lock as soon as the first bid lands
    if record.current_high_bid > 0 {
        return Err(ApiError::HasBids);
    }

    let item = mapper::patched_item(&record, dto);
    let rows = query::handlers::update_item(&db_manager, item).await?;
    if rows == 0 {
        return Err(ApiError::SaveFailed("Problem updating auction item on DB"));
    }
    Ok(StatusCode::OK)
}

/// Remove an auction and its item
pub async fn handle_delete_auction(
    State(db_manager): State<Arc<DatabaseManager>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    info!("{:<12} --> delete auction id: {}", "Handler", id);
    let exists = query::handlers::auction_exists(&db_manager, id).await?;
    if !exists {
        return Err(ApiError::NotFound);
    }

    // TODO: check the caller is the seller once request authentication exists

    let rows = query::handlers::delete_auction(&db_manager, id).await?;
    if rows == 0 {
        return Err(ApiError::SaveFailed("Could not delete the auction"));
    }
    Ok(StatusCode::OK)
}

// endregion: --- Command Handlers
