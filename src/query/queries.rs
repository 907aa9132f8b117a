/// All auctions with their item, ordered by item make
pub const LIST_AUCTIONS: &str = r#"
    SELECT a.id, a.reserve_price, a.seller, a.winner, a.sold_amount, a.current_high_bid,
           a.created_at, a.updated_at, a.auction_end, a.status,
           i.make, i.model, i.color, i.mileage, i.year
    FROM auctions a
    JOIN items i ON i.auction_id = a.id
    ORDER BY i.make ASC
"#;

/// One auction with its item
pub const GET_AUCTION: &str = r#"
    SELECT a.id, a.reserve_price, a.seller, a.winner, a.sold_amount, a.current_high_bid,
           a.created_at, a.updated_at, a.auction_end, a.status,
           i.make, i.model, i.color, i.mileage, i.year
    FROM auctions a
    JOIN items i ON i.auction_id = a.id
    WHERE a.id = $1
"#;

/// Auction existence check (no item join needed)
pub const GET_AUCTION_ID: &str = "SELECT id FROM auctions WHERE id = $1";

/// Insert an auction row
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (id, reserve_price, seller, winner, sold_amount, current_high_bid,
                          created_at, updated_at, auction_end, status)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
"#;

/// Insert the item owned by an auction
pub const INSERT_ITEM: &str = r#"
    INSERT INTO items (auction_id, make, model, color, mileage, year)
    VALUES ($1, $2, $3, $4, $5, $6)
"#;

/// Overwrite the descriptive item fields
pub const UPDATE_ITEM: &str = r#"
    UPDATE items
    SET make = $2, model = $3, color = $4, mileage = $5, year = $6
    WHERE auction_id = $1
"#;

/// Delete an auction; the item row goes with it via ON DELETE CASCADE
pub const DELETE_AUCTION: &str = "DELETE FROM auctions WHERE id = $1";
