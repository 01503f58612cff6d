use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::models::{Room, RoomTypePrice};

/// Read-only access to the room inventory.
///
/// Implementations load the full record set on every call; nothing is cached,
/// so edits to the backing store show up on the next turn.
#[async_trait]
pub trait RoomCatalog: Send + Sync {
    async fn load_rooms(&self) -> Result<Vec<Room>, CatalogError>;

    /// Rooms with status "available", in source order.
    async fn list_available_rooms(&self) -> Result<Vec<Room>, CatalogError> {
        let rooms = self.load_rooms().await?;
        Ok(rooms.into_iter().filter(Room::is_available).collect())
    }

    /// Distinct room types with the price of the first record of each type.
    async fn list_room_type_prices(&self) -> Result<Vec<RoomTypePrice>, CatalogError> {
        let rooms = self.load_rooms().await?;
        Ok(room_type_prices(&rooms))
    }
}

/// Room catalog backed by a CSV file with a
/// `room_type,status,price_per_night,view_type` header.
pub struct CsvRoomCatalog {
    path: PathBuf,
}

impl CsvRoomCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RoomCatalog for CsvRoomCatalog {
    async fn load_rooms(&self) -> Result<Vec<Room>, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        let rooms = parse_rooms(bytes.as_slice(), &self.path)?;
        tracing::debug!(path = %self.path.display(), count = rooms.len(), "loaded room catalog");
        Ok(rooms)
    }
}

pub fn parse_rooms<R: Read>(reader: R, path: &Path) -> Result<Vec<Room>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<Room>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

// A later row of an already-seen type never overrides the first price, even
// when it differs. Kept as-is pending a product decision.
fn room_type_prices(rooms: &[Room]) -> Vec<RoomTypePrice> {
    let mut seen = HashSet::new();
    let mut prices: Vec<RoomTypePrice> = Vec::new();

    for room in rooms {
        if seen.insert(room.room_type.as_str()) {
            prices.push(RoomTypePrice {
                room_type: room.room_type.clone(),
                price_per_night: room.price_per_night,
            });
        } else if let Some(first) = prices.iter().find(|p| p.room_type == room.room_type) {
            if first.price_per_night != room.price_per_night {
                tracing::debug!(
                    room_type = %room.room_type,
                    kept = first.price_per_night,
                    ignored = room.price_per_night,
                    "duplicate room type with a different price"
                );
            }
        }
    }

    prices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomStatus;

    const CATALOG: &str = "\
room_type,status,price_per_night,view_type
Deluxe Suite,available,250.00,Ocean
Standard,booked,90.00,Garden
Standard,available,95.50,City
Deluxe Suite,available,275.00,Garden
";

    fn rooms() -> Vec<Room> {
        parse_rooms(CATALOG.as_bytes(), Path::new("test.csv")).unwrap()
    }

    #[test]
    fn test_parse_rooms() {
        let rooms = rooms();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms[0].room_type, "Deluxe Suite");
        assert_eq!(rooms[0].status, RoomStatus::Available);
        assert_eq!(rooms[1].status, RoomStatus::Other("booked".to_string()));
        assert_eq!(rooms[2].price_per_night, 95.5);
        assert_eq!(rooms[3].view_type, "Garden");
    }

    #[test]
    fn test_parse_ignores_extra_columns() {
        let csv = "room_number,room_type,status,price_per_night,view_type\n101,Suite,available,150.00,Ocean\n";
        let rooms = parse_rooms(csv.as_bytes(), Path::new("test.csv")).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_type, "Suite");
    }

    #[test]
    fn test_status_is_exact_match() {
        let csv = "room_type,status,price_per_night,view_type\nSuite,Available,150.00,Ocean\n";
        let rooms = parse_rooms(csv.as_bytes(), Path::new("test.csv")).unwrap();
        assert!(!rooms[0].is_available());
    }

    #[test]
    fn test_parse_malformed_price() {
        let csv = "room_type,status,price_per_night,view_type\nSuite,available,cheap,Ocean\n";
        let err = parse_rooms(csv.as_bytes(), Path::new("bad.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn test_parse_missing_column() {
        let csv = "room_type,status,price_per_night\nSuite,available,150.00\n";
        let err = parse_rooms(csv.as_bytes(), Path::new("bad.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn test_room_type_prices_keep_first_occurrence() {
        let prices = room_type_prices(&rooms());
        assert_eq!(
            prices,
            vec![
                RoomTypePrice {
                    room_type: "Deluxe Suite".to_string(),
                    price_per_night: 250.0,
                },
                RoomTypePrice {
                    room_type: "Standard".to_string(),
                    price_per_night: 90.0,
                },
            ]
        );
    }

    #[test]
    fn test_room_type_prices_deterministic() {
        let rooms = rooms();
        assert_eq!(room_type_prices(&rooms), room_type_prices(&rooms));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let catalog = CsvRoomCatalog::new("does/not/exist/hotel_rooms.csv");
        let err = catalog.list_available_rooms().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn test_available_rooms_keep_source_order() {
        struct Fixed;

        #[async_trait]
        impl RoomCatalog for Fixed {
            async fn load_rooms(&self) -> Result<Vec<Room>, CatalogError> {
                parse_rooms(CATALOG.as_bytes(), Path::new("test.csv"))
            }
        }

        let available = Fixed.list_available_rooms().await.unwrap();
        let prices: Vec<_> = available.iter().map(|r| r.price_per_night).collect();
        assert_eq!(prices, vec![250.0, 95.5, 275.0]);
    }
}
