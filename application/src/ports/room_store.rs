//! Room store port

use super::StoreError;
use async_trait::async_trait;
use swipematch_domain::{Room, RoomId};

/// Durable lookup of room metadata
///
/// Rooms are created and deleted by external flows; this core only reads
/// them. Expiry is the reader's concern (lazy check on the returned room).
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Point read by room id
    ///
    /// `Ok(None)` means the room does not exist (or was externally
    /// deleted); storage failures are errors, not absence.
    async fn fetch_room(&self, room_id: &RoomId) -> Result<Option<Room>, StoreError>;
}
