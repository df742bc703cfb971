//! Flash persistence for the watchface's stored integers.
//!
//! Uses sequential-storage for a wear-leveled key/value map in the last
//! 64KB of flash. Each [`StorageKey`] maps to one `i32` item.

use core::ops::Range;

use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use sequential_storage::cache::NoCache;
use sequential_storage::map;
use watchface_common::storage::StorageError;
use watchface_common::{MemoryStorage, StorageKey};

/// 4MB flash on the Pico 2.
pub const FLASH_SIZE: usize = 4 * 1024 * 1024;
pub const STORAGE_PARTITION_SIZE: usize = 64 * 1024;
pub const STORAGE_PARTITION_START: usize = FLASH_SIZE - STORAGE_PARTITION_SIZE;

const STORAGE_RANGE: Range<u32> = (STORAGE_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Scratch space for one serialized item (key, value and item header).
const ITEM_BUFFER_SIZE: usize = 32;

pub struct FlashStore<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> FlashStore<'d> {
    pub fn new(
        flash: Peri<'d, FLASH>,
        dma: Peri<'d, impl Channel>,
    ) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }

    /// Read every key into RAM. Unreadable keys are logged and left missing.
    pub async fn load(&mut self) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        let mut buf = [0u8; ITEM_BUFFER_SIZE];

        for key in StorageKey::ALL {
            let result = map::fetch_item::<StorageKey, i32, _>(
                &mut self.flash,
                STORAGE_RANGE,
                &mut NoCache::new(),
                &mut buf,
                &key,
            )
            .await;

            match result {
                Ok(Some(value)) => {
                    if storage.preload(key, value).is_err() {
                        defmt::warn!("No slot for {}", key);
                    }
                },
                Ok(None) => defmt::debug!("{} not stored yet", key),
                Err(_) => defmt::warn!("Flash read of {} failed", key),
            }
        }
        storage
    }

    /// Write the keys that changed since the last save. Returns how many were written.
    ///
    /// On a failed write, that key and the ones not yet written stay dirty
    /// for the next save.
    pub async fn save(
        &mut self,
        storage: &mut MemoryStorage,
    ) -> Result<usize, StorageError> {
        let mut buf = [0u8; ITEM_BUFFER_SIZE];
        let mut written = 0;
        let mut pending = storage.take_dirty();

        while let Some((key, value)) = pending.next() {
            let result = map::store_item(
                &mut self.flash,
                STORAGE_RANGE,
                &mut NoCache::new(),
                &mut buf,
                &key,
                &value,
            )
            .await;

            if result.is_err() {
                storage.mark_dirty(key);
                for (key, _) in pending {
                    storage.mark_dirty(key);
                }
                return Err(StorageError::Backend);
            }
            written += 1;
        }
        Ok(written)
    }
}
