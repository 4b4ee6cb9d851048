//! Flash page for EEPROM emulation
//!
//! Settings live in the last erase sector of the 2 MB flash, outside the
//! program image.

use embassy_rp::flash::{Blocking, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use usonic_drivers::storage::{PageBackend, PAGE_LEN};
use usonic_hal::StorageError;

/// Flash size on the controller board
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Offset of the settings sector
pub const SETTINGS_SECTOR: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

/// RP2040 flash page backend
pub struct FlashPage<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> FlashPage<'d> {
    pub fn new(flash: Peri<'d, FLASH>) -> Self {
        Self {
            flash: Flash::new_blocking(flash),
        }
    }
}

impl PageBackend for FlashPage<'_> {
    fn read_page(&mut self, page: &mut [u8; PAGE_LEN]) -> Result<(), StorageError> {
        self.flash
            .blocking_read(SETTINGS_SECTOR, page)
            .map_err(|_| StorageError::Flash)
    }

    fn write_page(&mut self, page: &[u8; PAGE_LEN]) -> Result<(), StorageError> {
        self.flash
            .blocking_erase(SETTINGS_SECTOR, SETTINGS_SECTOR + ERASE_SIZE as u32)
            .map_err(|_| StorageError::Flash)?;
        self.flash
            .blocking_write(SETTINGS_SECTOR, page)
            .map_err(|_| StorageError::Flash)
    }
}
