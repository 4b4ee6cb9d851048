//! EEPROM emulation on a flash page
//!
//! A RAM mirror serves reads and collects writes; `commit` writes the whole
//! mirror back as one page image:
//!
//! ```text
//! ┌────────────┬────────────────────┬─────┬─────────┐
//! │ magic (4)  │ data (N)           │ crc │ padding │
//! └────────────┴────────────────────┴─────┴─────────┘
//! ```
//!
//! A page without the magic is treated as a blank device (all zeros).

use usonic_hal::eeprom::{EepromStorage, StorageError};

/// Size of one page image
pub const PAGE_LEN: usize = 256;

/// Page signature, "USNC"
const MAGIC: [u8; 4] = *b"USNC";

const HEADER_LEN: usize = MAGIC.len();

/// Raw page access on the non-volatile medium
pub trait PageBackend {
    /// Read the stored page image
    fn read_page(&mut self, page: &mut [u8; PAGE_LEN]) -> Result<(), StorageError>;

    /// Erase and rewrite the page image
    fn write_page(&mut self, page: &[u8; PAGE_LEN]) -> Result<(), StorageError>;
}

/// Byte-addressed storage of `N` bytes backed by one flash page
pub struct EmulatedEeprom<P, const N: usize> {
    backend: P,
    mirror: [u8; N],
    dirty: bool,
}

impl<P: PageBackend, const N: usize> EmulatedEeprom<P, N> {
    const FITS: () = assert!(HEADER_LEN + N + 1 <= PAGE_LEN, "EEPROM larger than a page");

    /// Create a blank mirror; call [`load`](Self::load) to read the page
    pub fn new(backend: P) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        Self {
            backend,
            mirror: [0; N],
            dirty: false,
        }
    }

    /// Fill the mirror from the stored page
    ///
    /// A blank page leaves the mirror zeroed. A page with a bad checksum
    /// also leaves it zeroed and reports [`StorageError::Corrupted`].
    pub fn load(&mut self) -> Result<(), StorageError> {
        let mut page = [0u8; PAGE_LEN];
        self.backend.read_page(&mut page)?;
        self.mirror = [0; N];
        self.dirty = false;

        if page[..HEADER_LEN] != MAGIC {
            return Ok(());
        }

        let data = &page[HEADER_LEN..HEADER_LEN + N];
        if page_crc(data) != page[HEADER_LEN + N] {
            return Err(StorageError::Corrupted);
        }
        self.mirror.copy_from_slice(data);
        Ok(())
    }

    /// True if there are uncommitted writes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    fn page_image(&self) -> [u8; PAGE_LEN] {
        let mut page = [0xFF; PAGE_LEN];
        page[..HEADER_LEN].copy_from_slice(&MAGIC);
        page[HEADER_LEN..HEADER_LEN + N].copy_from_slice(&self.mirror);
        page[HEADER_LEN + N] = page_crc(&self.mirror);
        page
    }
}

impl<P: PageBackend, const N: usize> EepromStorage for EmulatedEeprom<P, N> {
    fn capacity(&self) -> usize {
        N
    }

    fn get(&self, offset: u16) -> Result<u8, StorageError> {
        self.mirror
            .get(usize::from(offset))
            .copied()
            .ok_or(StorageError::OutOfRange)
    }

    fn put(&mut self, offset: u16, value: u8) -> Result<(), StorageError> {
        let cell = self
            .mirror
            .get_mut(usize::from(offset))
            .ok_or(StorageError::OutOfRange)?;
        if *cell != value {
            *cell = value;
            self.dirty = true;
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        if !self.dirty {
            return Ok(());
        }
        let page = self.page_image();
        self.backend.write_page(&page)?;
        self.dirty = false;

        #[cfg(feature = "defmt")]
        defmt::debug!("EEPROM page committed");
        Ok(())
    }
}

/// Page held in RAM, for host tests and simulation
pub struct RamPage {
    page: [u8; PAGE_LEN],
    writes: u32,
    fail_writes: bool,
}

impl Default for RamPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RamPage {
    /// An erased page
    pub fn new() -> Self {
        Self {
            page: [0xFF; PAGE_LEN],
            writes: 0,
            fail_writes: false,
        }
    }

    /// Number of successful page writes
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Make subsequent writes fail
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw page contents
    pub fn raw(&self) -> &[u8; PAGE_LEN] {
        &self.page
    }

    /// Raw page contents, for corrupting in tests
    pub fn raw_mut(&mut self) -> &mut [u8; PAGE_LEN] {
        &mut self.page
    }
}

impl PageBackend for RamPage {
    fn read_page(&mut self, page: &mut [u8; PAGE_LEN]) -> Result<(), StorageError> {
        page.copy_from_slice(&self.page);
        Ok(())
    }

    fn write_page(&mut self, page: &[u8; PAGE_LEN]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Flash);
        }
        self.page.copy_from_slice(page);
        self.writes += 1;
        Ok(())
    }
}

/// CRC-8 of the data area, polynomial 0x07 (x^8 + x^2 + x + 1)
fn page_crc(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        let mut current = byte;
        for _ in 0..8 {
            if ((crc >> 7) ^ (current >> 7)) != 0 {
                crc = (crc << 1) ^ 0x07;
            } else {
                crc <<= 1;
            }
            current <<= 1;
        }
    }
    crc
}

impl<P: PageBackend + ?Sized> PageBackend for &mut P {
    fn read_page(&mut self, page: &mut [u8; PAGE_LEN]) -> Result<(), StorageError> {
        (**self).read_page(page)
    }

    fn write_page(&mut self, page: &[u8; PAGE_LEN]) -> Result<(), StorageError> {
        (**self).write_page(page)
    }
}
