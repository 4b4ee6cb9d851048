//! EEPROM-style storage abstractions
//!
//! Settings are persisted as single bytes at fixed offsets. Writes land in
//! a RAM mirror and only reach the non-volatile medium on [`EepromStorage::commit`].

/// Errors from EEPROM storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Offset lies outside the storage window
    OutOfRange,
    /// Underlying flash erase/program failed
    Flash,
    /// Stored page failed its integrity check
    Corrupted,
}

/// Byte-addressed persistent storage
///
/// Offsets are stable across firmware revisions: a slot, once assigned,
/// must never move or previously saved data becomes unreadable.
pub trait EepromStorage {
    /// Number of addressable bytes
    fn capacity(&self) -> usize;

    /// Read the byte stored at `offset`
    ///
    /// Erased (never written) cells read back as `0`.
    fn get(&self, offset: u16) -> Result<u8, StorageError>;

    /// Stage a byte at `offset`
    ///
    /// The value is visible to [`get`](Self::get) immediately but is not
    /// durable until [`commit`](Self::commit) succeeds.
    fn put(&mut self, offset: u16, value: u8) -> Result<(), StorageError>;

    /// Flush staged bytes to the non-volatile medium
    fn commit(&mut self) -> Result<(), StorageError>;
}

impl<T: EepromStorage + ?Sized> EepromStorage for &mut T {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn get(&self, offset: u16) -> Result<u8, StorageError> {
        (**self).get(offset)
    }

    fn put(&mut self, offset: u16, value: u8) -> Result<(), StorageError> {
        (**self).put(offset, value)
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        (**self).commit()
    }
}
