use core::fmt::Debug;

use heapless::{FnvIndexMap, String};
use snafu::Snafu;

/// Durable key/value store for small settings, NVS style.
pub trait Storage {
    type Error: 'static + Debug;

    /// `Ok(None)` when nothing has been stored under the key yet.
    fn read_u8(&mut self, namespace: &str, key: &str) -> Result<Option<u8>, Self::Error>;

    fn write_u8(&mut self, namespace: &str, key: &str, value: u8) -> Result<(), Self::Error>;
}

impl<T: Storage + ?Sized> Storage for &mut T {
    type Error = T::Error;

    fn read_u8(&mut self, namespace: &str, key: &str) -> Result<Option<u8>, Self::Error> {
        (**self).read_u8(namespace, key)
    }

    fn write_u8(&mut self, namespace: &str, key: &str, value: u8) -> Result<(), Self::Error> {
        (**self).write_u8(namespace, key, value)
    }
}

/// Longest namespace or key name, as on ESP-IDF NVS.
pub const MAX_NAME_LEN: usize = 15;

type Name = String<MAX_NAME_LEN>;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryStorageError {
    #[snafu(display("Namespace or key name too long"))]
    NameTooLong,
    #[snafu(display("Storage is full"))]
    Full,
}

/// Volatile [`Storage`], for boards without flash settings and for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage<const N: usize> {
    values: FnvIndexMap<(Name, Name), u8, N>,
}

impl<const N: usize> MemoryStorage<N> {
    pub fn new() -> Self {
        MemoryStorage {
            values: FnvIndexMap::new(),
        }
    }

    fn name(s: &str) -> Result<Name, MemoryStorageError> {
        Name::try_from(s).map_err(|_| MemoryStorageError::NameTooLong)
    }
}

impl<const N: usize> Storage for MemoryStorage<N> {
    type Error = MemoryStorageError;

    fn read_u8(&mut self, namespace: &str, key: &str) -> Result<Option<u8>, Self::Error> {
        let entry = (Self::name(namespace)?, Self::name(key)?);
        Ok(self.values.get(&entry).copied())
    }

    fn write_u8(&mut self, namespace: &str, key: &str, value: u8) -> Result<(), Self::Error> {
        let entry = (Self::name(namespace)?, Self::name(key)?);
        self.values
            .insert(entry, value)
            .map(|_| ())
            .map_err(|_| MemoryStorageError::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_written_values() {
        let mut storage = MemoryStorage::<4>::new();
        assert_eq!(storage.read_u8("ns", "a"), Ok(None));
        storage.write_u8("ns", "a", 3).unwrap();
        storage.write_u8("other", "a", 5).unwrap();
        assert_eq!(storage.read_u8("ns", "a"), Ok(Some(3)));
        assert_eq!(storage.read_u8("other", "a"), Ok(Some(5)));
        storage.write_u8("ns", "a", 4).unwrap();
        assert_eq!(storage.read_u8("ns", "a"), Ok(Some(4)));
    }

    #[test]
    fn errors() {
        let mut storage = MemoryStorage::<2>::new();
        assert_eq!(
            storage.write_u8("ns", "a_very_long_key_name", 1),
            Err(MemoryStorageError::NameTooLong)
        );
        storage.write_u8("ns", "a", 1).unwrap();
        storage.write_u8("ns", "b", 2).unwrap();
        assert_eq!(storage.write_u8("ns", "c", 3), Err(MemoryStorageError::Full));
        // Overwriting does not need a free slot
        assert_eq!(storage.write_u8("ns", "b", 9), Ok(()));
    }
}
