//! The active layout and its persistence.

mod error;
mod storage;

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};

use crate::{
    config::{DEFAULT_LAYOUT, STORAGE_KEY_LAYOUT, STORAGE_NAMESPACE},
    layout::Layout,
};

pub use error::Error;
pub use storage::{MemoryStorage, MemoryStorageError, Storage, MAX_NAME_LEN};

struct State<S> {
    layout: Layout,
    storage: S,
}

/// The single layout every text conversion uses.
///
/// Reads and writes go through one blocking mutex, so a `set` (memory update
/// plus storage write) is never observed half done by another `set` or `get`.
pub struct LayoutSelection<M: RawMutex, S: Storage> {
    state: Mutex<M, RefCell<State<S>>>,
}

impl<M: RawMutex, S: Storage> LayoutSelection<M, S> {
    /// Loads the persisted layout, falling back to [`DEFAULT_LAYOUT`].
    pub fn init(mut storage: S) -> Self {
        let persisted = match storage.read_u8(STORAGE_NAMESPACE, STORAGE_KEY_LAYOUT) {
            Ok(Some(id)) => {
                let layout = Layout::from_id(id);
                if layout.is_none() {
                    warn!("Persisted layout id {} is invalid", id);
                }
                layout
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read layout: {}", debug2format!(&e));
                None
            }
        };
        let layout = match persisted {
            Some(layout) => {
                info!("Loaded keyboard layout: {}", layout.name());
                layout
            }
            None => {
                info!("Using default keyboard layout: {}", DEFAULT_LAYOUT.name());
                DEFAULT_LAYOUT
            }
        };
        LayoutSelection {
            state: Mutex::new(RefCell::new(State { layout, storage })),
        }
    }

    pub fn get(&self) -> Layout {
        self.state.lock(|state| state.borrow().layout)
    }

    /// Selects `layout` and persists it.
    ///
    /// The in-memory selection changes before the write, so on
    /// [`Error::Storage`] the new layout is active but will not survive a
    /// restart.
    pub fn set(&self, layout: Layout) -> Result<(), Error<S::Error>> {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.layout = layout;
            info!("Keyboard layout set to: {}", layout.name());
            state
                .storage
                .write_u8(STORAGE_NAMESPACE, STORAGE_KEY_LAYOUT, layout.id())
                .map_err(|source| {
                    error!("Failed to persist layout: {}", debug2format!(&source));
                    Error::Storage { source }
                })
        })
    }

    pub fn set_by_id(&self, id: u8) -> Result<Layout, Error<S::Error>> {
        let layout = Layout::from_id(id).ok_or(Error::InvalidLayout { id })?;
        self.set(layout).map(|_| layout)
    }

    /// Selects the layout with the given short code, e.g. `"ch-de"`.
    pub fn set_by_code(&self, code: &str) -> Result<Layout, Error<S::Error>> {
        let layout = Layout::from_code(code).ok_or(Error::NotFound)?;
        self.set(layout).map(|_| layout)
    }
}
