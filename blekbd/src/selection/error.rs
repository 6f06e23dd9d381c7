use core::fmt::Debug;

use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: 'static + Debug> {
    #[snafu(display("No layout with id {id}"))]
    InvalidLayout { id: u8 },
    #[snafu(display("No layout with the given code"))]
    NotFound,
    /// The selection changed in memory but was not persisted.
    #[snafu(display("Failed to persist layout: {source:?}"))]
    Storage {
        #[snafu(source(false))]
        #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
        source: E,
    },
}
