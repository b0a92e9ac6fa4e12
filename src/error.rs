//! Error related data structures.

use std::fmt::{self, Display, Formatter};

/// Top level enum for error handling within Boytacean.
///
/// Most of the time, you will want to use the `CustomError` variant
/// to provide a more detailed error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    RomSize,

    /// ROM could not be loaded, either an I/O failure reading the
    /// buffer or a size/header inconsistency. The core is left
    /// uninitialised, callers must surface this to the user.
    RomLoadFailure(String),

    /// The cartridge header declares a mapper type outside the
    /// supported set, the core refuses to initialise.
    UnknownMapper(u8),

    /// A save file's size does not match the cartridge's expected RAM
    /// size, the mismatched save is ignored rather than loaded.
    SaveMismatch,

    /// An illegal/unimplemented opcode ($D3/$DB/$DD/$E3/$E4/$EB/$EC/
    /// $F4/$FC/$FD) was fetched. Not surfaced as a hard failure, the
    /// CPU enters a stopped state instead, see [`crate::cpu::Cpu::stopped`].
    IllegalInstruction(u8),

    /// Attempt to service an interrupt bit outside the valid 0-4
    /// range, a programming error that must never occur in a correct
    /// implementation.
    IllegalInterruptIndex(u8),

    CustomError(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::RomSize => String::from("Invalid ROM size"),
            Error::RomLoadFailure(message) => format!("ROM load failure: {}", message),
            Error::UnknownMapper(mapper) => format!("Unknown mapper type 0x{:02x}", mapper),
            Error::SaveMismatch => String::from("Save file size does not match cartridge RAM"),
            Error::IllegalInstruction(opcode) => {
                format!("Illegal instruction 0x{:02x}", opcode)
            }
            Error::IllegalInterruptIndex(index) => {
                format!("Illegal interrupt index {}", index)
            }
            Error::CustomError(message) => message.clone(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
