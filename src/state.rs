//! Save-state abstraction used by components that support serialization
//! of their internal state into a flat byte buffer.
//!
//! This is intentionally a thin contract: a component hands back an opaque
//! byte blob for `state()` and must accept that same shape back in
//! `set_state()`. No on-disk format, versioning or cross-component framing
//! is defined here, that's a concern for whatever assembles component
//! states into a full snapshot.

use boytacean_common::error::Error;

/// Identifies the encoding used for a component's serialized state.
///
/// Components that only ever produce one shape of buffer can ignore the
/// format hint entirely (it's `Option` for that reason), but the variant
/// exists so that a future on-disk format can be layered on top without
/// changing every `StateComponent` impl.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateFormat {
    /// Raw, component-defined binary layout, the only format currently
    /// produced by any component in this crate.
    Raw,
}

impl Default for StateFormat {
    fn default() -> Self {
        Self::Raw
    }
}

/// Trait implemented by components whose internal state can be captured
/// and later restored, used to build save-states.
pub trait StateComponent {
    /// Serializes the component's internal state into a byte buffer,
    /// using the requested format or the component's default one.
    fn state(&self, format: Option<StateFormat>) -> Result<Vec<u8>, Error>;

    /// Restores the component's internal state from a byte buffer
    /// previously produced by [`StateComponent::state`].
    fn set_state(&mut self, data: &[u8], format: Option<StateFormat>) -> Result<(), Error>;
}
