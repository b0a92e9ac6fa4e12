//! Joypad (P1) functions and structures.

use std::io::Cursor;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use boytacean_common::{
    data::{read_u8, write_u8},
    error::Error,
};

use crate::{
    mmu::BusComponent,
    state::{StateComponent, StateFormat},
};

/// Game Boy joypad controller, modelling the P1 ($FF00) register and the
/// edge-triggered interrupt it raises whenever a selected line transitions
/// from released (1) to pressed (0).
pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,
    selection: PadSelection,

    /// Pending Joypad interrupt flag, mirrored into IF bit 4.
    int_pad: bool,

    /// The previously observed low nibble of the selected row, used to
    /// detect the high-to-low transitions that raise the interrupt.
    last_line: u8,
}

#[derive(Clone, Copy, PartialEq)]
pub enum PadSelection {
    Action,
    Direction,
    Both,
    None,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            selection: PadSelection::Action,
            int_pad: false,
            last_line: 0x0f,
        }
    }

    pub fn reset(&mut self) {
        self.down = false;
        self.up = false;
        self.left = false;
        self.right = false;
        self.start = false;
        self.select = false;
        self.b = false;
        self.a = false;
        self.selection = PadSelection::Action;
        self.int_pad = false;
        self.last_line = 0x0f;
    }

    /// Computes the low nibble currently exposed on the selected row(s),
    /// a bit reads as 0 when the corresponding button is held.
    fn line(&self) -> u8 {
        let mut line = 0x0f;
        if matches!(self.selection, PadSelection::Action | PadSelection::Both) {
            line &= !(if self.a { 0x01 } else { 0x00 }
                | if self.b { 0x02 } else { 0x00 }
                | if self.select { 0x04 } else { 0x00 }
                | if self.start { 0x08 } else { 0x00 });
        }
        if matches!(self.selection, PadSelection::Direction | PadSelection::Both) {
            line &= !(if self.right { 0x01 } else { 0x00 }
                | if self.left { 0x02 } else { 0x00 }
                | if self.up { 0x04 } else { 0x00 }
                | if self.down { 0x08 } else { 0x00 });
        }
        line
    }

    /// Recomputes the selected line and raises the Joypad interrupt on
    /// any bit that has just gone from high (released) to low (pressed),
    /// matching the real hardware's edge-triggered behaviour.
    fn update_line(&mut self) {
        let line = self.line();
        if self.last_line & !line != 0 {
            self.int_pad = true;
        }
        self.last_line = line;
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr & 0x00ff {
            0x0000 => {
                self.line()
                    | match self.selection {
                        PadSelection::Direction => 0x10,
                        PadSelection::Action => 0x20,
                        PadSelection::Both => 0x00,
                        PadSelection::None => 0x30,
                    }
                    | 0xc0
            }
            addr => panic!("Reading from unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr & 0x00ff {
            0x0000 => {
                self.selection = match value & 0x30 {
                    0x30 => PadSelection::None,
                    0x20 => PadSelection::Direction,
                    0x10 => PadSelection::Action,
                    _ => PadSelection::Both,
                };
                self.update_line();
            }
            addr => panic!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn key_press(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = true,
            PadKey::Down => self.down = true,
            PadKey::Left => self.left = true,
            PadKey::Right => self.right = true,
            PadKey::Start => self.start = true,
            PadKey::Select => self.select = true,
            PadKey::A => self.a = true,
            PadKey::B => self.b = true,
        }
        self.update_line();
    }

    pub fn key_lift(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = false,
            PadKey::Down => self.down = false,
            PadKey::Left => self.left = false,
            PadKey::Right => self.right = false,
            PadKey::Start => self.start = false,
            PadKey::Select => self.select = false,
            PadKey::A => self.a = false,
            PadKey::B => self.b = false,
        }
        self.update_line();
    }

    /// Alias of [`Pad::key_press`] matching the host-facing controller
    /// interface vocabulary (press/release).
    pub fn press(&mut self, key: PadKey) {
        self.key_press(key);
    }

    /// Alias of [`Pad::key_lift`] matching the host-facing controller
    /// interface vocabulary (press/release).
    pub fn release(&mut self, key: PadKey) {
        self.key_lift(key);
    }

    #[inline(always)]
    pub fn int_pad(&self) -> bool {
        self.int_pad
    }

    #[inline(always)]
    pub fn set_int_pad(&mut self, value: bool) {
        self.int_pad = value;
    }

    #[inline(always)]
    pub fn ack_pad(&mut self) {
        self.set_int_pad(false);
    }
}

impl BusComponent for Pad {
    fn read(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

impl PadSelection {
    fn to_u8(self) -> u8 {
        match self {
            PadSelection::Action => 0,
            PadSelection::Direction => 1,
            PadSelection::Both => 2,
            PadSelection::None => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => PadSelection::Action,
            1 => PadSelection::Direction,
            2 => PadSelection::Both,
            _ => PadSelection::None,
        }
    }
}

impl StateComponent for Pad {
    fn state(&self, _format: Option<StateFormat>) -> Result<Vec<u8>, Error> {
        let mut cursor = Cursor::new(vec![]);
        write_u8(&mut cursor, self.down as u8)?;
        write_u8(&mut cursor, self.up as u8)?;
        write_u8(&mut cursor, self.left as u8)?;
        write_u8(&mut cursor, self.right as u8)?;
        write_u8(&mut cursor, self.start as u8)?;
        write_u8(&mut cursor, self.select as u8)?;
        write_u8(&mut cursor, self.b as u8)?;
        write_u8(&mut cursor, self.a as u8)?;
        write_u8(&mut cursor, self.selection.to_u8())?;
        write_u8(&mut cursor, self.int_pad as u8)?;
        write_u8(&mut cursor, self.last_line)?;
        Ok(cursor.into_inner())
    }

    fn set_state(&mut self, data: &[u8], _format: Option<StateFormat>) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);
        self.down = read_u8(&mut cursor)? != 0;
        self.up = read_u8(&mut cursor)? != 0;
        self.left = read_u8(&mut cursor)? != 0;
        self.right = read_u8(&mut cursor)? != 0;
        self.start = read_u8(&mut cursor)? != 0;
        self.select = read_u8(&mut cursor)? != 0;
        self.b = read_u8(&mut cursor)? != 0;
        self.a = read_u8(&mut cursor)? != 0;
        self.selection = PadSelection::from_u8(read_u8(&mut cursor)?);
        self.int_pad = read_u8(&mut cursor)? != 0;
        self.last_line = read_u8(&mut cursor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Pad, PadKey};

    #[test]
    fn test_press_raises_interrupt_on_falling_edge() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x10);
        assert!(!pad.int_pad());

        pad.key_press(PadKey::A);
        assert!(pad.int_pad());
        assert_eq!(pad.read(0xff00) & 0x0f, 0x0e);
    }

    #[test]
    fn test_release_does_not_raise_interrupt() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x10);
        pad.key_press(PadKey::A);
        pad.ack_pad();

        pad.key_lift(PadKey::A);
        assert!(!pad.int_pad());
    }

    #[test]
    fn test_ack_pad_clears_flag() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x10);
        pad.key_press(PadKey::B);
        assert!(pad.int_pad());
        pad.ack_pad();
        assert!(!pad.int_pad());
    }
}
