//! Frame abstraction for writing one encoded tile into one on/off frame of the chip.

use crate::command::consts::*;
use crate::command::Command;
use crate::error::Error;
use crate::interface;
use crate::tile::EncodedTile;

/// The blink & PWM set every frame is bound to. RAM configuration 1 has only one.
pub const PWM_SET: u8 = 0;

/// How pixel values are turned into LED drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Every lit LED is driven at full brightness, whatever its pixel value.
    OnOff,
    /// Lit LEDs are driven at their pixel value as PWM duty.
    ///
    /// Every frame shares blink & PWM set `PWM_SET`, so the levels written last apply to all
    /// frames. Only a single-tile canvas shows its own levels.
    Brightness,
}

/// A handle to one on/off frame of the display which can be written into.
///
/// These are intended to be short-lived, and contain a mutable borrow of the display that issued
/// them so clashing writes are prevented.
pub struct Frame<'di, DI>
where
    DI: 'di + interface::DisplayInterface,
{
    iface: &'di mut DI,
    frame: u8,
}

impl<'di, DI> Frame<'di, DI>
where
    DI: 'di + interface::DisplayInterface,
{
    /// Construct a new frame handle. This is only called by the factory method `Display::frame`,
    /// which checks that the frame number exists on the chip.
    pub(super) fn new(iface: &'di mut DI, frame: u8) -> Self {
        Self { iface, frame }
    }

    /// Write an encoded tile: first the on/off bits into this frame, then the blink bits (all off)
    /// and the PWM levels into the frame's blink & PWM set. The chip latches these in that order,
    /// so they are always written in full and in sequence.
    pub fn write(&mut self, tile: &EncodedTile, shading: Shading) -> Result<(), Error<DI::Error>> {
        Command::SelectFrame(self.frame).send(self.iface)?;
        for (slot, &bits) in tile.on_off.iter().enumerate() {
            let bits = if slot == 1 {
                bits | PWM_SET << FRAME_PWM_SET_SHIFT
            } else {
                bits
            };
            self.iface
                .write_slot(slot as u8, bits)
                .map_err(Error::Interface)?;
        }

        Command::SelectBlinkPwmSet(PWM_SET).send(self.iface)?;
        for slot in 0..ON_OFF_BYTES {
            self.iface
                .write_slot(slot as u8, 0x00)
                .map_err(Error::Interface)?;
        }
        for (i, &level) in tile.brightness.iter().enumerate() {
            let level = match shading {
                Shading::OnOff => 0xFF,
                Shading::Brightness => level,
            };
            self.iface
                .write_slot(PWM_FIRST_SLOT + i as u8, level)
                .map_err(Error::Interface)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::tile_writes;
    use crate::display::Display;
    use crate::interface::test_spy::{Sent, TestSpyInterface};
    use crate::tile::{encode_tile, TILE_PIXELS};

    #[test]
    fn write_on_off() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        let mut pixels = [0u8; TILE_PIXELS];
        pixels[0] = 0x10;
        let encoded = encode_tile(&pixels);
        disp.frame(2)
            .unwrap()
            .write(&encoded, Shading::OnOff)
            .unwrap();

        let sent = di.sent();
        assert_eq!(sent.len(), 1 + 24 + 1 + 24 + 131);
        assert_eq!(sent[0], Sent::Register(0xFD, 0x03));
        assert_eq!(sent[1], Sent::Slot(0x00, 0x01));
        assert_eq!(sent[24], Sent::Slot(0x17, 0x00));
        assert_eq!(sent[25], Sent::Register(0xFD, 0x40));
        assert_eq!(sent[26], Sent::Slot(0x00, 0x00));
        assert_eq!(sent[49], Sent::Slot(0x17, 0x00));
        assert_eq!(sent[50], Sent::Slot(0x18, 0xFF));
        assert_eq!(sent[180], Sent::Slot(0x9A, 0xFF));
        di.check_multi(&tile_writes(2, &encoded, Shading::OnOff));
    }

    #[test]
    fn write_brightness() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        let mut pixels = [0u8; TILE_PIXELS];
        // LED 6 at column 1, row 1.
        pixels[1 + 24] = 0x42;
        let encoded = encode_tile(&pixels);
        disp.frame(0)
            .unwrap()
            .write(&encoded, Shading::Brightness)
            .unwrap();

        let sent = di.sent();
        assert_eq!(sent[0], Sent::Register(0xFD, 0x01));
        assert_eq!(sent[1], Sent::Slot(0x00, 0b0100_0000));
        assert_eq!(sent[50], Sent::Slot(0x18, 0x00));
        assert_eq!(sent[50 + 6], Sent::Slot(0x1E, 0x42));
        assert!(sent[26..]
            .iter()
            .filter(|s| **s != Sent::Slot(0x1E, 0x42))
            .all(|s| match s {
                Sent::Slot(_, level) => *level == 0,
                _ => false,
            }));
    }

    #[test]
    fn write_stops_at_interface_failure() {
        let di = TestSpyInterface::new();
        di.fail_after(10);
        let mut disp = Display::new(di.split());
        let encoded = encode_tile(&[0xFF; TILE_PIXELS]);
        assert_eq!(
            disp.frame(0).unwrap().write(&encoded, Shading::OnOff),
            Err(Error::Interface(()))
        );
        assert_eq!(di.sent().len(), 10);
    }
}
