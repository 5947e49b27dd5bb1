//! The main API to the display driver. It provides a builder API to configure the display, and
//! methods for obtaining `Frame` instances and for sending whole canvases to the display.

pub mod frame;

use log::{debug, trace};

use crate::canvas::Canvas;
use crate::command::consts::*;
use crate::command::*;
use crate::config::Config;
use crate::display::frame::{Frame, Shading};
use crate::error::Error;
use crate::interface;
use crate::tile::{self, TILE_COLS};

/// A driver for an AS1130 with one 24x5 LED tile per on/off frame.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver for a chip connected to the interface `iface`. Nothing is
    /// sent until `init`.
    pub fn new(iface: DI) -> Self {
        Display { iface }
    }

    /// Give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }

    /// Initialize the display with a config message, then bring it out of shutdown.
    pub fn init(&mut self, config: Config) -> Result<(), Error<DI::Error>> {
        debug!("as1130: init {:?}", config);
        config.send(&mut self.iface)?;
        self.shutdown(false)
    }

    /// Control shutdown.
    pub fn shutdown(&mut self, enabled: bool) -> Result<(), Error<DI::Error>> {
        Command::SetShutdown(enabled).send(&mut self.iface)
    }

    /// Control the LED current, clamped to 30mA.
    pub fn current_milliamps(&mut self, milliamps: u8) -> Result<(), Error<DI::Error>> {
        Command::SetCurrent(current_register(milliamps)).send(&mut self.iface)
    }

    /// Display frame `frame` as a still picture.
    pub fn show_frame(&mut self, frame: u8) -> Result<(), Error<DI::Error>> {
        Command::SetPicture(Some(frame)).send(&mut self.iface)
    }

    /// Obtain a handle for writing into on/off frame `frame`, which must be in the range 0-35.
    ///
    /// Frames are intended to be short-lived, and mutably borrow the display so clashing writes
    /// are prevented.
    pub fn frame<'di>(&'di mut self, frame: u8) -> Result<Frame<'di, DI>, Error<DI::Error>> {
        if frame > FRAME_MAX {
            return Err(Error::OutOfRange);
        }
        Ok(Frame::new(&mut self.iface, frame))
    }

    /// Send a whole canvas to the display, tile `n` of the canvas going into frame `n`. Returns
    /// the number of tiles written.
    ///
    /// Only whole tiles are sent; see `tile::split`. A canvas with more tiles than the chip has
    /// frames is refused before anything is written. If the interface fails, writing stops there
    /// and the error is returned, leaving the frame being written incomplete; sending the canvas
    /// again restores a consistent picture.
    ///
    /// With `Shading::Brightness` each tile overwrites the one PWM table shared by all frames, so
    /// on a canvas of several tiles every frame is shaded with the last tile's levels.
    pub fn render_all(
        &mut self,
        canvas: &Canvas,
        shading: Shading,
    ) -> Result<usize, Error<DI::Error>> {
        let tiles = tile::split(canvas);
        let count = tiles.len();
        if count > NUM_FRAMES as usize {
            return Err(Error::OutOfRange);
        }
        debug!(
            "as1130: render {}x{} canvas as {} tiles, {} columns unused, {:?}",
            canvas.width(),
            canvas.height(),
            count,
            canvas.width() % TILE_COLS,
            shading
        );
        for tile in tiles {
            trace!("as1130: tile {} from column {}", tile.index, tile.first_column);
            self.frame(tile.index as u8)?
                .write(&tile.encode(), shading)?;
        }
        Ok(count)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::vec::Vec;

    use crate::command::consts::*;
    use crate::display::frame::{Shading, PWM_SET};
    use crate::interface::test_spy::Sent;
    use crate::tile::EncodedTile;

    /// Everything a `Frame::write` of `tile` into `frame` is expected to send.
    pub(crate) fn tile_writes(frame: u8, tile: &EncodedTile, shading: Shading) -> Vec<Sent> {
        let mut sent = Vec::new();
        sent.push(Sent::Register(REGISTER_SELECT, FRAME0 + frame));
        for (slot, &bits) in tile.on_off.iter().enumerate() {
            sent.push(Sent::Slot(slot as u8, bits));
        }
        sent.push(Sent::Register(REGISTER_SELECT, BLINK_PWM0 + PWM_SET));
        for slot in 0..ON_OFF_BYTES {
            sent.push(Sent::Slot(slot as u8, 0));
        }
        for (i, &level) in tile.brightness.iter().enumerate() {
            let level = match shading {
                Shading::OnOff => 0xFF,
                Shading::Brightness => level,
            };
            sent.push(Sent::Slot(PWM_FIRST_SLOT + i as u8, level));
        }
        sent
    }
}
