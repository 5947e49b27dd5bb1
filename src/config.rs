//! Defines structs for storing register values of commands in the AS1130 that are associated with
//! relatively-static configuration.

use crate::command::*;
use crate::error::Error;
use crate::interface;

/// A configuration for the display. Builder methods offer a declarative way to either send a
/// configuration command at init time, or to leave it at the chip's POR default.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    ram_config: u8,
    current_cmd: Option<Command>,
    display_option_cmd: Option<Command>,
    movie_cmd: Option<Command>,
    movie_mode_cmd: Option<Command>,
    frame_time_cmd: Option<Command>,
}

impl Config {
    /// Create a new configuration. The RAM configuration is always sent, because frame and blink &
    /// PWM set addressing is meaningless until it has been. It defaults to configuration 1 (36
    /// frames, one blink & PWM set), which is what `Display::render_all` expects. All other
    /// options can be optionally set by calling the provided builder methods on `Config`.
    pub fn new() -> Self {
        Config {
            ram_config: 1,
            current_cmd: None,
            display_option_cmd: None,
            movie_cmd: None,
            movie_mode_cmd: None,
            frame_time_cmd: None,
        }
    }

    /// Extend this `Config` to use a different RAM configuration. See `Command::SetRamConfig`.
    pub fn ram_config(self, config: u8) -> Self {
        Self {
            ram_config: config,
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the LED current, clamped to 30mA. See
    /// `Command::SetCurrent`.
    pub fn current_milliamps(self, milliamps: u8) -> Self {
        Self {
            current_cmd: Some(Command::SetCurrent(current_register(milliamps))),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the display options. See
    /// `Command::SetDisplayOption`.
    pub fn display_option(self, option: u8) -> Self {
        Self {
            display_option_cmd: Some(Command::SetDisplayOption(option)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly start or stop a movie at init. See `Command::SetMovie`.
    pub fn movie(self, first_frame: Option<u8>) -> Self {
        Self {
            movie_cmd: Some(Command::SetMovie(first_frame)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the movie mode. See `Command::SetMovieMode`.
    pub fn movie_mode(self, mode: u8) -> Self {
        Self {
            movie_mode_cmd: Some(Command::SetMovieMode(mode)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure frame time and scrolling. See
    /// `Command::SetFrameTime`.
    pub fn frame_time(self, time: u8) -> Self {
        Self {
            frame_time_cmd: Some(Command::SetFrameTime(time)),
            ..self
        }
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: interface::DisplayInterface,
    {
        Command::SetRamConfig(self.ram_config).send(iface)?;
        self.current_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.display_option_cmd
            .map_or(Ok(()), |c| c.send(iface))?;
        self.movie_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.movie_mode_cmd.map_or(Ok(()), |c| c.send(iface))?;
        self.frame_time_cmd.map_or(Ok(()), |c| c.send(iface))
    }
}

impl Default for Config {
    /// The power-up configuration of a single 24x5 board: 10mA, all scan lines and loops enabled,
    /// and a one-frame movie starting at frame 0, which keeps frame 0 on screen until a picture is
    /// selected.
    fn default() -> Self {
        Config::new()
            .current_milliamps(10)
            .display_option(0b1110_1011)
            .movie(Some(0))
            .movie_mode(0b0000_0001)
            .frame_time(0b0111_0001)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn new_only_sends_ram_config() {
        let mut di = TestSpyInterface::new();
        Config::new().send(&mut di).unwrap();
        di.check_multi(&[Sent::Register(0xFD, 0xC0), Sent::Register(0x06, 1)]);
    }

    #[test]
    fn default_options() {
        let mut di = TestSpyInterface::new();
        Config::default().send(&mut di).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(&[
            Sent::Register(0xFD, 0xC0), Sent::Register(0x06, 1), // ram config
            Sent::Register(0xFD, 0xC0), Sent::Register(0x05, 85), // 10mA
            Sent::Register(0xFD, 0xC0), Sent::Register(0x04, 0b1110_1011), // display option
            Sent::Register(0xFD, 0xC0), Sent::Register(0x01, 0b0100_0000), // movie from frame 0
            Sent::Register(0xFD, 0xC0), Sent::Register(0x02, 0b0000_0001), // movie mode
            Sent::Register(0xFD, 0xC0), Sent::Register(0x03, 0b0111_0001) // frame time
        ]);
    }

    #[test]
    fn bad_ram_config() {
        let mut di = TestSpyInterface::new();
        assert_eq!(
            Config::new().ram_config(9).send(&mut di),
            Err(Error::OutOfRange)
        );
        di.check_multi(&[]);
    }
}
