//! The register map and command set of the AS1130.
//!
//! Note 1: The AS1130 memory is paged. The register selection register (`REGISTER_SELECT`) picks
//! which page subsequent writes land in: one of the 36 on/off frames, one of the 6 blink & PWM
//! sets, the dot correction page, or the control registers. Anywhere there is a "slot" address,
//! it is an offset into the currently selected page.

use crate::error::Error;
use crate::interface::DisplayInterface;

pub mod consts {
    //! Register addresses and memory layout constants.

    /// The register selection register, which is the only register reachable from every page.
    pub const REGISTER_SELECT: u8 = 0xFD;

    /// Page address of on/off frame 0. Frames 0-35 follow consecutively.
    pub const FRAME0: u8 = 0x01;
    /// Page address of blink & PWM set 0. Sets 0-5 follow consecutively.
    pub const BLINK_PWM0: u8 = 0x40;
    pub const DOT_CORRECTION: u8 = 0x80;
    /// Page address of the control registers.
    pub const CONTROL: u8 = 0xC0;

    /// Number of on/off frames in the largest RAM configuration.
    pub const NUM_FRAMES: u8 = 36;
    pub const FRAME_MAX: u8 = NUM_FRAMES - 1;
    /// Number of blink & PWM sets in the largest RAM configuration.
    pub const NUM_BLINK_PWM_SETS: u8 = 6;
    pub const BLINK_PWM_SET_MAX: u8 = NUM_BLINK_PWM_SETS - 1;

    /// Bytes of on/off data in a frame, and of blink data in a blink & PWM set.
    pub const ON_OFF_BYTES: usize = 0x18;
    /// First PWM slot inside a blink & PWM set.
    pub const PWM_FIRST_SLOT: u8 = 0x18;
    /// Number of PWM slots in a blink & PWM set (slots 0x18-0x9A).
    pub const PWM_BYTES: usize = 131;
    /// Frame byte 1 carries the number of the blink & PWM set the frame uses in its top 3 bits.
    pub const FRAME_PWM_SET_SHIFT: u8 = 5;

    /// Highest current source setting, in milliamps.
    pub const MAX_CURRENT_MILLIAMPS: u8 = 30;
}

use self::consts::*;

/// Control register sub-addresses, reachable after selecting the `CONTROL` page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlRegister {
    Picture = 0x00,
    Movie = 0x01,
    MovieMode = 0x02,
    FrameTime = 0x03,
    DisplayOption = 0x04,
    CurrentSource = 0x05,
    Config = 0x06,
    InterruptMask = 0x07,
    InterruptFrame = 0x08,
    Shutdown = 0x09,
    I2cMonitor = 0x0A,
    ClockSync = 0x0B,
    InterruptStatus = 0x0E,
    Status = 0x0F,
    OpenLed = 0x20,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Select on/off frame page for subsequent slot writes. Range 0-35. (Note 1)
    SelectFrame(u8),
    /// Select blink & PWM set page for subsequent slot writes. Range 0-5. (Note 1)
    SelectBlinkPwmSet(u8),
    /// Display a single frame as a still picture, or stop displaying a picture with `None`. Range
    /// 0-35.
    SetPicture(Option<u8>),
    /// Start a movie at the given first frame, or stop playing with `None`. Range 0-35.
    SetMovie(Option<u8>),
    /// Raw movie mode register: blink enable, end-on-last-frame, and movie frame count.
    SetMovieMode(u8),
    /// Raw frame time and scroll register: fade, scroll settings and frame delay.
    SetFrameTime(u8),
    /// Raw display option register: loop count, blink frequency and scan limit.
    SetDisplayOption(u8),
    /// Set the LED current source. Range 0-255 maps linearly onto 0-30mA.
    SetCurrent(u8),
    /// Set the RAM configuration, which trades on/off frames for blink & PWM sets. Range 1-6;
    /// configuration 1 gives 36 frames and 1 blink & PWM set.
    SetRamConfig(u8),
    /// Control shutdown. `true` shuts the LED drivers down, `false` runs normally.
    SetShutdown(bool),
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let (page, control) = match self {
            Command::SelectFrame(frame) => match frame {
                0..=FRAME_MAX => (FRAME0 + frame, None),
                _ => return Err(Error::OutOfRange),
            },
            Command::SelectBlinkPwmSet(set) => match set {
                0..=BLINK_PWM_SET_MAX => (BLINK_PWM0 + set, None),
                _ => return Err(Error::OutOfRange),
            },
            Command::SetPicture(frame) => (
                CONTROL,
                Some((ControlRegister::Picture, display_frame::<DI::Error>(frame)?)),
            ),
            Command::SetMovie(frame) => (
                CONTROL,
                Some((ControlRegister::Movie, display_frame::<DI::Error>(frame)?)),
            ),
            Command::SetMovieMode(mode) => (CONTROL, Some((ControlRegister::MovieMode, mode))),
            Command::SetFrameTime(time) => (CONTROL, Some((ControlRegister::FrameTime, time))),
            Command::SetDisplayOption(option) => {
                (CONTROL, Some((ControlRegister::DisplayOption, option)))
            }
            Command::SetCurrent(current) => {
                (CONTROL, Some((ControlRegister::CurrentSource, current)))
            }
            Command::SetRamConfig(config) => match config {
                1..=6 => (CONTROL, Some((ControlRegister::Config, config))),
                _ => return Err(Error::OutOfRange),
            },
            Command::SetShutdown(shutdown) => {
                let value = match shutdown {
                    true => 0b0000_0010,
                    false => 0b0000_0011,
                };
                (CONTROL, Some((ControlRegister::Shutdown, value)))
            }
        };
        iface
            .write_register(REGISTER_SELECT, page)
            .map_err(Error::Interface)?;
        match control {
            Some((register, value)) => iface
                .write_register(register as u8, value)
                .map_err(Error::Interface),
            None => Ok(()),
        }
    }
}

/// Encode the picture and movie register value: bit 6 enables, bits 0-5 hold the frame.
fn display_frame<E>(frame: Option<u8>) -> Result<u8, Error<E>> {
    match frame {
        Some(frame @ 0..=FRAME_MAX) => Ok(0x40 | frame),
        Some(_) => Err(Error::OutOfRange),
        None => Ok(0x00),
    }
}

/// Convert a current in milliamps to the current source register value, clamping to the chip's
/// 30mA maximum.
pub fn current_register(milliamps: u8) -> u8 {
    let milliamps = milliamps.min(MAX_CURRENT_MILLIAMPS) as u16;
    (milliamps * 255 / MAX_CURRENT_MILLIAMPS as u16) as u8
}
