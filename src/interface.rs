//! The transport seam of the driver. Everything the driver sends to the chip is expressed as one of
//! two primitives, each a single two-byte write on the bus.

pub trait DisplayInterface {
    type Error;

    /// Write `value` into a control or addressing register, e.g. the register selection register
    /// or a control sub-register.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Write `value` into linear slot `slot` of the currently selected memory page (an on/off
    /// frame, or a blink & PWM set).
    fn write_slot(&mut self, slot: u8, value: u8) -> Result<(), Self::Error>;
}

pub mod i2c {
    //! The I2C interface. The AS1130 does not distinguish register and slot writes on the wire;
    //! both are a two-byte write of address then value, interpreted according to the page selected
    //! in the register selection register.

    use super::DisplayInterface;

    /// The address of an AS1130 with its address pins strapped low.
    pub const DEFAULT_ADDRESS: u8 = 0x30;

    pub struct I2cInterface<I2C> {
        /// The I2C master device connected to the AS1130.
        i2c: I2C,
        /// 7-bit bus address of the chip.
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        /// Create a new I2C interface to communicate with the chip at `DEFAULT_ADDRESS`.
        pub fn new(i2c: I2C) -> Self {
            Self::with_address(i2c, DEFAULT_ADDRESS)
        }

        /// Create a new I2C interface to communicate with the chip at `address`.
        pub fn with_address(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }

        /// Give back the I2C master device.
        pub fn release(self) -> I2C {
            self.i2c
        }

        fn write_pair(&mut self, id: u8, value: u8) -> Result<(), I2C::Error> {
            self.i2c.write(self.address, &[id, value])
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        type Error = I2C::Error;

        fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
            self.write_pair(register, value)
        }

        fn write_slot(&mut self, slot: u8, value: u8) -> Result<(), Self::Error> {
            self.write_pair(slot, value)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::vec::Vec;

        struct RecordingBus {
            writes: Vec<(u8, Vec<u8>)>,
        }

        impl hal::blocking::i2c::Write for RecordingBus {
            type Error = ();

            fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), ()> {
                self.writes.push((address, bytes.to_vec()));
                Ok(())
            }
        }

        #[test]
        fn register_and_slot_are_two_byte_writes() {
            let mut iface = I2cInterface::new(RecordingBus { writes: Vec::new() });
            iface.write_register(0xFD, 0x01).unwrap();
            iface.write_slot(0x17, 0xA5).unwrap();
            let bus = iface.release();
            assert_eq!(
                bus.writes,
                vec![(0x30, vec![0xFD, 0x01]), (0x30, vec![0x17, 0xA5])]
            );
        }

        #[test]
        fn custom_address() {
            let mut iface = I2cInterface::with_address(RecordingBus { writes: Vec::new() }, 0x37);
            iface.write_slot(0, 0).unwrap();
            assert_eq!(iface.release().writes[0].0, 0x37);
        }
    }
}
