#![no_std]
use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
    spi::SpiDevice,
};
use st_mems_bus::BusOperation;

pub mod prelude;
pub mod register;

use prelude::*;

/// The Lis3de generic driver struct.
///
/// The bus is generalized over the BusOperation trait, allowing the use
/// of I2C or SPI protocols; this also allows the user to implement sharing
/// techniques to share the underlying bus.
///
/// The driver keeps no copy of the sensor configuration: every accessor
/// talks to the device. Calls against one sensor must be serialized by the
/// owner, since read-modify-write accessors are not atomic on the bus.
pub struct Lis3de<B, T> {
    /// The bus driver.
    pub bus: B,
    pub tim: T,
    auto_inc: u8,
}

/// Driver errors.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<B> {
    Bus(B), // Error at the bus level
}

/// Sub-address flag enabling register auto-increment on I2C.
const I2C_AUTO_INC: u8 = 0x80;
/// Multiple-byte (MS) flag enabling register auto-increment on SPI.
const SPI_AUTO_INC: u8 = 0x40;

/// Time needed by the device to reload its trimming parameters after a
/// reboot, in milliseconds.
pub const BOOT_TIME_MS: u32 = 5;

impl<P, T> Lis3de<st_mems_bus::i2c::I2cBus<P>, T>
where
    P: I2c,
    T: DelayNs,
{
    /// Constructor method for using the I2C bus.
    ///
    /// # Arguments
    ///
    /// * `i2c`: The I2C peripheral.
    /// * `address`: The I2C address of the Lis3de sensor.
    /// * `tim`: The timer used to wait for the boot procedure.
    ///
    /// # Returns
    ///
    /// * `Self`: Returns an instance of `Lis3de`.
    pub fn new_i2c(i2c: P, address: I2CAddress, tim: T) -> Self {
        // Initialize the I2C bus with the Lis3de address
        let bus = st_mems_bus::i2c::I2cBus::new(i2c, address as SevenBitAddress);
        Self {
            bus,
            tim,
            auto_inc: I2C_AUTO_INC,
        }
    }
}

impl<P, T> Lis3de<st_mems_bus::spi::SpiBus<P>, T>
where
    P: SpiDevice,
    T: DelayNs,
{
    /// Constructor method for using the SPI bus.
    ///
    /// # Arguments
    ///
    /// * `spi`: The SPI peripheral.
    /// * `tim`: The timer used to wait for the boot procedure.
    ///
    /// # Returns
    ///
    /// * `Self`: Returns an instance of `Lis3de`.
    pub fn new_spi(spi: P, tim: T) -> Self {
        // Initialize the SPI bus
        let bus = st_mems_bus::spi::SpiBus::new(spi);
        Self {
            bus,
            tim,
            auto_inc: SPI_AUTO_INC,
        }
    }
}

impl<B: BusOperation, T: DelayNs> Lis3de<B, T> {
    /// Constructor method from a generic bus that implements
    /// the BusOperation trait.
    ///
    /// The bus is expected to take care of register auto-increment on
    /// multi-byte reads.
    #[inline]
    pub fn from_bus(bus: B, tim: T) -> Self {
        Self {
            bus,
            tim,
            auto_inc: 0,
        }
    }

    #[inline]
    pub fn read_from_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<B::Error>> {
        self.bus.read_from_register(reg, buf).map_err(Error::Bus)
    }

    #[inline]
    pub fn write_to_register(&mut self, reg: u8, buf: &[u8]) -> Result<(), Error<B::Error>> {
        self.bus.write_to_register(reg, buf).map_err(Error::Bus)
    }

    /// Reads `buf.len()` consecutive registers starting at `reg`.
    fn read_consecutive(&mut self, reg: Reg, buf: &mut [u8]) -> Result<(), Error<B::Error>> {
        let address = if buf.len() > 1 {
            reg as u8 | self.auto_inc
        } else {
            reg as u8
        };
        self.read_from_register(address, buf)
    }

    /// Temperature status register.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `StatusRegAux`: Content of STATUS_REG_AUX.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn temp_status_reg_get(&mut self) -> Result<StatusRegAux, Error<B::Error>> {
        StatusRegAux::read(self)
    }

    /// Temperature data available.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of 3da in reg STATUS_REG_AUX.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn temp_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.temp_status_reg_get()?.da3())
    }

    /// Temperature data overrun.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of 3or in reg STATUS_REG_AUX.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn temp_data_ovr_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.temp_status_reg_get()?.or3())
    }

    /// Temperature output value.
    ///
    /// The sample is an 8-bit two's complement value relative to 25 degC,
    /// returned sign-extended; see [`from_lsb_to_celsius`].
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `i16`: Raw temperature read from OUT_ADC1_H.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn temperature_raw_get(&mut self) -> Result<i16, Error<B::Error>> {
        let out_adc1_h = OutAdc1H::read(self)?;
        Ok(out_adc1_h.data() as i8 as i16)
    }

    /// ADC output value.
    ///
    /// Sample frequency is the same as the ODR in CTRL_REG1. The resolution
    /// is 10 bit in normal mode and 8 bit in low-power mode. Outputs are
    /// left-justified two's complement over an 800 mV range; code zero is
    /// about 1.2 V, lower voltages are positive.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `[i16; 3]`: The three ADC channels.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn adc_raw_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let mut buff = [0u8; 6];
        self.read_consecutive(Reg::OutAdc1L, &mut buff)?;

        Ok([
            i16::from_le_bytes([buff[0], buff[1]]),
            i16::from_le_bytes([buff[2], buff[3]]),
            i16::from_le_bytes([buff[4], buff[5]]),
        ])
    }

    /// Auxiliary ADC.
    ///
    /// Any setting other than `AuxDisable` requires block data update, so
    /// BDU is enabled first; the ADC configuration is not written if that
    /// fails.
    ///
    /// # Arguments
    ///
    /// * `val`: Configure the auxiliary ADC (temp_en and adc_pd in TEMP_CFG_REG).
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn aux_adc_set(&mut self, val: TempEn) -> Result<(), Error<B::Error>> {
        let mut temp_cfg_reg = TempCfgReg::read(self)?;

        if val != TempEn::AuxDisable {
            self.block_data_update_set(PROPERTY_ENABLE)?;
        }

        temp_cfg_reg.set_temp_en(((val as u8) & 0x02) >> 1);
        temp_cfg_reg.set_adc_pd((val as u8) & 0x01);
        temp_cfg_reg.write(self)
    }

    /// Auxiliary ADC.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `TempEn`: Get the values of temp_en and adc_pd in TEMP_CFG_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn aux_adc_get(&mut self) -> Result<TempEn, Error<B::Error>> {
        let temp_cfg_reg = TempCfgReg::read(self)?;
        let code = (temp_cfg_reg.temp_en() << 1) | temp_cfg_reg.adc_pd();
        Ok(TempEn::try_from(code).unwrap_or_default())
    }

    /// Operating mode selection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of lpen in reg CTRL_REG1.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn operating_mode_set(&mut self, val: OpMd) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg1 = CtrlReg1::read(self)?;
        ctrl_reg1.set_lpen(val as u8);
        ctrl_reg1.write(self)
    }

    /// Operating mode selection.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `OpMd`: Get the values of lpen in reg CTRL_REG1.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn operating_mode_get(&mut self) -> Result<OpMd, Error<B::Error>> {
        let ctrl_reg1 = CtrlReg1::read(self)?;
        Ok(OpMd::try_from(ctrl_reg1.lpen()).unwrap_or_default())
    }

    /// Output data rate selection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of odr in reg CTRL_REG1.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn data_rate_set(&mut self, val: Odr) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg1 = CtrlReg1::read(self)?;
        ctrl_reg1.set_odr(val as u8);
        ctrl_reg1.write(self)
    }

    /// Output data rate selection.
    ///
    /// Codes outside the documented set read back as `PowerDown`.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Odr`: Get the values of odr in reg CTRL_REG1.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn data_rate_get(&mut self) -> Result<Odr, Error<B::Error>> {
        let ctrl_reg1 = CtrlReg1::read(self)?;
        Ok(Odr::try_from(ctrl_reg1.odr()).unwrap_or_default())
    }

    /// High pass data from internal filter sent to output register and FIFO.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of fds in reg CTRL_REG2.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_on_outputs_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg2 = CtrlReg2::read(self)?;
        ctrl_reg2.set_fds(val & 0x01);
        ctrl_reg2.write(self)
    }

    /// High pass data from internal filter sent to output register and FIFO.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of fds in reg CTRL_REG2.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_on_outputs_get(&mut self) -> Result<u8, Error<B::Error>> {
        let ctrl_reg2 = CtrlReg2::read(self)?;
        Ok(ctrl_reg2.fds())
    }

    /// High-pass filter cutoff frequency selection.
    ///
    /// See [`Hpcf`] for the cutoff obtained at each data rate.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of hpcf in reg CTRL_REG2.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_bandwidth_set(&mut self, val: Hpcf) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg2 = CtrlReg2::read(self)?;
        ctrl_reg2.set_hpcf(val as u8);
        ctrl_reg2.write(self)
    }

    /// High-pass filter cutoff frequency selection.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Hpcf`: Get the values of hpcf in reg CTRL_REG2.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_bandwidth_get(&mut self) -> Result<Hpcf, Error<B::Error>> {
        let ctrl_reg2 = CtrlReg2::read(self)?;
        Ok(Hpcf::try_from(ctrl_reg2.hpcf()).unwrap_or_default())
    }

    /// High-pass filter mode selection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of hpm in reg CTRL_REG2.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_mode_set(&mut self, val: Hpm) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg2 = CtrlReg2::read(self)?;
        ctrl_reg2.set_hpm(val as u8);
        ctrl_reg2.write(self)
    }

    /// High-pass filter mode selection.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Hpm`: Get the values of hpm in reg CTRL_REG2.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_mode_get(&mut self) -> Result<Hpm, Error<B::Error>> {
        let ctrl_reg2 = CtrlReg2::read(self)?;
        Ok(Hpm::try_from(ctrl_reg2.hpm()).unwrap_or_default())
    }

    /// Full-scale configuration.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of fs in reg CTRL_REG4.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn full_scale_set(&mut self, val: Fs) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg4 = CtrlReg4::read(self)?;
        ctrl_reg4.set_fs(val as u8);
        ctrl_reg4.write(self)
    }

    /// Full-scale configuration.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Fs`: Get the values of fs in reg CTRL_REG4.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn full_scale_get(&mut self) -> Result<Fs, Error<B::Error>> {
        let ctrl_reg4 = CtrlReg4::read(self)?;
        Ok(Fs::try_from(ctrl_reg4.fs()).unwrap_or_default())
    }

    /// Block data update.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of bdu in reg CTRL_REG4.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`: No Error.
    pub fn block_data_update_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg4 = CtrlReg4::read(self)?;
        ctrl_reg4.set_bdu(val & 0x01);
        ctrl_reg4.write(self)
    }

    /// Block data update.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of bdu in reg CTRL_REG4.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn block_data_update_get(&mut self) -> Result<u8, Error<B::Error>> {
        let ctrl_reg4 = CtrlReg4::read(self)?;
        Ok(ctrl_reg4.bdu())
    }

    /// Reference value for interrupt generation.
    /// LSB = ~16@2g / ~31@4g / ~63@8g / ~127@16g
    ///
    /// # Arguments
    ///
    /// * `val`: Value written to REFERENCE.
    pub fn filter_reference_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        Reference::new().with_reference(val).write(self)
    }

    /// Reference value for interrupt generation.
    /// LSB = ~16@2g / ~31@4g / ~63@8g / ~127@16g
    pub fn filter_reference_get(&mut self) -> Result<u8, Error<B::Error>> {
        Reference::read(self).map(|reg| reg.reference())
    }

    /// Acceleration set of data available.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of zyxda in reg STATUS_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn xl_data_ready_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.status_get()?.zyxda())
    }

    /// Acceleration set of data overrun.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of zyxor in reg STATUS_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn xl_data_ovr_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.status_get()?.zyxor())
    }

    /// Acceleration output value.
    ///
    /// The three axes are read one register at a time (X, then Y, then Z).
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `[i16; 3]`: Raw acceleration of the X, Y and Z axes.
    ///     * `Err`: Returns an error if any axis read fails.
    pub fn acceleration_raw_get(&mut self) -> Result<[i16; 3], Error<B::Error>> {
        let mut buff = [0i16; 3];
        self.acceleration_raw_fill(&mut buff)?;
        Ok(buff)
    }

    /// Acceleration output value, filled in place.
    ///
    /// Axes are read in order X, Y, Z. Reading stops at the first failing
    /// transfer: axes read before the failure are stored in `buff`, the
    /// remaining ones are left untouched.
    ///
    /// # Arguments
    ///
    /// * `buff`: Buffer that stores data read.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: The error of the first failing axis read.
    pub fn acceleration_raw_fill(&mut self, buff: &mut [i16; 3]) -> Result<(), Error<B::Error>> {
        buff[0] = OutX::read(self)?.data() as i8 as i16;
        buff[1] = OutY::read(self)?.data() as i8 as i16;
        buff[2] = OutZ::read(self)?.data() as i8 as i16;
        Ok(())
    }

    /// Device Who am I.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Buffer that stores data read.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn device_id_get(&mut self) -> Result<u8, Error<B::Error>> {
        WhoAmI::read(self).map(|reg| reg.id())
    }

    /// Self Test.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of st in reg CTRL_REG4.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn self_test_set(&mut self, val: St) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg4 = CtrlReg4::read(self)?;
        ctrl_reg4.set_st(val as u8);
        ctrl_reg4.write(self)
    }

    /// Self Test.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `St`: Get the values of st in reg CTRL_REG4.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn self_test_get(&mut self) -> Result<St, Error<B::Error>> {
        let ctrl_reg4 = CtrlReg4::read(self)?;
        Ok(St::try_from(ctrl_reg4.st()).unwrap_or_default())
    }

    /// Reboot memory content. Reload the calibration parameters.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of boot in reg CTRL_REG5.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn boot_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg5 = CtrlReg5::read(self)?;
        ctrl_reg5.set_boot(val & 0x01);
        ctrl_reg5.write(self)
    }

    /// Reboot memory content. Reload the calibration parameters.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of boot in reg CTRL_REG5.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn boot_get(&mut self) -> Result<u8, Error<B::Error>> {
        let ctrl_reg5 = CtrlReg5::read(self)?;
        Ok(ctrl_reg5.boot())
    }

    /// Reboots the memory content and waits for the boot procedure
    /// ([`BOOT_TIME_MS`]) on the driver timer.
    pub fn reboot(&mut self) -> Result<(), Error<B::Error>> {
        self.boot_set(PROPERTY_ENABLE)?;
        self.tim.delay_ms(BOOT_TIME_MS);
        Ok(())
    }

    /// Info about device status.
    pub fn status_get(&mut self) -> Result<StatusReg, Error<B::Error>> {
        StatusReg::read(self)
    }

    /// Interrupt generator 1 configuration register.
    ///
    /// The register is written as a whole.
    ///
    /// # Arguments
    ///
    /// * `val`: Register IG1_CFG.
    pub fn int1_gen_conf_set(&mut self, val: Ig1Cfg) -> Result<(), Error<B::Error>> {
        val.write(self)
    }

    /// Interrupt generator 1 configuration register.
    pub fn int1_gen_conf_get(&mut self) -> Result<Ig1Cfg, Error<B::Error>> {
        Ig1Cfg::read(self)
    }

    /// Interrupt generator 1 source register.
    pub fn int1_gen_source_get(&mut self) -> Result<Ig1Source, Error<B::Error>> {
        Ig1Source::read(self)
    }

    /// User-defined threshold value for xl interrupt event on generator 1.
    /// LSb = 16mg@2g / 32mg@4g / 62mg@8g / 186mg@16g
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of ths in reg IG1_THS.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int1_gen_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ig1_ths = Ig1Ths::read(self)?;
        ig1_ths.set_ths(val & 0x7F);
        ig1_ths.write(self)
    }

    /// User-defined threshold value for xl interrupt event on generator 1.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of ths in reg IG1_THS.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int1_gen_threshold_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(Ig1Ths::read(self)?.ths())
    }

    /// The minimum duration (LSb = 1/ODR) of the Interrupt 1 event to be
    /// recognized.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of d in reg IG1_DURATION.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int1_gen_duration_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ig1_duration = Ig1Duration::read(self)?;
        ig1_duration.set_d(val & 0x7F);
        ig1_duration.write(self)
    }

    /// The minimum duration (LSb = 1/ODR) of the Interrupt 1 event to be
    /// recognized.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of d in reg IG1_DURATION.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int1_gen_duration_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(Ig1Duration::read(self)?.d())
    }

    /// Interrupt generator 2 configuration register.
    ///
    /// The register is written as a whole.
    ///
    /// # Arguments
    ///
    /// * `val`: Register IG2_CFG.
    pub fn int2_gen_conf_set(&mut self, val: Ig2Cfg) -> Result<(), Error<B::Error>> {
        val.write(self)
    }

    /// Interrupt generator 2 configuration register.
    pub fn int2_gen_conf_get(&mut self) -> Result<Ig2Cfg, Error<B::Error>> {
        Ig2Cfg::read(self)
    }

    /// Interrupt generator 2 source register.
    pub fn int2_gen_source_get(&mut self) -> Result<Ig2Source, Error<B::Error>> {
        Ig2Source::read(self)
    }

    /// User-defined threshold value for xl interrupt event on generator 2.
    /// LSb = 16mg@2g / 32mg@4g / 62mg@8g / 186mg@16g
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of ths in reg IG2_THS.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int2_gen_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ig2_ths = Ig2Ths::read(self)?;
        ig2_ths.set_ths(val & 0x7F);
        ig2_ths.write(self)
    }

    /// User-defined threshold value for xl interrupt event on generator 2.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of ths in reg IG2_THS.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int2_gen_threshold_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(Ig2Ths::read(self)?.ths())
    }

    /// The minimum duration (LSb = 1/ODR) of the Interrupt 2 event to be
    /// recognized.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of d in reg IG2_DURATION.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int2_gen_duration_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ig2_duration = Ig2Duration::read(self)?;
        ig2_duration.set_d(val & 0x7F);
        ig2_duration.write(self)
    }

    /// The minimum duration (LSb = 1/ODR) of the Interrupt 2 event to be
    /// recognized.
    pub fn int2_gen_duration_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(Ig2Duration::read(self)?.d())
    }

    /// High-pass filter on interrupts/tap generator.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of hp in reg CTRL_REG2.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_int_conf_set(&mut self, val: Hp) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg2 = CtrlReg2::read(self)?;
        ctrl_reg2.set_hp(val as u8);
        ctrl_reg2.write(self)
    }

    /// High-pass filter on interrupts/tap generator.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Hp`: Get the values of hp in reg CTRL_REG2.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn high_pass_int_conf_get(&mut self) -> Result<Hp, Error<B::Error>> {
        let ctrl_reg2 = CtrlReg2::read(self)?;
        Ok(Hp::try_from(ctrl_reg2.hp()).unwrap_or_default())
    }

    /// Int1 pin routing configuration register.
    ///
    /// The register is written as a whole.
    ///
    /// # Arguments
    ///
    /// * `val`: Register CTRL_REG3.
    pub fn pin_int1_config_set(&mut self, val: CtrlReg3) -> Result<(), Error<B::Error>> {
        val.write(self)
    }

    /// Int1 pin routing configuration register.
    pub fn pin_int1_config_get(&mut self) -> Result<CtrlReg3, Error<B::Error>> {
        CtrlReg3::read(self)
    }

    /// 4D enable: 4D detection is enabled on INT2 pin when 6D bit on
    /// IG2_CFG (34h) is set to 1.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of d4d_ig2 in reg CTRL_REG5.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int2_pin_detect_4d_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg5 = CtrlReg5::read(self)?;
        ctrl_reg5.set_d4d_ig2(val & 0x01);
        ctrl_reg5.write(self)
    }

    /// 4D enable: 4D detection is enabled on INT2 pin when 6D bit on
    /// IG2_CFG (34h) is set to 1.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of d4d_ig2 in reg CTRL_REG5.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int2_pin_detect_4d_get(&mut self) -> Result<u8, Error<B::Error>> {
        let ctrl_reg5 = CtrlReg5::read(self)?;
        Ok(ctrl_reg5.d4d_ig2())
    }

    /// Latch interrupt request on IG2_SOURCE (35h) register, with IG2_SOURCE
    /// (35h) register cleared by reading IG2_SOURCE (35h) itself.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of lir_ig2 in reg CTRL_REG5.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int2_pin_notification_mode_set(&mut self, val: LirInt2) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg5 = CtrlReg5::read(self)?;
        ctrl_reg5.set_lir_ig2(val as u8);
        ctrl_reg5.write(self)
    }

    /// Latch interrupt request on IG2_SOURCE (35h) register.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `LirInt2`: Get the values of lir_ig2 in reg CTRL_REG5.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int2_pin_notification_mode_get(&mut self) -> Result<LirInt2, Error<B::Error>> {
        let ctrl_reg5 = CtrlReg5::read(self)?;
        Ok(LirInt2::try_from(ctrl_reg5.lir_ig2()).unwrap_or_default())
    }

    /// 4D enable: 4D detection is enabled on INT1 pin when 6D bit on
    /// IG1_CFG (30h) is set to 1.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of d4d_ig1 in reg CTRL_REG5.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int1_pin_detect_4d_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg5 = CtrlReg5::read(self)?;
        ctrl_reg5.set_d4d_ig1(val & 0x01);
        ctrl_reg5.write(self)
    }

    /// 4D enable: 4D detection is enabled on INT1 pin when 6D bit on
    /// IG1_CFG (30h) is set to 1.
    pub fn int1_pin_detect_4d_get(&mut self) -> Result<u8, Error<B::Error>> {
        let ctrl_reg5 = CtrlReg5::read(self)?;
        Ok(ctrl_reg5.d4d_ig1())
    }

    /// Latch interrupt request on IG1_SOURCE (31h), with IG1_SOURCE (31h)
    /// register cleared by reading IG1_SOURCE (31h) itself.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of lir_ig1 in reg CTRL_REG5.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int1_pin_notification_mode_set(&mut self, val: LirInt1) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg5 = CtrlReg5::read(self)?;
        ctrl_reg5.set_lir_ig1(val as u8);
        ctrl_reg5.write(self)
    }

    /// Latch interrupt request on IG1_SOURCE (31h).
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `LirInt1`: Get the values of lir_ig1 in reg CTRL_REG5.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn int1_pin_notification_mode_get(&mut self) -> Result<LirInt1, Error<B::Error>> {
        let ctrl_reg5 = CtrlReg5::read(self)?;
        Ok(LirInt1::try_from(ctrl_reg5.lir_ig1()).unwrap_or_default())
    }

    /// Int2 pin routing configuration register.
    ///
    /// The register is written as a whole.
    ///
    /// # Arguments
    ///
    /// * `val`: Register CTRL_REG6.
    pub fn pin_int2_config_set(&mut self, val: CtrlReg6) -> Result<(), Error<B::Error>> {
        val.write(self)
    }

    /// Int2 pin routing configuration register.
    pub fn pin_int2_config_get(&mut self) -> Result<CtrlReg6, Error<B::Error>> {
        CtrlReg6::read(self)
    }

    /// FIFO enable.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of fifo_en in reg CTRL_REG5.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg5 = CtrlReg5::read(self)?;
        ctrl_reg5.set_fifo_en(val & 0x01);
        ctrl_reg5.write(self)
    }

    /// FIFO enable.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of fifo_en in reg CTRL_REG5.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_get(&mut self) -> Result<u8, Error<B::Error>> {
        let ctrl_reg5 = CtrlReg5::read(self)?;
        Ok(ctrl_reg5.fifo_en())
    }

    /// FIFO watermark level selection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of fth in reg FIFO_CTRL_REG.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_watermark_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl_reg = FifoCtrlReg::read(self)?;
        fifo_ctrl_reg.set_fth(val & 0x1F);
        fifo_ctrl_reg.write(self)
    }

    /// FIFO watermark level selection.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of fth in reg FIFO_CTRL_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_watermark_get(&mut self) -> Result<u8, Error<B::Error>> {
        let fifo_ctrl_reg = FifoCtrlReg::read(self)?;
        Ok(fifo_ctrl_reg.fth())
    }

    /// Trigger FIFO selection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of tr in reg FIFO_CTRL_REG.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_trigger_event_set(&mut self, val: Tr) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl_reg = FifoCtrlReg::read(self)?;
        fifo_ctrl_reg.set_tr(val as u8);
        fifo_ctrl_reg.write(self)
    }

    /// Trigger FIFO selection.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Tr`: Get the values of tr in reg FIFO_CTRL_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_trigger_event_get(&mut self) -> Result<Tr, Error<B::Error>> {
        let fifo_ctrl_reg = FifoCtrlReg::read(self)?;
        Ok(Tr::try_from(fifo_ctrl_reg.tr()).unwrap_or_default())
    }

    /// FIFO mode selection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of fm in reg FIFO_CTRL_REG.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_mode_set(&mut self, val: Fm) -> Result<(), Error<B::Error>> {
        let mut fifo_ctrl_reg = FifoCtrlReg::read(self)?;
        fifo_ctrl_reg.set_fm(val as u8);
        fifo_ctrl_reg.write(self)
    }

    /// FIFO mode selection.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Fm`: Get the values of fm in reg FIFO_CTRL_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_mode_get(&mut self) -> Result<Fm, Error<B::Error>> {
        let fifo_ctrl_reg = FifoCtrlReg::read(self)?;
        Ok(Fm::try_from(fifo_ctrl_reg.fm()).unwrap_or_default())
    }

    /// FIFO status register.
    pub fn fifo_status_get(&mut self) -> Result<FifoSrcReg, Error<B::Error>> {
        FifoSrcReg::read(self)
    }

    /// FIFO stored data level.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of fss in reg FIFO_SRC_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_data_level_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.fifo_status_get()?.fss())
    }

    /// Empty FIFO status flag.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of empty in reg FIFO_SRC_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_empty_flag_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.fifo_status_get()?.empty())
    }

    /// FIFO overrun status flag.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of ovrn_fifo in reg FIFO_SRC_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_ovr_flag_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.fifo_status_get()?.ovrn_fifo())
    }

    /// FIFO watermark status.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of wtm in reg FIFO_SRC_REG.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn fifo_fth_flag_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(self.fifo_status_get()?.wtm())
    }

    /// Tap/Double Tap generator configuration register.
    ///
    /// The register is written as a whole.
    ///
    /// # Arguments
    ///
    /// * `val`: Register CLICK_CFG.
    pub fn tap_conf_set(&mut self, val: ClickCfg) -> Result<(), Error<B::Error>> {
        val.write(self)
    }

    /// Tap/Double Tap generator configuration register.
    pub fn tap_conf_get(&mut self) -> Result<ClickCfg, Error<B::Error>> {
        ClickCfg::read(self)
    }

    /// Tap/Double Tap generator source register.
    pub fn tap_source_get(&mut self) -> Result<ClickSrc, Error<B::Error>> {
        ClickSrc::read(self)
    }

    /// User-defined threshold value for Tap/Double Tap event.
    /// 1 LSB = full scale/128
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of ths in reg CLICK_THS.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn tap_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut click_ths = ClickThs::read(self)?;
        click_ths.set_ths(val & 0x7F);
        click_ths.write(self)
    }

    /// User-defined threshold value for Tap/Double Tap event.
    /// 1 LSB = full scale/128
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of ths in reg CLICK_THS.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn tap_threshold_get(&mut self) -> Result<u8, Error<B::Error>> {
        let click_ths = ClickThs::read(self)?;
        Ok(click_ths.ths())
    }

    /// If the LIR_Click bit is not set, the interrupt is kept high for the
    /// duration of the latency window. If the LIR_Click bit is set, the
    /// interrupt is kept high until the CLICK_SRC (39h) register is read.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of lir in reg CLICK_THS.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn tap_notification_mode_set(&mut self, val: Lir) -> Result<(), Error<B::Error>> {
        let mut click_ths = ClickThs::read(self)?;
        click_ths.set_lir(val as u8);
        click_ths.write(self)
    }

    /// If the LIR_Click bit is not set, the interrupt is kept high for the
    /// duration of the latency window. If the LIR_Click bit is set, the
    /// interrupt is kept high until the CLICK_SRC (39h) register is read.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Lir`: Get the values of lir in reg CLICK_THS.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn tap_notification_mode_get(&mut self) -> Result<Lir, Error<B::Error>> {
        let click_ths = ClickThs::read(self)?;
        Ok(Lir::try_from(click_ths.lir()).unwrap_or_default())
    }

    /// The maximum time (1 LSB = 1/ODR) interval that can elapse between
    /// the start of the click-detection procedure and when the acceleration
    /// falls back below the threshold.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of tli in reg TIME_LIMIT.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn shock_dur_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut time_limit = TimeLimit::read(self)?;
        time_limit.set_tli(val & 0x7F);
        time_limit.write(self)
    }

    /// The maximum time (1 LSB = 1/ODR) interval that can elapse between
    /// the start of the click-detection procedure and when the acceleration
    /// falls back below the threshold.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of tli in reg TIME_LIMIT.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn shock_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(TimeLimit::read(self)?.tli())
    }

    /// The time (1 LSB = 1/ODR) interval that starts after the first click
    /// detection where the click-detection procedure is disabled, in cases
    /// where the device is configured for double-click detection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of tla in reg TIME_LATENCY.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn quiet_dur_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut time_latency = TimeLatency::read(self)?;
        time_latency.set_tla(val);
        time_latency.write(self)
    }

    /// The time (1 LSB = 1/ODR) interval that starts after the first click
    /// detection where the click-detection procedure is disabled.
    pub fn quiet_dur_get(&mut self) -> Result<u8, Error<B::Error>> {
        Ok(TimeLatency::read(self)?.tla())
    }

    /// The maximum interval of time (1 LSB = 1/ODR) that can elapse after
    /// the end of the latency interval in which the click-detection
    /// procedure can start, in cases where the device is configured for
    /// double-click detection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of tw in reg TIME_WINDOW.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn double_tap_timeout_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut time_window = TimeWindow::read(self)?;
        time_window.set_tw(val);
        time_window.write(self)
    }

    /// The maximum interval of time (1 LSB = 1/ODR) that can elapse after
    /// the end of the latency interval in which the click-detection
    /// procedure can start.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of tw in reg TIME_WINDOW.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn double_tap_timeout_get(&mut self) -> Result<u8, Error<B::Error>> {
        let time_window = TimeWindow::read(self)?;
        Ok(time_window.tw())
    }

    /// Sleep-to-wake, return-to-sleep activation threshold in low-power
    /// mode.
    /// 1 LSb = 16mg@2g / 32mg@4g / 62mg@8g / 186mg@16g
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of acth in reg ACT_THS.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn act_threshold_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut act_ths = ActThs::read(self)?;
        act_ths.set_acth(val & 0x7F);
        act_ths.write(self)
    }

    /// Sleep-to-wake, return-to-sleep activation threshold in low-power
    /// mode.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `u8`: Get the values of acth in reg ACT_THS.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn act_threshold_get(&mut self) -> Result<u8, Error<B::Error>> {
        let act_ths = ActThs::read(self)?;
        Ok(act_ths.acth())
    }

    /// Sleep-to-wake, return-to-sleep duration = (8*1[LSb]+1)/ODR
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of actd in reg ACT_DUR.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn act_timeout_set(&mut self, val: u8) -> Result<(), Error<B::Error>> {
        let mut act_dur = ActDur::read(self)?;
        act_dur.set_actd(val);
        act_dur.write(self)
    }

    /// Sleep-to-wake, return-to-sleep duration = (8*1[LSb]+1)/ODR
    pub fn act_timeout_get(&mut self) -> Result<u8, Error<B::Error>> {
        let act_dur = ActDur::read(self)?;
        Ok(act_dur.actd())
    }

    /// SPI Serial Interface Mode selection.
    ///
    /// # Arguments
    ///
    /// * `val`: Change the values of sim in reg CTRL_REG4.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `()`
    ///     * `Err`: Returns an error if the operation fails.
    pub fn spi_mode_set(&mut self, val: Sim) -> Result<(), Error<B::Error>> {
        let mut ctrl_reg4 = CtrlReg4::read(self)?;
        ctrl_reg4.set_sim(val as u8);
        ctrl_reg4.write(self)
    }

    /// SPI Serial Interface Mode selection.
    ///
    /// # Returns
    ///
    /// * `Result`
    ///     * `Sim`: Get the values of sim in reg CTRL_REG4.
    ///     * `Err`: Returns an error if the operation fails.
    pub fn spi_mode_get(&mut self) -> Result<Sim, Error<B::Error>> {
        let ctrl_reg4 = CtrlReg4::read(self)?;
        Ok(Sim::try_from(ctrl_reg4.sim()).unwrap_or_default())
    }
}

/// @brief  Convert raw data from full-scale 2g to milligrams.
///
/// # Arguments
///
/// * `lsb`: Raw data in LSB.
pub fn from_fs2_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 15.6
}

/// @brief  Convert raw data from full-scale 4g to milligrams.
///
/// # Arguments
///
/// * `lsb`: Raw data in LSB.
pub fn from_fs4_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 31.2
}

/// @brief  Convert raw data from full-scale 8g to milligrams.
///
/// # Arguments
///
/// * `lsb`: Raw data in LSB.
pub fn from_fs8_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 62.5
}

/// @brief  Convert raw data from full-scale 16g to milligrams.
///
/// # Arguments
///
/// * `lsb`: Raw data in LSB.
pub fn from_fs16_to_mg(lsb: i16) -> f32 {
    (lsb as f32) * 187.5
}

/// @brief  Convert LSB to Celsius.
///
/// The temperature sensor measures variations around 25 degC with a
/// 1 LSB/degC slope.
///
/// # Arguments
///
/// * `lsb`: The value in LSB to convert.
///
/// # Returns
///
/// * `f32`: The temperature in Celsius.
pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    ((lsb as f32) * 1.0) + 25.0
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2CAddress {
    /// I²C address when the SA0 pin is low.
    I2cAddL = 0x18,

    /// I²C address when the SA0 pin is high.
    I2cAddH = 0x19,
}

///
/// LIS3DE Device ID.
///
pub const LIS3DE_ID: u8 = 0x33;

pub const PROPERTY_ENABLE: u8 = 1;
pub const PROPERTY_DISABLE: u8 = 0;
