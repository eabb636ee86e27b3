use crate::BusOperation;
use crate::DelayNs;
use crate::Error;
use crate::Lis3de;
use bitfield_struct::bitfield;
use derive_more::TryFrom;

use st_mem_bank_macro::register;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
    /// Auxiliary status register.
    ///
    /// New-data and overrun flags of the three auxiliary ADC channels.
    StatusRegAux = 0x07,

    /// ADC channel 1 output register (low byte).
    OutAdc1L = 0x08,

    /// ADC channel 1 output register (high byte).
    ///
    /// Also carries the 8-bit temperature sample when the sensor is
    /// routed to the auxiliary ADC.
    OutAdc1H = 0x09,

    /// ADC channel 2 output register (low byte).
    OutAdc2L = 0x0A,

    /// ADC channel 2 output register (high byte).
    OutAdc2H = 0x0B,

    /// ADC channel 3 output register (low byte).
    OutAdc3L = 0x0C,

    /// ADC channel 3 output register (high byte).
    OutAdc3H = 0x0D,

    /// Who Am I register.
    ///
    /// Read-only register containing the device ID. Default value: `0x33`.
    WhoAmI = 0x0F,

    /// Temperature sensor and auxiliary ADC configuration register.
    TempCfgReg = 0x1F,

    /// Control register 1.
    ///
    /// Output data rate, low-power mode and axis enables.
    CtrlReg1 = 0x20,

    /// Control register 2.
    ///
    /// High-pass filter mode, cutoff and routing.
    CtrlReg2 = 0x21,

    /// Control register 3.
    ///
    /// Events routed to the INT1 pin.
    CtrlReg3 = 0x22,

    /// Control register 4.
    ///
    /// Block data update, full scale, self-test and SPI mode.
    CtrlReg4 = 0x23,

    /// Control register 5.
    ///
    /// Reboot, FIFO enable, latching and 4D detection of the generators.
    CtrlReg5 = 0x24,

    /// Control register 6.
    ///
    /// Events routed to the INT2 pin and interrupt polarity.
    CtrlReg6 = 0x25,

    /// Reference value for interrupt generation.
    Reference = 0x26,

    /// Status register.
    ///
    /// Acceleration data-ready and overrun flags.
    StatusReg = 0x27,

    /// X-axis acceleration output register.
    OutX = 0x29,

    /// Y-axis acceleration output register.
    OutY = 0x2B,

    /// Z-axis acceleration output register.
    OutZ = 0x2D,

    /// FIFO control register.
    ///
    /// Watermark level, trigger selection and FIFO mode.
    FifoCtrlReg = 0x2E,

    /// FIFO source register.
    ///
    /// Stored samples count and FIFO status flags.
    FifoSrcReg = 0x2F,

    /// Interrupt generator 1 configuration register.
    Ig1Cfg = 0x30,

    /// Interrupt generator 1 source register.
    Ig1Source = 0x31,

    /// Interrupt generator 1 threshold register.
    Ig1Ths = 0x32,

    /// Interrupt generator 1 duration register.
    Ig1Duration = 0x33,

    /// Interrupt generator 2 configuration register.
    Ig2Cfg = 0x34,

    /// Interrupt generator 2 source register.
    Ig2Source = 0x35,

    /// Interrupt generator 2 threshold register.
    Ig2Ths = 0x36,

    /// Interrupt generator 2 duration register.
    Ig2Duration = 0x37,

    /// Tap (click) configuration register.
    ClickCfg = 0x38,

    /// Tap (click) source register.
    ClickSrc = 0x39,

    /// Tap (click) threshold register.
    ClickThs = 0x3A,

    /// Tap time limit register.
    TimeLimit = 0x3B,

    /// Tap time latency register.
    TimeLatency = 0x3C,

    /// Double-tap time window register.
    TimeWindow = 0x3D,

    /// Sleep-to-wake activation threshold register.
    ActThs = 0x3E,

    /// Sleep-to-wake, return-to-sleep duration register.
    ActDur = 0x3F,
}

/// Auxiliary Status Register (R).
///
/// The `STATUS_REG_AUX` register reports new-data and overrun conditions of
/// the three auxiliary ADC channels.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::StatusRegAux, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct StatusRegAux {
    #[bits(1, access = RO)]
    pub da1: u8,
    #[bits(1, access = RO)]
    pub da2: u8,
    #[bits(1, access = RO)]
    pub da3: u8,
    #[bits(1, access = RO)]
    pub da321: u8,
    #[bits(1, access = RO)]
    pub or1: u8,
    #[bits(1, access = RO)]
    pub or2: u8,
    #[bits(1, access = RO)]
    pub or3: u8,
    #[bits(1, access = RO)]
    pub or321: u8,
}

/// ADC channel 1 high byte (R).
///
/// Holds the temperature sample when the temperature sensor is routed to
/// the auxiliary ADC.
#[register(address = Reg::OutAdc1H, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct OutAdc1H {
    #[bits(8, access = RO)]
    pub data: u8,
}

/// Who Am I (R).
///
/// It's value is fixed at 0x33. Contains the device id.
#[register(address = Reg::WhoAmI, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct WhoAmI {
    #[bits(8, access = RO, default = 0x33)]
    pub id: u8,
}

/// Temperature Configuration Register (R/W).
///
/// The `TEMP_CFG_REG` register powers the auxiliary ADC and routes the
/// temperature sensor to it.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::TempCfgReg, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TempCfgReg {
    #[bits(6, access = RO, default = 0)]
    not_used_01: u8,

    #[bits(1, default = 0)]
    pub temp_en: u8,

    #[bits(1, default = 0)]
    pub adc_pd: u8,
}

/// Control Register 1 (R/W).
///
/// The `CTRL_REG1` register selects the output data rate and the
/// operating mode, and enables the individual axes.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::CtrlReg1, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CtrlReg1 {
    #[bits(1, default = 1)]
    pub xen: u8,

    #[bits(1, default = 1)]
    pub yen: u8,

    #[bits(1, default = 1)]
    pub zen: u8,

    #[bits(1, default = 0)]
    pub lpen: u8,

    #[bits(4, default = 0)]
    pub odr: u8,
}

/// Control Register 2 (R/W).
///
/// The `CTRL_REG2` register configures the high-pass filter.
/// `hp` groups the HPCLICK, HP_IA2 and HP_IA1 bits.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::CtrlReg2, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CtrlReg2 {
    #[bits(3, default = 0)]
    pub hp: u8,

    #[bits(1, default = 0)]
    pub fds: u8,

    #[bits(2, default = 0)]
    pub hpcf: u8,

    #[bits(2, default = 0)]
    pub hpm: u8,
}

/// Control Register 3 (R/W).
///
/// The `CTRL_REG3` register routes events to the INT1 pin.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::CtrlReg3, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CtrlReg3 {
    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,

    #[bits(1, default = 0)]
    pub i1_overrun: u8,

    #[bits(1, default = 0)]
    pub i1_wtm: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_02: u8,

    #[bits(1, default = 0)]
    pub i1_zyxda: u8,

    #[bits(1, default = 0)]
    pub i1_ia2: u8,

    #[bits(1, default = 0)]
    pub i1_ia1: u8,

    #[bits(1, default = 0)]
    pub i1_click: u8,
}

/// Control Register 4 (R/W).
///
/// The `CTRL_REG4` register selects the full scale, the self-test mode,
/// the SPI wiring and the block data update policy.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::CtrlReg4, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CtrlReg4 {
    #[bits(1, default = 0)]
    pub sim: u8,

    #[bits(2, default = 0)]
    pub st: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,

    #[bits(2, default = 0)]
    pub fs: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_02: u8,

    #[bits(1, default = 0)]
    pub bdu: u8,
}

/// Control Register 5 (R/W).
///
/// The `CTRL_REG5` register holds the reboot command, the FIFO enable, and
/// the latch/4D options of the two interrupt generators.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::CtrlReg5, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CtrlReg5 {
    #[bits(1, default = 0)]
    pub d4d_ig2: u8,

    #[bits(1, default = 0)]
    pub lir_ig2: u8,

    #[bits(1, default = 0)]
    pub d4d_ig1: u8,

    #[bits(1, default = 0)]
    pub lir_ig1: u8,

    #[bits(2, access = RO, default = 0)]
    not_used_01: u8,

    #[bits(1, default = 0)]
    pub fifo_en: u8,

    #[bits(1, default = 0)]
    pub boot: u8,
}

/// Control Register 6 (R/W).
///
/// The `CTRL_REG6` register routes events to the INT2 pin.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::CtrlReg6, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct CtrlReg6 {
    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,

    #[bits(1, default = 0)]
    pub int_polarity: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_02: u8,

    #[bits(1, default = 0)]
    pub i2_act: u8,

    #[bits(1, default = 0)]
    pub i2_boot: u8,

    #[bits(1, default = 0)]
    pub i2_ia2: u8,

    #[bits(1, default = 0)]
    pub i2_ia1: u8,

    #[bits(1, default = 0)]
    pub i2_click: u8,
}

/// Reference Register (R/W).
///
/// Reference value for interrupt generation.
#[register(address = Reg::Reference, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Reference {
    #[bits(8, default = 0)]
    pub reference: u8,
}

/// Status Register (R).
///
/// The `STATUS_REG` register provides the acceleration data-ready and
/// overrun flags, per axis and for the full set.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::StatusReg, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct StatusReg {
    #[bits(1, access = RO)]
    pub xda: u8,
    #[bits(1, access = RO)]
    pub yda: u8,
    #[bits(1, access = RO)]
    pub zda: u8,
    #[bits(1, access = RO)]
    pub zyxda: u8,
    #[bits(1, access = RO)]
    pub xor: u8,
    #[bits(1, access = RO)]
    pub yor: u8,
    #[bits(1, access = RO)]
    pub zor: u8,
    #[bits(1, access = RO)]
    pub zyxor: u8,
}

/// X-axis acceleration output (R).
#[register(address = Reg::OutX, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct OutX {
    #[bits(8, access = RO)]
    pub data: u8,
}

/// Y-axis acceleration output (R).
#[register(address = Reg::OutY, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct OutY {
    #[bits(8, access = RO)]
    pub data: u8,
}

/// Z-axis acceleration output (R).
#[register(address = Reg::OutZ, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct OutZ {
    #[bits(8, access = RO)]
    pub data: u8,
}

/// FIFO Control Register (R/W).
///
/// The `FIFO_CTRL_REG` register sets the watermark level, the trigger
/// source used in stream-to-FIFO mode and the FIFO mode.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::FifoCtrlReg, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoCtrlReg {
    #[bits(5, default = 0)]
    pub fth: u8,

    #[bits(1, default = 0)]
    pub tr: u8,

    #[bits(2, default = 0)]
    pub fm: u8,
}

/// FIFO Source Register (R).
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::FifoSrcReg, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct FifoSrcReg {
    #[bits(5, access = RO)]
    pub fss: u8,
    #[bits(1, access = RO)]
    pub empty: u8,
    #[bits(1, access = RO)]
    pub ovrn_fifo: u8,
    #[bits(1, access = RO)]
    pub wtm: u8,
}

/// Interrupt Generator 1 Configuration Register (R/W).
///
/// The `IG1_CFG` register enables the per-axis low/high events of the first
/// interrupt generator and selects how they combine (`aoi`, `d6d`).
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::Ig1Cfg, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig1Cfg {
    #[bits(1, default = 0)]
    pub xlie: u8,
    #[bits(1, default = 0)]
    pub xhie: u8,
    #[bits(1, default = 0)]
    pub ylie: u8,
    #[bits(1, default = 0)]
    pub yhie: u8,
    #[bits(1, default = 0)]
    pub zlie: u8,
    #[bits(1, default = 0)]
    pub zhie: u8,
    #[bits(1, default = 0)]
    pub d6d: u8,
    #[bits(1, default = 0)]
    pub aoi: u8,
}

/// Interrupt Generator 1 Source Register (R).
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::Ig1Source, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig1Source {
    #[bits(1, access = RO)]
    pub xl: u8,
    #[bits(1, access = RO)]
    pub xh: u8,
    #[bits(1, access = RO)]
    pub yl: u8,
    #[bits(1, access = RO)]
    pub yh: u8,
    #[bits(1, access = RO)]
    pub zl: u8,
    #[bits(1, access = RO)]
    pub zh: u8,
    #[bits(1, access = RO)]
    pub ia: u8,
    #[bits(1, access = RO)]
    not_used_01: u8,
}

/// Interrupt Generator 1 Threshold Register (R/W).
///
/// 1 LSB = 16 mg @ 2g, 32 mg @ 4g, 62 mg @ 8g, 186 mg @ 16g.
#[register(address = Reg::Ig1Ths, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig1Ths {
    #[bits(7, default = 0)]
    pub ths: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,
}

/// Interrupt Generator 1 Duration Register (R/W).
///
/// Minimum event duration, 1 LSB = 1/ODR.
#[register(address = Reg::Ig1Duration, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig1Duration {
    #[bits(7, default = 0)]
    pub d: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,
}

/// Interrupt Generator 2 Configuration Register (R/W).
///
/// Same layout as `IG1_CFG`, applied to the second interrupt generator.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::Ig2Cfg, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig2Cfg {
    #[bits(1, default = 0)]
    pub xlie: u8,
    #[bits(1, default = 0)]
    pub xhie: u8,
    #[bits(1, default = 0)]
    pub ylie: u8,
    #[bits(1, default = 0)]
    pub yhie: u8,
    #[bits(1, default = 0)]
    pub zlie: u8,
    #[bits(1, default = 0)]
    pub zhie: u8,
    #[bits(1, default = 0)]
    pub d6d: u8,
    #[bits(1, default = 0)]
    pub aoi: u8,
}

/// Interrupt Generator 2 Source Register (R).
#[register(address = Reg::Ig2Source, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig2Source {
    #[bits(1, access = RO)]
    pub xl: u8,
    #[bits(1, access = RO)]
    pub xh: u8,
    #[bits(1, access = RO)]
    pub yl: u8,
    #[bits(1, access = RO)]
    pub yh: u8,
    #[bits(1, access = RO)]
    pub zl: u8,
    #[bits(1, access = RO)]
    pub zh: u8,
    #[bits(1, access = RO)]
    pub ia: u8,
    #[bits(1, access = RO)]
    not_used_01: u8,
}

/// Interrupt Generator 2 Threshold Register (R/W).
#[register(address = Reg::Ig2Ths, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig2Ths {
    #[bits(7, default = 0)]
    pub ths: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,
}

/// Interrupt Generator 2 Duration Register (R/W).
#[register(address = Reg::Ig2Duration, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct Ig2Duration {
    #[bits(7, default = 0)]
    pub d: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,
}

/// Click Configuration Register (R/W).
///
/// The `CLICK_CFG` register enables single (`xs`, `ys`, `zs`) and double
/// (`xd`, `yd`, `zd`) tap recognition per axis.
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::ClickCfg, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct ClickCfg {
    #[bits(1, default = 0)]
    pub xs: u8,
    #[bits(1, default = 0)]
    pub xd: u8,
    #[bits(1, default = 0)]
    pub ys: u8,
    #[bits(1, default = 0)]
    pub yd: u8,
    #[bits(1, default = 0)]
    pub zs: u8,
    #[bits(1, default = 0)]
    pub zd: u8,
    #[bits(2, access = RO, default = 0)]
    not_used_01: u8,
}

/// Click Source Register (R).
///
/// The bit order for this struct can be configured using the `bit_order_msb` feature:
/// * `Msb`: Most significant bit first.
/// * `Lsb`: Least significant bit first (default).
#[register(address = Reg::ClickSrc, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct ClickSrc {
    #[bits(1, access = RO)]
    pub x: u8,
    #[bits(1, access = RO)]
    pub y: u8,
    #[bits(1, access = RO)]
    pub z: u8,
    #[bits(1, access = RO)]
    pub sign: u8,
    #[bits(1, access = RO)]
    pub sclick: u8,
    #[bits(1, access = RO)]
    pub dclick: u8,
    #[bits(1, access = RO)]
    pub ia: u8,
    #[bits(1, access = RO)]
    not_used_01: u8,
}

/// Click Threshold Register (R/W).
///
/// Tap threshold (1 LSB = full scale / 128) and the tap interrupt latch.
#[register(address = Reg::ClickThs, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct ClickThs {
    #[bits(7, default = 0)]
    pub ths: u8,

    #[bits(1, default = 0)]
    pub lir: u8,
}

/// Time Limit Register (R/W).
///
/// Maximum shock duration, 1 LSB = 1/ODR.
#[register(address = Reg::TimeLimit, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TimeLimit {
    #[bits(7, default = 0)]
    pub tli: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,
}

/// Time Latency Register (R/W).
#[register(address = Reg::TimeLatency, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TimeLatency {
    #[bits(8, default = 0)]
    pub tla: u8,
}

/// Time Window Register (R/W).
#[register(address = Reg::TimeWindow, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct TimeWindow {
    #[bits(8, default = 0)]
    pub tw: u8,
}

/// Activation Threshold Register (R/W).
///
/// Sleep-to-wake threshold in low-power mode,
/// 1 LSB = 16 mg @ 2g, 32 mg @ 4g, 62 mg @ 8g, 186 mg @ 16g.
#[register(address = Reg::ActThs, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct ActThs {
    #[bits(7, default = 0)]
    pub acth: u8,

    #[bits(1, access = RO, default = 0)]
    not_used_01: u8,
}

/// Activation Duration Register (R/W).
///
/// Return-to-sleep duration, (8 * LSB + 1) / ODR.
#[register(address = Reg::ActDur, access_type = Lis3de, generics = 2)]
#[cfg_attr(feature = "bit_order_msb", bitfield(u8, order = Msb))]
#[cfg_attr(not(feature = "bit_order_msb"), bitfield(u8, order = Lsb))]
pub struct ActDur {
    #[bits(8, default = 0)]
    pub actd: u8,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempEn {
    #[default]
    AuxDisable = 0,
    AuxOnTemperature = 3,
    AuxOnPads = 1,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OpMd {
    #[default]
    Nm = 0,
    Lp = 1,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Odr {
    #[default]
    PowerDown = 0x00,
    _1hz = 0x01,
    _10hz = 0x02,
    _25hz = 0x03,
    _50hz = 0x04,
    _100hz = 0x05,
    _200hz = 0x06,
    _400hz = 0x07,
    _1k6hz = 0x08,
    _5k376hzLp1k344hzNm = 0x09,
}

/// High-pass cutoff selection.
///
/// ```text
/// HPCF\ft     @1Hz    @10Hz  @25Hz  @50Hz @100Hz @200Hz @400Hz @1kHz6 @5kHz
/// Aggressive  0.02Hz  0.2Hz  0.5Hz  1Hz   2Hz    4Hz    8Hz    32Hz   100Hz
/// Strong      0.008Hz 0.08Hz 0.2Hz  0.5Hz 1Hz    2Hz    4Hz    16Hz   50Hz
/// Medium      0.004Hz 0.04Hz 0.1Hz  0.2Hz 0.5Hz  1Hz    2Hz    8Hz    25Hz
/// Light       0.002Hz 0.02Hz 0.05Hz 0.1Hz 0.2Hz  0.5Hz  1Hz    4Hz    12Hz
/// ```
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hpcf {
    Aggressive = 0,
    Strong = 1,
    Medium = 2,
    #[default]
    Light = 3,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hpm {
    #[default]
    NormalWithRst = 0,
    ReferenceMode = 1,
    Normal = 2,
    AutorstOnInt = 3,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fs {
    #[default]
    _2g = 0,
    _4g = 1,
    _8g = 2,
    _16g = 3,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum St {
    #[default]
    Disable = 0,
    Positive = 1,
    Negative = 2,
}

/// Routing of the high-pass filtered data to the interrupt and tap
/// generators (HPCLICK | HP_IA2 | HP_IA1).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hp {
    #[default]
    DiscFromIntGenerator = 0,
    OnInt1Gen = 1,
    OnInt2Gen = 2,
    OnTapGen = 4,
    OnInt1Int2Gen = 3,
    OnInt1TapGen = 5,
    OnInt2TapGen = 6,
    OnInt1Int2TapGen = 7,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LirInt1 {
    #[default]
    Int1Pulsed = 0,
    Int1Latched = 1,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LirInt2 {
    #[default]
    Int2Pulsed = 0,
    Int2Latched = 1,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tr {
    #[default]
    Int1Gen = 0,
    Int2Gen = 1,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fm {
    #[default]
    BypassMode = 0,
    FifoMode = 1,
    DynamicStreamMode = 2,
    StreamToFifoMode = 3,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lir {
    #[default]
    TapPulsed = 0,
    TapLatched = 1,
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Default, TryFrom, Debug)]
#[try_from(repr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sim {
    #[default]
    Spi4Wire = 0,
    Spi3Wire = 1,
}
