pub use crate::register::main::*;
pub use crate::{Error, I2CAddress, LIS3DE_ID, PROPERTY_DISABLE, PROPERTY_ENABLE};
