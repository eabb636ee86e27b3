//! Bus failures surface as `Error::Bus` and abort the operation

use crate::common::{Access, create_mock_sensor};
use lis3de_rs::prelude::*;

#[test]
fn test_failed_read_skips_the_write() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.fail_read(Reg::CtrlReg4);

    let result = sensor.full_scale_set(Fs::_8g);

    assert!(matches!(result, Err(Error::Bus(_))));
    assert!(mock.writes().is_empty());
}

#[test]
fn test_failed_write_is_reported() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.fail_write(Reg::CtrlReg1);

    let result = sensor.data_rate_set(Odr::_400hz);

    assert!(matches!(result, Err(Error::Bus(_))));
    assert_eq!(mock.register(Reg::CtrlReg1), 0x07);
}

#[test]
fn test_getter_propagates_read_failure() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.fail_read(Reg::WhoAmI);

    assert!(matches!(sensor.device_id_get(), Err(Error::Bus(_))));
    assert!(matches!(sensor.temperature_raw_get(), Ok(0)));
}

#[test]
fn test_adc_enable_sets_block_data_update_first() {
    let (mut sensor, mock) = create_mock_sensor();

    sensor.aux_adc_set(TempEn::AuxOnTemperature).unwrap();

    let bdu = mock.first_write_index(Reg::CtrlReg4).unwrap();
    let temp_cfg = mock.first_write_index(Reg::TempCfgReg).unwrap();
    assert!(bdu < temp_cfg);
    assert_eq!(mock.register(Reg::CtrlReg4) & 0x80, 0x80);
    assert_eq!(mock.register(Reg::TempCfgReg), 0xC0);
}

#[test]
fn test_adc_stays_off_when_block_data_update_fails() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.fail_write(Reg::CtrlReg4);

    let result = sensor.aux_adc_set(TempEn::AuxOnPads);

    assert!(matches!(result, Err(Error::Bus(_))));
    assert_eq!(mock.first_write_index(Reg::TempCfgReg), None);
    assert_eq!(mock.register(Reg::TempCfgReg), 0x00);
}

#[test]
fn test_adc_disable_leaves_block_data_update_alone() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.set_register(Reg::TempCfgReg, 0xC0);

    sensor.aux_adc_set(TempEn::AuxDisable).unwrap();

    let ctrl4 = Reg::CtrlReg4 as u8;
    assert!(!mock.accesses().iter().any(|access| match access {
        Access::Read { address, .. } | Access::Write { address, .. } => *address == ctrl4,
    }));
    assert_eq!(mock.register(Reg::TempCfgReg), 0x00);
}

#[test]
fn test_acceleration_fill_keeps_axes_read_before_failure() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.set_register(Reg::OutX, 0xFE);
    mock.set_register(Reg::OutZ, 0x10);
    mock.fail_read(Reg::OutY);

    let mut buff = [0x1111i16; 3];
    let result = sensor.acceleration_raw_fill(&mut buff);

    assert!(matches!(result, Err(Error::Bus(_))));
    assert_eq!(buff[0], -2);
    assert_eq!(buff[1], 0x1111);
    assert_eq!(buff[2], 0x1111);
}

#[test]
fn test_acceleration_get_fails_as_a_whole() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.fail_read(Reg::OutZ);

    assert!(sensor.acceleration_raw_get().is_err());
}
