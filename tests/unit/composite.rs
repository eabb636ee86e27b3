//! Multi-register reads, flag extraction and whole-register writes

use crate::common::{Access, create_mock_sensor};
use lis3de_rs::prelude::*;
use lis3de_rs::{from_fs2_to_mg, from_lsb_to_celsius};

#[test]
fn test_adc_channels_assembled_little_endian() {
    let (mut sensor, mock) = create_mock_sensor();
    for (reg, value) in [
        (Reg::OutAdc1L, 0x01),
        (Reg::OutAdc1H, 0x02),
        (Reg::OutAdc2L, 0x03),
        (Reg::OutAdc2H, 0x04),
        (Reg::OutAdc3L, 0x05),
        (Reg::OutAdc3H, 0x06),
    ] {
        mock.set_register(reg, value);
    }

    assert_eq!(sensor.adc_raw_get().unwrap(), [0x0201, 0x0403, 0x0605]);

    let addresses: Vec<u8> = mock
        .accesses()
        .into_iter()
        .map(|access| match access {
            Access::Read { address, .. } | Access::Write { address, .. } => address,
        })
        .collect();
    assert_eq!(addresses, vec![0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D]);
}

#[test]
fn test_adc_negative_channel() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.set_register(Reg::OutAdc2L, 0x00);
    mock.set_register(Reg::OutAdc2H, 0xFF);

    assert_eq!(sensor.adc_raw_get().unwrap()[1], -256);
}

#[test]
fn test_acceleration_is_sign_extended() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.set_register(Reg::OutX, 0xFF);
    mock.set_register(Reg::OutY, 0x80);
    mock.set_register(Reg::OutZ, 0x40);

    let raw = sensor.acceleration_raw_get().unwrap();
    assert_eq!(raw, [-1, -128, 64]);
    assert_eq!(from_fs2_to_mg(raw[2]), 998.4);
}

#[test]
fn test_temperature_reading() {
    let (mut sensor, mock) = create_mock_sensor();

    mock.set_register(Reg::OutAdc1H, 0x05);
    let raw = sensor.temperature_raw_get().unwrap();
    assert_eq!(raw, 5);
    assert_eq!(from_lsb_to_celsius(raw), 30.0);

    mock.set_register(Reg::OutAdc1H, 0xF6);
    let raw = sensor.temperature_raw_get().unwrap();
    assert_eq!(raw, -10);
    assert_eq!(from_lsb_to_celsius(raw), 15.0);
}

#[test]
fn test_device_id() {
    let (mut sensor, _mock) = create_mock_sensor();
    assert_eq!(sensor.device_id_get().unwrap(), LIS3DE_ID);
}

#[test]
fn test_status_flags() {
    let (mut sensor, mock) = create_mock_sensor();

    mock.set_register(Reg::StatusReg, 0x08);
    assert_eq!(sensor.xl_data_ready_get().unwrap(), 1);
    assert_eq!(sensor.xl_data_ovr_get().unwrap(), 0);

    mock.set_register(Reg::StatusReg, 0x80);
    assert_eq!(sensor.xl_data_ready_get().unwrap(), 0);
    assert_eq!(sensor.xl_data_ovr_get().unwrap(), 1);

    mock.set_register(Reg::StatusRegAux, 0x44);
    assert_eq!(sensor.temp_data_ready_get().unwrap(), 1);
    assert_eq!(sensor.temp_data_ovr_get().unwrap(), 1);
    assert_eq!(sensor.temp_status_reg_get().unwrap().into_bits(), 0x44);
}

#[test]
fn test_fifo_status() {
    let (mut sensor, mock) = create_mock_sensor();

    mock.set_register(Reg::FifoSrcReg, 0x20);
    assert_eq!(sensor.fifo_empty_flag_get().unwrap(), 1);
    assert_eq!(sensor.fifo_data_level_get().unwrap(), 0);

    mock.set_register(Reg::FifoSrcReg, 0xDF);
    assert_eq!(sensor.fifo_empty_flag_get().unwrap(), 0);
    assert_eq!(sensor.fifo_ovr_flag_get().unwrap(), 1);
    assert_eq!(sensor.fifo_fth_flag_get().unwrap(), 1);
    assert_eq!(sensor.fifo_data_level_get().unwrap(), 0x1F);
}

#[test]
fn test_event_sources() {
    let (mut sensor, mock) = create_mock_sensor();

    mock.set_register(Reg::Ig1Source, 0x42);
    let src = sensor.int1_gen_source_get().unwrap();
    assert_eq!(src.ia(), 1);
    assert_eq!(src.xh(), 1);
    assert_eq!(src.xl(), 0);

    mock.set_register(Reg::Ig2Source, 0x60);
    let src = sensor.int2_gen_source_get().unwrap();
    assert_eq!(src.ia(), 1);
    assert_eq!(src.zh(), 1);

    mock.set_register(Reg::ClickSrc, 0x64);
    let click = sensor.tap_source_get().unwrap();
    assert_eq!(click.ia(), 1);
    assert_eq!(click.dclick(), 1);
    assert_eq!(click.sclick(), 0);
    assert_eq!(click.z(), 1);
}

#[test]
fn test_whole_register_setters_do_not_read() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.set_register(Reg::Ig1Cfg, 0xFF);

    sensor
        .int1_gen_conf_set(Ig1Cfg::new().with_xhie(1))
        .unwrap();
    sensor
        .pin_int1_config_set(CtrlReg3::new().with_i1_click(1))
        .unwrap();
    sensor
        .tap_conf_set(ClickCfg::new().with_xs(1))
        .unwrap();
    sensor.filter_reference_set(0x5A).unwrap();

    assert_eq!(
        mock.accesses(),
        vec![
            Access::Write { address: Reg::Ig1Cfg as u8, value: 0x02 },
            Access::Write { address: Reg::CtrlReg3 as u8, value: 0x80 },
            Access::Write { address: Reg::ClickCfg as u8, value: 0x01 },
            Access::Write { address: Reg::Reference as u8, value: 0x5A },
        ]
    );
}

#[test]
fn test_reboot_sets_boot_bit() {
    let (mut sensor, mock) = create_mock_sensor();
    mock.set_register(Reg::CtrlReg5, 0x40);

    sensor.reboot().unwrap();

    assert_eq!(mock.register(Reg::CtrlReg5), 0xC0);
}
