//! Every setter followed by its getter returns the written value

use crate::common::create_mock_sensor;
use lis3de_rs::prelude::*;

#[test]
fn test_data_rate_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for odr in [
        Odr::PowerDown,
        Odr::_1hz,
        Odr::_10hz,
        Odr::_25hz,
        Odr::_50hz,
        Odr::_100hz,
        Odr::_200hz,
        Odr::_400hz,
        Odr::_1k6hz,
        Odr::_5k376hzLp1k344hzNm,
    ] {
        sensor.data_rate_set(odr).unwrap();
        assert_eq!(sensor.data_rate_get().unwrap(), odr);
    }
}

#[test]
fn test_operating_mode_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for mode in [OpMd::Lp, OpMd::Nm] {
        sensor.operating_mode_set(mode).unwrap();
        assert_eq!(sensor.operating_mode_get().unwrap(), mode);
    }
}

#[test]
fn test_high_pass_configuration_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for hpcf in [Hpcf::Aggressive, Hpcf::Strong, Hpcf::Medium, Hpcf::Light] {
        sensor.high_pass_bandwidth_set(hpcf).unwrap();
        assert_eq!(sensor.high_pass_bandwidth_get().unwrap(), hpcf);
    }

    for hpm in [
        Hpm::NormalWithRst,
        Hpm::ReferenceMode,
        Hpm::Normal,
        Hpm::AutorstOnInt,
    ] {
        sensor.high_pass_mode_set(hpm).unwrap();
        assert_eq!(sensor.high_pass_mode_get().unwrap(), hpm);
    }

    for hp in [
        Hp::DiscFromIntGenerator,
        Hp::OnInt1Gen,
        Hp::OnInt2Gen,
        Hp::OnTapGen,
        Hp::OnInt1Int2Gen,
        Hp::OnInt1TapGen,
        Hp::OnInt2TapGen,
        Hp::OnInt1Int2TapGen,
    ] {
        sensor.high_pass_int_conf_set(hp).unwrap();
        assert_eq!(sensor.high_pass_int_conf_get().unwrap(), hp);
    }

    for fds in [PROPERTY_ENABLE, PROPERTY_DISABLE] {
        sensor.high_pass_on_outputs_set(fds).unwrap();
        assert_eq!(sensor.high_pass_on_outputs_get().unwrap(), fds);
    }
}

#[test]
fn test_ctrl_reg4_fields_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for fs in [Fs::_2g, Fs::_4g, Fs::_8g, Fs::_16g] {
        sensor.full_scale_set(fs).unwrap();
        assert_eq!(sensor.full_scale_get().unwrap(), fs);
    }

    for st in [St::Disable, St::Positive, St::Negative] {
        sensor.self_test_set(st).unwrap();
        assert_eq!(sensor.self_test_get().unwrap(), st);
    }

    for sim in [Sim::Spi3Wire, Sim::Spi4Wire] {
        sensor.spi_mode_set(sim).unwrap();
        assert_eq!(sensor.spi_mode_get().unwrap(), sim);
    }

    for bdu in [PROPERTY_ENABLE, PROPERTY_DISABLE] {
        sensor.block_data_update_set(bdu).unwrap();
        assert_eq!(sensor.block_data_update_get().unwrap(), bdu);
    }
}

#[test]
fn test_aux_adc_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for aux in [TempEn::AuxOnTemperature, TempEn::AuxOnPads, TempEn::AuxDisable] {
        sensor.aux_adc_set(aux).unwrap();
        assert_eq!(sensor.aux_adc_get().unwrap(), aux);
    }
}

#[test]
fn test_ctrl_reg5_fields_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for val in [PROPERTY_ENABLE, PROPERTY_DISABLE] {
        sensor.boot_set(val).unwrap();
        assert_eq!(sensor.boot_get().unwrap(), val);

        sensor.fifo_set(val).unwrap();
        assert_eq!(sensor.fifo_get().unwrap(), val);

        sensor.int1_pin_detect_4d_set(val).unwrap();
        assert_eq!(sensor.int1_pin_detect_4d_get().unwrap(), val);

        sensor.int2_pin_detect_4d_set(val).unwrap();
        assert_eq!(sensor.int2_pin_detect_4d_get().unwrap(), val);
    }

    for lir in [LirInt1::Int1Latched, LirInt1::Int1Pulsed] {
        sensor.int1_pin_notification_mode_set(lir).unwrap();
        assert_eq!(sensor.int1_pin_notification_mode_get().unwrap(), lir);
    }

    for lir in [LirInt2::Int2Latched, LirInt2::Int2Pulsed] {
        sensor.int2_pin_notification_mode_set(lir).unwrap();
        assert_eq!(sensor.int2_pin_notification_mode_get().unwrap(), lir);
    }
}

#[test]
fn test_fifo_control_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for fth in 0..32u8 {
        sensor.fifo_watermark_set(fth).unwrap();
        assert_eq!(sensor.fifo_watermark_get().unwrap(), fth);
    }

    for tr in [Tr::Int2Gen, Tr::Int1Gen] {
        sensor.fifo_trigger_event_set(tr).unwrap();
        assert_eq!(sensor.fifo_trigger_event_get().unwrap(), tr);
    }

    for fm in [
        Fm::BypassMode,
        Fm::FifoMode,
        Fm::DynamicStreamMode,
        Fm::StreamToFifoMode,
    ] {
        sensor.fifo_mode_set(fm).unwrap();
        assert_eq!(sensor.fifo_mode_get().unwrap(), fm);
    }
}

#[test]
fn test_interrupt_generator_magnitudes_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for val in [0u8, 1, 0x2A, 0x7F] {
        sensor.int1_gen_threshold_set(val).unwrap();
        assert_eq!(sensor.int1_gen_threshold_get().unwrap(), val);

        sensor.int1_gen_duration_set(val).unwrap();
        assert_eq!(sensor.int1_gen_duration_get().unwrap(), val);

        sensor.int2_gen_threshold_set(val).unwrap();
        assert_eq!(sensor.int2_gen_threshold_get().unwrap(), val);

        sensor.int2_gen_duration_set(val).unwrap();
        assert_eq!(sensor.int2_gen_duration_get().unwrap(), val);
    }
}

#[test]
fn test_tap_and_activity_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    for val in [0u8, 1, 0x55, 0x7F] {
        sensor.tap_threshold_set(val).unwrap();
        assert_eq!(sensor.tap_threshold_get().unwrap(), val);

        sensor.shock_dur_set(val).unwrap();
        assert_eq!(sensor.shock_dur_get().unwrap(), val);

        sensor.act_threshold_set(val).unwrap();
        assert_eq!(sensor.act_threshold_get().unwrap(), val);
    }

    for val in [0u8, 1, 0x80, 0xFF] {
        sensor.quiet_dur_set(val).unwrap();
        assert_eq!(sensor.quiet_dur_get().unwrap(), val);

        sensor.double_tap_timeout_set(val).unwrap();
        assert_eq!(sensor.double_tap_timeout_get().unwrap(), val);

        sensor.act_timeout_set(val).unwrap();
        assert_eq!(sensor.act_timeout_get().unwrap(), val);

        sensor.filter_reference_set(val).unwrap();
        assert_eq!(sensor.filter_reference_get().unwrap(), val);
    }

    for lir in [Lir::TapLatched, Lir::TapPulsed] {
        sensor.tap_notification_mode_set(lir).unwrap();
        assert_eq!(sensor.tap_notification_mode_get().unwrap(), lir);
    }
}

#[test]
fn test_whole_register_configuration_round_trip() {
    let (mut sensor, _mock) = create_mock_sensor();

    let ig1 = Ig1Cfg::new().with_xhie(1).with_yhie(1).with_zhie(1).with_aoi(1);
    sensor.int1_gen_conf_set(ig1).unwrap();
    assert_eq!(sensor.int1_gen_conf_get().unwrap().into_bits(), 0xAA);

    let ig2 = Ig2Cfg::new().with_xlie(1).with_d6d(1);
    sensor.int2_gen_conf_set(ig2).unwrap();
    assert_eq!(sensor.int2_gen_conf_get().unwrap().into_bits(), 0x41);

    let int1 = CtrlReg3::new().with_i1_ia1(1).with_i1_zyxda(1);
    sensor.pin_int1_config_set(int1).unwrap();
    assert_eq!(sensor.pin_int1_config_get().unwrap().into_bits(), 0x50);

    let int2 = CtrlReg6::new().with_i2_click(1).with_int_polarity(1);
    sensor.pin_int2_config_set(int2).unwrap();
    assert_eq!(sensor.pin_int2_config_get().unwrap().into_bits(), 0x82);

    let click = ClickCfg::new().with_xd(1).with_yd(1).with_zd(1);
    sensor.tap_conf_set(click).unwrap();
    assert_eq!(sensor.tap_conf_get().unwrap().into_bits(), 0x2A);
}
