// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Clock tree tests against a fake register file.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::vec::Vec;

use crate::clocks::node::INVALID_RATE;
use crate::clocks::pll::{FBDIV_MAX, FBDIV_MIN, VCO_MAX, VCO_MIN};
use crate::clocks::topology::{DividerId, IpId};
use crate::clocks::{ClockId, ClockTree, MuxId, ParentRef};
use crate::config::{Config, BOOT_CLOCKS, DEFAULT_CONFIG};
use crate::hil::{HwError, RegisterHandle, RegisterIo};
use crate::registers::*;
use crate::ClockError;

const PSS_REF: u64 = 35_714_275;
const VIDEO: u64 = 50_000_000;
/// IOPLL and RPLL at FBDIV 40 from PSS_REF.
const IOPLL_RATE: u64 = 1_428_571_000;
/// APLL and DPLL at FBDIV 42 from PSS_REF.
const APLL_RATE: u64 = 1_499_999_550;
/// VPLL at FBDIV 40 from VIDEO.
const VPLL_RATE: u64 = 2_000_000_000;

const BYPASS: u32 = 1 << 3;
const RESET: u32 = 1 << 0;

/// Register file backed by a map. Unwritten registers read as 0.
struct FakeRegisters {
    values: RefCell<BTreeMap<u32, u32>>,
    reads: RefCell<Vec<RegisterHandle>>,
    writes: RefCell<Vec<(RegisterHandle, u32)>>,
    fail_reads: Cell<Option<RegisterHandle>>,
    fail_writes: Cell<Option<RegisterHandle>>,
}

impl FakeRegisters {
    fn new() -> Self {
        Self {
            values: RefCell::new(BTreeMap::new()),
            reads: RefCell::new(Vec::new()),
            writes: RefCell::new(Vec::new()),
            fail_reads: Cell::new(None),
            fail_writes: Cell::new(None),
        }
    }

    /// PLLs programmed and locked, every peripheral divider passing through.
    fn booted() -> Self {
        let bus = Self::new();
        bus.set(IOPLL_CTRL, 40 << 8);
        bus.set(RPLL_CTRL, 40 << 8);
        bus.set(APLL_CTRL, 42 << 8);
        bus.set(DPLL_CTRL, 42 << 8);
        // VPLL runs from VIDEO_CLK
        bus.set(VPLL_CTRL, (4 << 20) | (40 << 8));
        bus.set(CRL_PLL_STATUS, 0b11);
        bus.set(CRF_PLL_STATUS, 0b111);
        bus
    }

    fn set(&self, register: RegisterHandle, value: u32) {
        self.values.borrow_mut().insert(register.address(), value);
    }

    fn get(&self, register: RegisterHandle) -> u32 {
        self.values
            .borrow()
            .get(&register.address())
            .copied()
            .unwrap_or(0)
    }

    fn writes_to(&self, register: RegisterHandle) -> Vec<u32> {
        self.writes
            .borrow()
            .iter()
            .filter(|(handle, _)| *handle == register)
            .map(|(_, value)| *value)
            .collect()
    }

    fn reads_of(&self, register: RegisterHandle) -> usize {
        self.reads.borrow().iter().filter(|handle| **handle == register).count()
    }

    fn clear_log(&self) {
        self.reads.borrow_mut().clear();
        self.writes.borrow_mut().clear();
    }
}

impl RegisterIo for FakeRegisters {
    fn read_register(&self, register: RegisterHandle) -> Result<u32, HwError> {
        if self.fail_reads.get() == Some(register) {
            return Err(HwError);
        }
        self.reads.borrow_mut().push(register);
        Ok(self.get(register))
    }

    fn write_register(&self, register: RegisterHandle, value: u32) -> Result<(), HwError> {
        if self.fail_writes.get() == Some(register) {
            return Err(HwError);
        }
        self.writes.borrow_mut().push((register, value));
        self.set(register, value);
        Ok(())
    }
}

fn config() -> Config {
    let mut config = DEFAULT_CONFIG;
    config.input_rates[IpId::PssRef as usize] = PSS_REF;
    config.input_rates[IpId::Video as usize] = VIDEO;
    config.pll_lock_poll_limit = 8;
    config
}

mod rates {
    use super::*;

    #[test]
    fn rates_follow_the_programmed_chain() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.get_rate(ClockId::PssRef), PSS_REF);
        assert_eq!(clocks.get_rate(ClockId::IopllInt), IOPLL_RATE);
        assert_eq!(clocks.get_rate(ClockId::IopllHalf), IOPLL_RATE / 2);
        assert_eq!(clocks.get_rate(ClockId::Iopll), IOPLL_RATE);
        assert_eq!(clocks.get_rate(ClockId::I2c0), IOPLL_RATE);
        assert_eq!(clocks.get_rate(ClockId::Acpu), APLL_RATE);
        assert_eq!(clocks.get_rate(ClockId::AcpuHalf), APLL_RATE / 2);
        assert_eq!(clocks.get_rate(ClockId::DpVideoRef), VPLL_RATE);
        assert!(bus.writes.borrow().is_empty());
    }

    #[test]
    fn divider_fields_divide_rounding_up() {
        let bus = FakeRegisters::booted();
        bus.set(UART0_REF_CTRL, (3 << 8) | (2 << 16));
        let mut clocks = ClockTree::new(&bus, config());

        // ceil(ceil(1_428_571_000 / 3) / 2)
        assert_eq!(clocks.get_rate(ClockId::Uart0), 238_095_167);
    }

    #[test]
    fn fractional_pll_rate_is_read_back() {
        let bus = FakeRegisters::booted();
        bus.set(VPLL_CTRL, (4 << 20) | (45 << 8));
        bus.set(VPLL_FRAC_CFG, (1 << 31) | 0x8000);
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.get_rate(ClockId::VpllInt), 2_275_000_000);
    }

    #[test]
    fn reserved_selector_falls_back_to_first_candidate() {
        let bus = FakeRegisters::booted();
        bus.set(UART0_REF_CTRL, 1);
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.get_rate(ClockId::Uart0), IOPLL_RATE);
        assert_eq!(
            clocks.get_parent(ClockId::Uart0),
            Ok(ParentRef::Divider(DividerId::Uart0Div1))
        );
    }

    #[test]
    fn unmanaged_sources_report_an_invalid_rate() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.get_rate(ClockId::Can0Mio), INVALID_RATE);
        assert_eq!(clocks.get_rate(ClockId::AuxRef), INVALID_RATE);
        assert_eq!(clocks.get_parent(ClockId::Can0Mio), Ok(ParentRef::External));
    }

    #[test]
    fn unmanaged_selection_is_read_once() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.init(&[]), Ok(()));
        assert!(bus.reads_of(CAN_MIO_CLK_CTRL) > 0);
        bus.clear_log();

        assert_eq!(clocks.init(&[]), Ok(()));
        assert_eq!(clocks.get_rate(ClockId::Can0Mio), INVALID_RATE);
        assert_eq!(clocks.get_rate(ClockId::Can1Mio), INVALID_RATE);
        assert_eq!(clocks.get_parent(ClockId::Can0Mio), Ok(ParentRef::External));
        assert_eq!(bus.reads_of(CAN_MIO_CLK_CTRL), 0);
    }

    #[test]
    fn read_failure_is_retried_on_next_use() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        bus.fail_reads.set(Some(I2C0_REF_CTRL));
        assert_eq!(clocks.get_rate(ClockId::I2c0), INVALID_RATE);
        assert_eq!(
            clocks.set_rate(ClockId::I2c0, 1_000_000),
            Err(ClockError::HardwareIoFailure)
        );

        bus.fail_reads.set(None);
        assert_eq!(clocks.get_rate(ClockId::I2c0), IOPLL_RATE);
    }
}

mod set_rate {
    use super::*;

    #[test]
    fn requesting_the_current_rate_writes_nothing() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        for id in ClockId::ALL {
            let rate = clocks.get_rate(id);
            if rate == INVALID_RATE {
                continue;
            }
            assert_eq!(clocks.set_rate(id, rate), Ok(rate), "{:?}", id);
        }
        assert!(bus.writes.borrow().is_empty());
    }

    #[test]
    fn zero_rate_is_rejected() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.set_rate(ClockId::I2c0, 0), Err(ClockError::InvalidParameter));
        assert!(bus.writes.borrow().is_empty());
    }

    #[test]
    fn i2c_reference_from_single_stage() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.set_rate(ClockId::I2c0, 33_330_000), Ok(33_222_582));
        assert_eq!(bus.get(I2C0_REF_CTRL), (43 << 8) | (1 << 16));
        assert!(bus.writes_to(IOPLL_CTRL).is_empty());
        assert!(bus.writes_to(IOPLL_FRAC_CFG).is_empty());
        assert_eq!(clocks.get_rate(ClockId::I2c0), 33_222_582);
    }

    #[test]
    fn i2c_reference_from_two_stages() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.set_rate(ClockId::I2c0, 1_428_428), Ok(1_428_571));
        assert_eq!(bus.get(I2C0_REF_CTRL), (20 << 8) | (50 << 16));
        assert!(bus.writes_to(IOPLL_CTRL).is_empty());
        assert!(bus.writes_to(IOPLL_FRAC_CFG).is_empty());
    }

    #[test]
    fn divider_change_updates_clocks_sharing_it() {
        let bus = FakeRegisters::booted();
        // GPU from VPLL
        bus.set(GPU_REF_CTRL, 2);
        let mut clocks = ClockTree::new(&bus, config());
        assert_eq!(clocks.get_rate(ClockId::GpuPp0Ref), VPLL_RATE);

        assert_eq!(clocks.set_rate(ClockId::GpuRef, VPLL_RATE / 4), Ok(VPLL_RATE / 4));
        assert_eq!(clocks.get_rate(ClockId::GpuPp0Ref), VPLL_RATE / 4);
        assert_eq!(clocks.get_rate(ClockId::GpuPp1Ref), VPLL_RATE / 4);
        assert_eq!(clocks.get_rate(ClockId::DpVideoRef), VPLL_RATE);
    }

    #[test]
    fn exact_multiple_keeps_pll_in_integer_mode() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.set_rate(ClockId::VpllInt, VIDEO * 48), Ok(VIDEO * 48));
        assert_eq!(bus.writes_to(VPLL_FRAC_CFG), [0]);
        assert_eq!(bus.get(VPLL_CTRL), (4 << 20) | (48 << 8));
    }

    #[test]
    fn pll_change_reaches_exactly_the_downstream_clocks() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());
        let before: Vec<u64> = ClockId::ALL.iter().map(|&id| clocks.get_rate(id)).collect();

        assert_eq!(clocks.set_rate(ClockId::DpVideoRef, 2_275_000_000), Ok(2_275_000_000));
        assert_eq!(bus.writes_to(VPLL_FRAC_CFG), [(1 << 31) | 0x8000]);
        assert_eq!(bus.get(VPLL_CTRL), (4 << 20) | (45 << 8));

        let downstream = [
            ClockId::VpllInt,
            ClockId::Vpll,
            ClockId::VpllIntMux,
            ClockId::VpllHalf,
            ClockId::VpllToLpd,
            ClockId::DpVideoRef,
            ClockId::DpAudioRef,
            ClockId::DpStcRef,
        ];
        for (index, &id) in ClockId::ALL.iter().enumerate() {
            let rate = clocks.get_rate(id);
            if downstream.contains(&id) {
                assert_ne!(rate, before[index], "{:?}", id);
            } else {
                assert_eq!(rate, before[index], "{:?}", id);
            }
        }
        assert_eq!(clocks.get_rate(ClockId::VpllHalf), 2_275_000_000 / 2);
    }

    #[test]
    fn pll_is_left_alone_unless_it_gets_closer() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        // Less than one fractional step away from the current rate
        assert_eq!(clocks.set_rate(ClockId::VpllInt, VPLL_RATE + 1), Ok(VPLL_RATE));
        assert!(bus.writes.borrow().is_empty());
    }

    #[test]
    fn huge_pll_target_lands_in_the_vco_band() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        let rate = clocks.set_rate(ClockId::VpllInt, 1 << 50).unwrap();
        assert!((VCO_MIN..=VCO_MAX).contains(&rate), "{}", rate);
        assert_eq!(clocks.get_rate(ClockId::VpllInt), rate);
        let fbdiv = u64::from((bus.get(VPLL_CTRL) >> 8) & 0x7f);
        assert!((FBDIV_MIN..=FBDIV_MAX).contains(&fbdiv), "{}", fbdiv);
    }

    #[test]
    fn running_pll_relocks_after_reprogramming() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());
        clocks.enable(ClockId::VpllInt).unwrap();
        bus.clear_log();

        assert_eq!(clocks.set_rate(ClockId::VpllInt, VIDEO * 50), Ok(VIDEO * 50));
        let ctrl = (4 << 20) | (40 << 8);
        assert_eq!(
            bus.writes_to(VPLL_CTRL),
            [ctrl | BYPASS, (4 << 20) | (50 << 8) | BYPASS, (4 << 20) | (50 << 8)]
        );
        assert!(bus.reads_of(CRF_PLL_STATUS) > 0);
    }

    #[test]
    fn no_strategy_for_the_requested_direction() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.set_rate(ClockId::VpllHalf, 1_000), Err(ClockError::NoCapability));
        assert_eq!(clocks.set_rate(ClockId::PssRef, 1_000), Err(ClockError::NoCapability));
        assert_eq!(clocks.set_rate(ClockId::Can0Mio, 1_000), Err(ClockError::NoCapability));
        assert!(bus.writes.borrow().is_empty());
    }

    #[test]
    fn cross_domain_divider_is_unsupported() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());
        clocks.set_parent(ClockId::Uart0, MuxId::Uart0, 3).unwrap();
        bus.clear_log();

        assert_eq!(
            clocks.set_rate(ClockId::Uart0, 1_000_000),
            Err(ClockError::UnsupportedTopology)
        );
        assert!(bus.writes.borrow().is_empty());
    }
}

mod enable {
    use super::*;

    #[test]
    fn gate_bit_follows_first_and_last_reference() {
        for holds in [0, 1, 2, 5] {
            let bus = FakeRegisters::booted();
            let mut clocks = ClockTree::new(&bus, config());

            for _ in 0..holds {
                clocks.enable(ClockId::I2c0).unwrap();
            }
            assert_eq!(clocks.enable_count(ClockId::I2c0), Ok(holds));
            for _ in 0..holds {
                clocks.disable(ClockId::I2c0).unwrap();
            }

            assert_eq!(clocks.enable_count(ClockId::I2c0), Ok(0));
            let expected: Vec<u32> = if holds == 0 { Vec::new() } else { vec![1 << 24, 0] };
            assert_eq!(bus.writes_to(I2C0_REF_CTRL), expected);
        }
    }

    #[test]
    fn pll_powers_up_once_and_down_once() {
        for holds in [1, 2, 5] {
            let bus = FakeRegisters::booted();
            let mut clocks = ClockTree::new(&bus, config());
            let ctrl = 40 << 8;
            bus.set(RPLL_CTRL, ctrl | BYPASS | RESET);

            for _ in 0..holds {
                clocks.enable(ClockId::RpllInt).unwrap();
            }
            assert_eq!(bus.writes_to(RPLL_CTRL), [ctrl | BYPASS, ctrl]);
            assert_eq!(clocks.is_enabled(ClockId::RpllInt), Ok(true));

            for _ in 0..holds {
                clocks.disable(ClockId::RpllInt).unwrap();
            }
            assert_eq!(
                bus.writes_to(RPLL_CTRL),
                [ctrl | BYPASS, ctrl, ctrl | BYPASS, ctrl | BYPASS | RESET]
            );
            assert_eq!(clocks.is_enabled(ClockId::RpllInt), Ok(false));
        }
    }

    #[test]
    fn locked_pll_is_taken_over_without_writes() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        clocks.enable(ClockId::RpllInt).unwrap();
        assert!(bus.writes_to(RPLL_CTRL).is_empty());
        assert_eq!(clocks.enable_count(ClockId::RpllInt), Ok(1));
    }

    #[test]
    fn boot_init_keeps_running_plls_out_of_bypass() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.init(BOOT_CLOCKS), Ok(()));
        assert_eq!(clocks.enable_count(ClockId::DpllInt), Ok(1));
        for ctrl in [DPLL_CTRL, APLL_CTRL, IOPLL_CTRL] {
            assert!(
                bus.writes_to(ctrl).iter().all(|value| value & (BYPASS | RESET) == 0),
                "{:?}",
                bus.writes_to(ctrl)
            );
            assert_eq!(bus.get(ctrl) & (BYPASS | RESET), 0);
        }
    }

    #[test]
    fn critical_pll_is_never_reset() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        clocks.enable(ClockId::I2c0).unwrap();
        clocks.disable(ClockId::I2c0).unwrap();

        assert_eq!(clocks.enable_count(ClockId::IopllInt), Ok(0));
        assert!(bus.writes_to(IOPLL_CTRL).iter().all(|value| value & RESET == 0));
        assert_eq!(bus.get(IOPLL_CTRL) & BYPASS, 0);
    }

    #[test]
    fn disabling_an_idle_clock_is_a_no_op() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.disable(ClockId::Uart1), Ok(()));
        assert_eq!(clocks.disable(ClockId::PssRef), Ok(()));
        assert!(bus.writes.borrow().is_empty());
    }

    #[test]
    fn lock_timeout_takes_no_reference() {
        let bus = FakeRegisters::booted();
        bus.set(RPLL_CTRL, (40 << 8) | BYPASS | RESET);
        bus.set(CRL_PLL_STATUS, 0);
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.enable(ClockId::RpllInt), Err(ClockError::HardwareTimeout));
        assert_eq!(bus.reads_of(CRL_PLL_STATUS), 8);
        assert_eq!(clocks.enable_count(ClockId::RpllInt), Ok(0));
        assert_eq!(bus.get(RPLL_CTRL), 40 << 8);
    }

    #[test]
    fn write_failure_keeps_upstream_references() {
        let bus = FakeRegisters::booted();
        bus.fail_writes.set(Some(I2C0_REF_CTRL));
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.enable(ClockId::I2c0), Err(ClockError::HardwareIoFailure));
        assert_eq!(clocks.enable_count(ClockId::I2c0), Ok(0));
        assert_eq!(clocks.enable_count(ClockId::IopllInt), Ok(1));
    }

    #[test]
    fn input_clocks_are_always_running() {
        let bus = FakeRegisters::booted();
        let clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.is_enabled(ClockId::PssRef), Ok(true));
        assert_eq!(clocks.enable_count(ClockId::PssRef), Err(ClockError::NoCapability));
    }

    #[test]
    fn boot_clocks_are_enabled_by_init() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.init(BOOT_CLOCKS), Ok(()));
        for &id in BOOT_CLOCKS {
            assert_eq!(clocks.is_enabled(id), Ok(true), "{:?}", id);
        }
        assert_eq!(clocks.is_enabled(ClockId::Uart0), Ok(false));
        assert_eq!(clocks.enable_count(ClockId::DpllInt), Ok(1));
    }

    #[test]
    fn init_survives_unreadable_registers() {
        let bus = FakeRegisters::booted();
        bus.fail_reads.set(Some(SPI0_REF_CTRL));
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.init(&[]), Ok(()));
        assert_eq!(clocks.get_rate(ClockId::Spi1), IOPLL_RATE);
        assert_eq!(clocks.get_rate(ClockId::Spi0), INVALID_RATE);
    }
}

mod parents {
    use super::*;

    #[test]
    fn get_parent_reports_the_feeding_node() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(
            clocks.get_parent(ClockId::I2c0),
            Ok(ParentRef::Divider(DividerId::I2c0Div1))
        );
        assert_eq!(clocks.get_parent(ClockId::Iopll), Ok(ParentRef::Mux(MuxId::IopllIntMux)));
        assert_eq!(clocks.get_parent(ClockId::PssRef), Err(ClockError::NoCapability));
    }

    #[test]
    fn set_parent_moves_rate_and_references() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());
        clocks.enable(ClockId::DpVideoRef).unwrap();
        assert_eq!(clocks.enable_count(ClockId::VpllInt), Ok(1));

        assert_eq!(clocks.set_parent(ClockId::DpVideoRef, MuxId::DpVideo, 2), Ok(()));

        assert_eq!(bus.get(DP_VIDEO_REF_CTRL) & 0x7, 2);
        assert_eq!(clocks.get_rate(ClockId::DpVideoRef), APLL_RATE);
        assert_eq!(clocks.enable_count(ClockId::DpVideoRef), Ok(1));
        assert_eq!(clocks.enable_count(ClockId::DpllInt), Ok(1));
        assert_eq!(clocks.enable_count(ClockId::VpllInt), Ok(0));
        assert_eq!(bus.get(VPLL_CTRL) & RESET, RESET);
        // DP audio still selects VPLL
        assert_eq!(clocks.get_rate(ClockId::DpAudioRef), VPLL_RATE);
    }

    #[test]
    fn set_parent_on_idle_mux_takes_no_reference() {
        let bus = FakeRegisters::booted();
        bus.set(DPLL_CTRL, (42 << 8) | BYPASS | RESET);
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(clocks.set_parent(ClockId::DpAudioRef, MuxId::DpAudio, 2), Ok(()));
        assert_eq!(clocks.enable_count(ClockId::DpllInt), Ok(0));
        assert!(bus.writes_to(DPLL_CTRL).is_empty());
        assert_eq!(clocks.get_rate(ClockId::DpAudioRef), APLL_RATE);
    }

    #[test]
    fn reserved_or_missing_candidate_is_rejected() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(
            clocks.set_parent(ClockId::DpVideoRef, MuxId::DpVideo, 1),
            Err(ClockError::InvalidParameter)
        );
        assert_eq!(
            clocks.set_parent(ClockId::DpVideoRef, MuxId::DpVideo, 4),
            Err(ClockError::InvalidParameter)
        );
        assert!(bus.writes.borrow().is_empty());
    }

    #[test]
    fn mux_must_feed_the_clock() {
        let bus = FakeRegisters::booted();
        let mut clocks = ClockTree::new(&bus, config());

        assert_eq!(
            clocks.set_parent(ClockId::I2c0, MuxId::DpVideo, 0),
            Err(ClockError::InvalidParameter)
        );
        assert!(bus.writes.borrow().is_empty());
    }
}
