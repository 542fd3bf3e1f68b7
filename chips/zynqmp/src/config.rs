// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Board-level configuration of the clock tree.
//!
//! Like the kernel configuration, settings are carried in a typed `const`
//! object instead of Cargo features: every option is type-checked in every
//! build, and constant folding removes whatever a board does not use.
//!
//! Boards whose crystals differ from the reference design copy
//! [`DEFAULT_CONFIG`], override the relevant fields and hand the result to
//! [`crate::clocks::ClockTree::new`].

use crate::clocks::node::ClockRate;
use crate::clocks::output::ClockId;
use crate::clocks::topology::IpId;

/// Data structure holding the clock tree configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Rate of each off-chip input clock, indexed by [`IpId`].
    ///
    /// A rate of 0 marks an input that is not populated on the board. Chains
    /// fed from such an input report an invalid rate.
    pub input_rates: [ClockRate; IpId::COUNT],
    /// Number of times the PLL status register is polled for lock before
    /// giving up with [`crate::ClockError::HardwareTimeout`].
    // 1000 polls at APB speed comfortably exceed the 100us worst-case lock
    // time of the ZynqMP PLLs.
    pub pll_lock_poll_limit: u32,
}

impl Config {
    pub const fn input_rate(&self, id: IpId) -> ClockRate {
        self.input_rates[id as usize]
    }
}

/// Configuration matching the ZCU102 reference board.
pub const DEFAULT_CONFIG: Config = Config {
    input_rates: [
        33_333_333, // PSS_REF_CLK
        27_000_000, // VIDEO_CLK
        0,          // PSS_ALT_REF_CLK
        0,          // AUX_REF_CLK
        0,          // GT_CRX_REF_CLK
    ],
    pll_lock_poll_limit: 1000,
};

/// Output clocks kept running from boot: the DDR controller, the application
/// cores, and the interconnect they reach memory and I/O through.
pub const BOOT_CLOCKS: &[ClockId] = &[
    ClockId::DdrRef,
    ClockId::Acpu,
    ClockId::TopswMain,
    ClockId::TopswLsbus,
    ClockId::LpdSwitch,
    ClockId::LpdLsbus,
    ClockId::IouSwitch,
];
