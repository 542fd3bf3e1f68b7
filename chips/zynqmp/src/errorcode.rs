// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Error enum returned by clock tree operations

use crate::hil::HwError;

/// Errors reported by the clock tree.
///
/// Out-of-range indices and identifiers are rejected with
/// [`ClockError::InvalidParameter`] before any register is touched. Hardware
/// faults surface as [`ClockError::HardwareIoFailure`] through every level of
/// a recursive enable or rate change; reference counts already applied to
/// ancestors are not rolled back.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(usize)]
pub enum ClockError {
    /// An invalid index, identifier or rate was passed
    InvalidParameter = 0,
    /// A register read or write failed
    HardwareIoFailure = 1,
    /// The node kind does not support the requested operation
    NoCapability = 2,
    /// The chain has more configurable stages than can be resolved
    UnsupportedTopology = 3,
    /// A PLL did not report lock within the poll limit
    HardwareTimeout = 4,
}

impl From<ClockError> for usize {
    fn from(err: ClockError) -> usize {
        err as usize
    }
}

impl From<HwError> for ClockError {
    fn from(_err: HwError) -> ClockError {
        ClockError::HardwareIoFailure
    }
}
