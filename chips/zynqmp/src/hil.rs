// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Interface to the memory-mapped clock control registers.
//!
//! The clock tree never dereferences MMIO addresses itself. Every access goes
//! through a [`RegisterIo`] implementation supplied by the board, which may
//! route the access through a firmware call, a secure monitor or a plain
//! volatile pointer. Each access can fail and the failure is carried back to
//! the caller of the clock operation.

use core::fmt;

/// Address of a 32-bit clock control register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RegisterHandle(u32);

impl RegisterHandle {
    pub const fn new(address: u32) -> RegisterHandle {
        RegisterHandle(address)
    }

    pub const fn address(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RegisterHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A register access was rejected or faulted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HwError;

/// Register access backend used by [`crate::clocks::ClockTree`].
pub trait RegisterIo {
    /// Read the full 32-bit value of `register`.
    fn read_register(&self, register: RegisterHandle) -> Result<u32, HwError>;

    /// Write `value` to `register`.
    fn write_register(&self, register: RegisterHandle, value: u32) -> Result<(), HwError>;
}
