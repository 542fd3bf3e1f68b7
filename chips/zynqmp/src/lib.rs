// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Clock tree support for the Xilinx Zynq UltraScale+ MPSoC (ZynqMP).
//!
//! Register accesses go through a board-supplied [`hil::RegisterIo`], so the
//! crate runs unchanged against real hardware, a firmware interface or a test
//! double.

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod clocks;
pub mod config;
pub mod errorcode;
pub mod hil;
pub mod registers;

#[cfg(test)]
mod tests;

pub use crate::errorcode::ClockError;
