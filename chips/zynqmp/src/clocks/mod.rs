// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! ZynqMP clock tree.
//!
//! The tree is a fixed graph of input clocks, PLLs, muxes, dividers, gates
//! and fixed-factor taps described by [`topology`]. Peripherals name the
//! clock they consume with a [`ClockId`] and go through [`ClockTree`] to
//! enable it, query its rate or change it.

pub mod divider;
pub mod fixed_factor;
pub mod gate;
pub mod ip;
pub mod mux;
pub mod node;
pub mod output;
pub mod pll;
pub mod topology;

mod registry;
mod tree;

pub use self::node::{ClockRate, NodeKind, NodeRef, ParentRef, INVALID_RATE};
pub use self::output::ClockId;
pub use self::topology::MuxId;
pub use self::tree::ClockTree;
