// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Node identifiers, parent references and per-node state shared by every
//! node kind.

use super::topology::{DividerId, FixedFactorId, GateId, IpId, MuxId, PllId};

/// Clock frequency in Hz.
pub type ClockRate = u64;

/// Rate reported for clocks whose frequency is unknown or unmanaged.
pub const INVALID_RATE: ClockRate = 0;

/// Upper bound on the number of hops from any node to its input clock.
pub const MAX_CHAIN_DEPTH: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Ip,
    Pll,
    Mux,
    Gate,
    Divider,
    FixedFactor,
}

impl NodeKind {
    /// Order in which node kinds are asked to claim an output clock.
    pub const SCAN_ORDER: [NodeKind; 6] = [
        NodeKind::Ip,
        NodeKind::Pll,
        NodeKind::Mux,
        NodeKind::Gate,
        NodeKind::Divider,
        NodeKind::FixedFactor,
    ];
}

/// Reference from a node to the node feeding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParentRef {
    Ip(IpId),
    Pll(PllId),
    Mux(MuxId),
    Gate(GateId),
    Divider(DividerId),
    FixedFactor(FixedFactorId),
    /// Fed from an off-chip source the tree does not model.
    External,
    /// Reserved selector value; never a valid parent.
    Invalid,
}

impl ParentRef {
    /// The referenced node, or `None` for the `External` and `Invalid`
    /// sentinels.
    pub const fn node(self) -> Option<NodeRef> {
        let (kind, index) = match self {
            ParentRef::Ip(id) => (NodeKind::Ip, id as usize),
            ParentRef::Pll(id) => (NodeKind::Pll, id as usize),
            ParentRef::Mux(id) => (NodeKind::Mux, id as usize),
            ParentRef::Gate(id) => (NodeKind::Gate, id as usize),
            ParentRef::Divider(id) => (NodeKind::Divider, id as usize),
            ParentRef::FixedFactor(id) => (NodeKind::FixedFactor, id as usize),
            ParentRef::External | ParentRef::Invalid => return None,
        };
        Some(NodeRef { kind, index })
    }
}

/// Untyped handle to a node: its kind and its index in that kind's table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeRef {
    pub kind: NodeKind,
    pub index: usize,
}

/// Bookkeeping common to every node except input clocks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeState {
    pub enable_count: u32,
    pub is_init: bool,
    /// Only meaningful once `is_init` is set.
    pub rate: ClockRate,
}

impl NodeState {
    pub const fn new() -> NodeState {
        NodeState {
            enable_count: 0,
            is_init: false,
            rate: INVALID_RATE,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enable_count > 0
    }
}

/// Round-to-nearest integer division, as used by every rate solver.
pub(crate) const fn div_round_closest(dividend: u64, divisor: u64) -> u64 {
    (dividend + divisor / 2) / divisor
}
