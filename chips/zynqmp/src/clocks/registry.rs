// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Per-kind dispatch tables.
//!
//! Each node kind registers the operations it supports. The tree reaches a
//! node's behavior only by looking up the kind's [`NodeOps`] and calling
//! through the table. A missing `enable`/`disable` entry is a no-op, a missing
//! `fetch_parent`/`set_rate` entry is reported as [`ClockError::NoCapability`].

use super::divider;
use super::fixed_factor;
use super::gate;
use super::ip;
use super::mux;
use super::node::{ClockRate, NodeKind, ParentRef};
use super::output::ClockId;
use super::pll;
use super::ClockTree;
use crate::ClockError;

pub(crate) type NodeFn = fn(&mut ClockTree<'_>, usize) -> Result<(), ClockError>;
pub(crate) type SetRateFn =
    fn(&mut ClockTree<'_>, usize, ClockRate, ClockRate, bool) -> Result<ClockRate, ClockError>;

pub(crate) struct NodeOps {
    /// Lazily compute the cached rate, parent first. No-op once initialized.
    pub init: Option<NodeFn>,
    pub enable: Option<NodeFn>,
    pub disable: Option<NodeFn>,
    /// Cached rate. Never touches hardware.
    pub get_rate: Option<fn(&ClockTree<'_>, usize) -> ClockRate>,
    /// Recompute the cached rate, parent first, even if already initialized.
    pub update_rate: Option<NodeFn>,
    pub fetch_parent: Option<fn(&ClockTree<'_>, usize) -> ParentRef>,
    /// `(tree, index, parent_rate, target, dry_run)`, returns the rate
    /// achieved (or achievable, for a dry run).
    pub set_rate: Option<SetRateFn>,
    pub fetch_index_for_output: Option<fn(ClockId) -> Option<usize>>,
}

static IP_OPS: NodeOps = NodeOps {
    init: None,
    enable: None,
    disable: None,
    get_rate: None,
    update_rate: None,
    fetch_parent: None,
    set_rate: None,
    fetch_index_for_output: Some(ip::fetch_index_for_output),
};

static PLL_OPS: NodeOps = NodeOps {
    init: Some(pll::init),
    enable: Some(pll::enable),
    disable: Some(pll::disable),
    get_rate: Some(pll::get_rate),
    update_rate: Some(pll::update_rate),
    fetch_parent: Some(pll::fetch_parent),
    set_rate: Some(pll::set_rate),
    fetch_index_for_output: Some(pll::fetch_index_for_output),
};

static MUX_OPS: NodeOps = NodeOps {
    init: Some(mux::init),
    enable: Some(mux::enable),
    disable: Some(mux::disable),
    get_rate: Some(mux::get_rate),
    update_rate: Some(mux::update_rate),
    fetch_parent: Some(mux::fetch_parent),
    set_rate: None,
    fetch_index_for_output: Some(mux::fetch_index_for_output),
};

static GATE_OPS: NodeOps = NodeOps {
    init: Some(gate::init),
    enable: Some(gate::enable),
    disable: Some(gate::disable),
    get_rate: Some(gate::get_rate),
    update_rate: Some(gate::update_rate),
    fetch_parent: Some(gate::fetch_parent),
    set_rate: None,
    fetch_index_for_output: Some(gate::fetch_index_for_output),
};

static DIVIDER_OPS: NodeOps = NodeOps {
    init: Some(divider::init),
    enable: Some(divider::enable),
    disable: Some(divider::disable),
    get_rate: Some(divider::get_rate),
    update_rate: Some(divider::update_rate),
    fetch_parent: Some(divider::fetch_parent),
    set_rate: Some(divider::set_rate),
    fetch_index_for_output: Some(divider::fetch_index_for_output),
};

static FIXED_FACTOR_OPS: NodeOps = NodeOps {
    init: Some(fixed_factor::init),
    enable: Some(fixed_factor::enable),
    disable: Some(fixed_factor::disable),
    get_rate: Some(fixed_factor::get_rate),
    update_rate: Some(fixed_factor::update_rate),
    fetch_parent: Some(fixed_factor::fetch_parent),
    set_rate: None,
    fetch_index_for_output: Some(fixed_factor::fetch_index_for_output),
};

pub(crate) fn ops(kind: NodeKind) -> &'static NodeOps {
    match kind {
        NodeKind::Ip => &IP_OPS,
        NodeKind::Pll => &PLL_OPS,
        NodeKind::Mux => &MUX_OPS,
        NodeKind::Gate => &GATE_OPS,
        NodeKind::Divider => &DIVIDER_OPS,
        NodeKind::FixedFactor => &FIXED_FACTOR_OPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_rate_only_for_pll_and_divider() {
        for kind in NodeKind::SCAN_ORDER {
            let expected = kind == NodeKind::Pll || kind == NodeKind::Divider;
            assert_eq!(ops(kind).set_rate.is_some(), expected, "{:?}", kind);
        }
    }

    #[test]
    fn every_kind_can_claim_outputs() {
        for kind in NodeKind::SCAN_ORDER {
            assert!(ops(kind).fetch_index_for_output.is_some(), "{:?}", kind);
        }
    }

    #[test]
    fn input_clocks_bypass_the_table() {
        let ip = ops(NodeKind::Ip);
        assert!(ip.init.is_none());
        assert!(ip.enable.is_none());
        assert!(ip.disable.is_none());
        assert!(ip.get_rate.is_none());
        assert!(ip.fetch_parent.is_none());
    }
}
