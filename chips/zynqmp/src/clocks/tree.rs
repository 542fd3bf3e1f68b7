// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! The clock tree and its public operations.
//!
//! [`ClockTree`] owns the state of every node, one array per node kind, and
//! borrows the register backend. All operations take `&mut self`; callers
//! that share the tree between execution contexts wrap it in whatever lock
//! fits their environment.
//!
//! Operations on an output clock first resolve it to its terminal node, then
//! walk parent links through the per-kind [`NodeOps`](super::registry)
//! tables. Rates are cached per node and computed lazily on first use.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut clocks = ClockTree::new(&bus, zynqmp::config::DEFAULT_CONFIG);
//! clocks.init(zynqmp::config::BOOT_CLOCKS)?;
//!
//! clocks.enable(ClockId::Uart0)?;
//! let rate = clocks.set_rate(ClockId::Uart0, 100_000_000)?;
//! ```

use log::{debug, warn};
use tock_registers::fields::FieldValue;
use tock_registers::{LocalRegisterCopy, RegisterLongName};

use super::divider::{self, DividerNode};
use super::fixed_factor::FixedFactorNode;
use super::gate::GateNode;
use super::mux::{self, MuxNode};
use super::node::{
    ClockRate, NodeKind, NodeRef, NodeState, ParentRef, INVALID_RATE, MAX_CHAIN_DEPTH,
};
use super::output::ClockId;
use super::pll::PllNode;
use super::registry;
use super::topology::{
    DividerId, FixedFactorId, GateId, MuxId, PllId, DIVIDERS, FIXED_FACTORS, GATES, MUXES, PLLS,
};
use crate::config::Config;
use crate::hil::{RegisterHandle, RegisterIo};
use crate::ClockError;

pub struct ClockTree<'a> {
    bus: &'a dyn RegisterIo,
    config: Config,
    pub(crate) plls: [PllNode; PllId::COUNT],
    pub(crate) muxes: [MuxNode; MuxId::COUNT],
    pub(crate) dividers: [DividerNode; DividerId::COUNT],
    pub(crate) gates: [GateNode; GateId::COUNT],
    pub(crate) fixed_factors: [FixedFactorNode; FixedFactorId::COUNT],
}

/// Result of a rate request on a configurable node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RateOutcome {
    /// The node was reprogrammed and now runs at the given rate.
    Committed(ClockRate),
    /// No reachable rate is strictly closer to the target than the current
    /// one. Nothing was written.
    NoBeneficialChange,
}

/// Configurable stages found between an output clock and its input clock.
#[derive(Default)]
struct RatePlan {
    /// Contiguous dividers, source side first.
    dividers: [Option<usize>; 2],
    pll: Option<usize>,
}

impl<'a> ClockTree<'a> {
    /// Create a tree with every node uninitialized and disabled. No register
    /// is accessed until the first operation.
    pub fn new(bus: &'a dyn RegisterIo, config: Config) -> ClockTree<'a> {
        ClockTree {
            bus,
            config,
            plls: core::array::from_fn(|i| PllNode::new(&PLLS[i])),
            muxes: core::array::from_fn(|i| MuxNode::new(&MUXES[i])),
            dividers: core::array::from_fn(|i| DividerNode::new(&DIVIDERS[i])),
            gates: core::array::from_fn(|i| GateNode::new(&GATES[i])),
            fixed_factors: core::array::from_fn(|i| FixedFactorNode::new(&FIXED_FACTORS[i])),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Register access

    pub(crate) fn fetch_register<R: RegisterLongName>(
        &self,
        register: RegisterHandle,
    ) -> Result<LocalRegisterCopy<u32, R>, ClockError> {
        let value = self.bus.read_register(register)?;
        Ok(LocalRegisterCopy::new(value))
    }

    /// Read-modify-write the fields named in `value`.
    pub(crate) fn modify<R: RegisterLongName>(
        &self,
        register: RegisterHandle,
        value: FieldValue<u32, R>,
    ) -> Result<(), ClockError> {
        let mut copy = self.fetch_register::<R>(register)?;
        copy.modify(value);
        self.bus.write_register(register, copy.get())?;
        Ok(())
    }

    // Dispatch

    fn init_ref(&mut self, node: NodeRef) -> Result<(), ClockError> {
        match registry::ops(node.kind).init {
            Some(init) => init(self, node.index),
            None => Ok(()),
        }
    }

    fn update_ref(&mut self, node: NodeRef) -> Result<(), ClockError> {
        match registry::ops(node.kind).update_rate {
            Some(update_rate) => update_rate(self, node.index),
            None => Ok(()),
        }
    }

    fn enable_ref(&mut self, node: NodeRef) -> Result<(), ClockError> {
        match registry::ops(node.kind).enable {
            Some(enable) => enable(self, node.index),
            None => Ok(()),
        }
    }

    fn disable_ref(&mut self, node: NodeRef) -> Result<(), ClockError> {
        match registry::ops(node.kind).disable {
            Some(disable) => disable(self, node.index),
            None => Ok(()),
        }
    }

    fn rate_of(&self, node: NodeRef) -> ClockRate {
        if node.kind == NodeKind::Ip {
            return self.config.input_rates[node.index];
        }
        match registry::ops(node.kind).get_rate {
            Some(get_rate) => get_rate(self, node.index),
            None => INVALID_RATE,
        }
    }

    fn parent_of(&self, node: NodeRef) -> Result<ParentRef, ClockError> {
        let fetch_parent = registry::ops(node.kind)
            .fetch_parent
            .ok_or(ClockError::NoCapability)?;
        Ok(fetch_parent(self, node.index))
    }

    fn set_rate_ref(
        &mut self,
        node: NodeRef,
        parent_rate: ClockRate,
        target: ClockRate,
        dry_run: bool,
    ) -> Result<ClockRate, ClockError> {
        let set_rate = registry::ops(node.kind)
            .set_rate
            .ok_or(ClockError::NoCapability)?;
        set_rate(self, node.index, parent_rate, target, dry_run)
    }

    /// Reprogram `node` only if a dry run shows that brings it strictly
    /// closer to `target`.
    fn set_rate_if_closer(
        &mut self,
        node: NodeRef,
        parent_rate: ClockRate,
        target: ClockRate,
    ) -> Result<RateOutcome, ClockError> {
        let current = self.rate_of(node);
        let reachable = self.set_rate_ref(node, parent_rate, target, true)?;
        if reachable.abs_diff(target) >= current.abs_diff(target) {
            debug!(
                "{:?}: {} Hz is no closer to {} Hz than {} Hz",
                node, reachable, target, current
            );
            return Ok(RateOutcome::NoBeneficialChange);
        }
        self.set_rate_ref(node, parent_rate, target, false)
            .map(RateOutcome::Committed)
    }

    fn state_of(&self, node: NodeRef) -> Option<&NodeState> {
        match node.kind {
            NodeKind::Ip => None,
            NodeKind::Pll => Some(&self.plls[node.index].state),
            NodeKind::Mux => Some(&self.muxes[node.index].state),
            NodeKind::Gate => Some(&self.gates[node.index].state),
            NodeKind::Divider => Some(&self.dividers[node.index].state),
            NodeKind::FixedFactor => Some(&self.fixed_factors[node.index].state),
        }
    }

    pub(crate) fn init_node(&mut self, parent: ParentRef) -> Result<(), ClockError> {
        parent.node().map_or(Ok(()), |node| self.init_ref(node))
    }

    pub(crate) fn update_node_rate(&mut self, parent: ParentRef) -> Result<(), ClockError> {
        parent.node().map_or(Ok(()), |node| self.update_ref(node))
    }

    pub(crate) fn enable_node(&mut self, parent: ParentRef) -> Result<(), ClockError> {
        parent.node().map_or(Ok(()), |node| self.enable_ref(node))
    }

    pub(crate) fn disable_node(&mut self, parent: ParentRef) -> Result<(), ClockError> {
        parent.node().map_or(Ok(()), |node| self.disable_ref(node))
    }

    /// Cached rate of `parent`, or [`INVALID_RATE`] if the tree does not
    /// manage it.
    pub(crate) fn fetch_rate(&self, parent: ParentRef) -> ClockRate {
        parent.node().map_or(INVALID_RATE, |node| self.rate_of(node))
    }

    /// Terminal node of output clock `id`.
    ///
    /// Node kinds are asked in [`NodeKind::SCAN_ORDER`]. The topology tables
    /// are checked at build time so that exactly one node claims each output.
    fn resolve(&self, id: ClockId) -> Result<NodeRef, ClockError> {
        NodeKind::SCAN_ORDER
            .iter()
            .find_map(|&kind| {
                let fetch_index = registry::ops(kind).fetch_index_for_output?;
                fetch_index(id).map(|index| NodeRef { kind, index })
            })
            .ok_or(ClockError::InvalidParameter)
    }

    fn init_logged(&mut self, node: NodeRef) {
        if let Err(err) = self.init_ref(node) {
            warn!("init of {:?} failed: {:?}", node, err);
        }
    }

    fn update_logged(&mut self, node: NodeRef) {
        if let Err(err) = self.update_ref(node) {
            warn!("rate update of {:?} failed: {:?}", node, err);
        }
    }

    /// Whether `target` lies on the chain from `node` to its input clock.
    fn chain_contains(&self, node: NodeRef, target: NodeRef) -> bool {
        let mut current = Some(node);
        for _ in 0..MAX_CHAIN_DEPTH {
            match current {
                Some(node) if node == target => return true,
                Some(node) => current = self.parent_of(node).ok().and_then(ParentRef::node),
                None => return false,
            }
        }
        false
    }

    /// Recompute the rate of every output clock fed through `source`.
    fn update_topology(&mut self, source: NodeRef) {
        for id in ClockId::ALL {
            let Ok(terminal) = self.resolve(id) else {
                continue;
            };
            if self.chain_contains(terminal, source) {
                self.update_logged(terminal);
            }
        }
    }

    /// Find the stages a rate request on `terminal` can reconfigure.
    ///
    /// # Errors
    ///
    /// + [Err]\([ClockError::UnsupportedTopology]\): the chain holds more than
    /// two dividers, two separate groups of dividers, more than one PLL, or
    /// is longer than [`MAX_CHAIN_DEPTH`]
    fn plan_chain(&self, terminal: NodeRef) -> Result<RatePlan, ClockError> {
        let mut plan = RatePlan::default();
        let mut dividers = 0;
        let mut group_closed = false;

        let mut current = Some(terminal);
        for _ in 0..MAX_CHAIN_DEPTH {
            let Some(node) = current else {
                if dividers == 2 {
                    plan.dividers.swap(0, 1);
                }
                return Ok(plan);
            };

            match node.kind {
                NodeKind::Divider => {
                    if group_closed || dividers == plan.dividers.len() {
                        return Err(ClockError::UnsupportedTopology);
                    }
                    plan.dividers[dividers] = Some(node.index);
                    dividers += 1;
                }
                NodeKind::Pll => {
                    if plan.pll.is_some() {
                        return Err(ClockError::UnsupportedTopology);
                    }
                    plan.pll = Some(node.index);
                    group_closed |= dividers > 0;
                }
                _ => group_closed |= dividers > 0,
            }

            current = match node.kind {
                NodeKind::Ip => None,
                _ => self.parent_of(node)?.node(),
            };
        }
        Err(ClockError::UnsupportedTopology)
    }

    // Public operations

    /// Compute every node's rate and enable the clocks in `boot_clocks`.
    ///
    /// Nodes whose registers cannot be read are left uninitialized and are
    /// retried the next time they are used.
    ///
    /// # Errors
    ///
    /// Returns the first error from enabling a boot clock.
    pub fn init(&mut self, boot_clocks: &[ClockId]) -> Result<(), ClockError> {
        for id in ClockId::ALL {
            let terminal = self.resolve(id)?;
            self.init_logged(terminal);
        }
        for &id in boot_clocks {
            self.enable(id)?;
        }
        Ok(())
    }

    /// Take a reference on `id` and, transitively, on every node feeding it.
    ///
    /// Parents are powered before their children. A failure part way up
    /// leaves the references already taken in place.
    pub fn enable(&mut self, id: ClockId) -> Result<(), ClockError> {
        let terminal = self.resolve(id)?;
        self.init_ref(terminal)?;
        self.enable_ref(terminal)
    }

    /// Release a reference taken by [`ClockTree::enable`]. Releasing a clock
    /// with no references is a no-op.
    pub fn disable(&mut self, id: ClockId) -> Result<(), ClockError> {
        let terminal = self.resolve(id)?;
        self.disable_ref(terminal)
    }

    /// Current rate of `id` in Hz, or [`INVALID_RATE`] if it is fed from an
    /// unmanaged source or its registers cannot be read.
    pub fn get_rate(&mut self, id: ClockId) -> ClockRate {
        match self.resolve(id) {
            Ok(terminal) => {
                self.init_logged(terminal);
                self.rate_of(terminal)
            }
            Err(_) => INVALID_RATE,
        }
    }

    /// Reconfigure the chain feeding `id` to get as close as possible to
    /// `rate`, and return the rate reached.
    ///
    /// Requests below the rate feeding the chain's dividers are solved by
    /// the dividers alone. Requests above the rate feeding the chain's PLL
    /// retune the PLL, which changes every clock it feeds. A PLL is only
    /// reprogrammed if that brings it strictly closer to `rate`; otherwise
    /// the current rate is returned and nothing is written.
    ///
    /// # Errors
    ///
    /// + [Err]\([ClockError::InvalidParameter]\): `rate` is 0
    /// + [Err]\([ClockError::UnsupportedTopology]\): the chain cannot be
    /// solved by a single divider stage pair and a single PLL
    /// + [Err]\([ClockError::NoCapability]\): no configurable stage can move
    /// the rate in the requested direction
    /// + [Err]\([ClockError::HardwareIoFailure]\) or
    /// [Err]\([ClockError::HardwareTimeout]\): programming failed
    pub fn set_rate(&mut self, id: ClockId, rate: ClockRate) -> Result<ClockRate, ClockError> {
        if rate == INVALID_RATE {
            return Err(ClockError::InvalidParameter);
        }
        let terminal = self.resolve(id)?;
        self.init_ref(terminal)?;
        let current = self.rate_of(terminal);
        if rate == current {
            return Ok(current);
        }

        let plan = self.plan_chain(terminal)?;

        if let Some(first) = plan.dividers[0] {
            let node = NodeRef {
                kind: NodeKind::Divider,
                index: first,
            };
            let parent_rate = self.fetch_rate(self.dividers[first].desc.parent);
            if rate < parent_rate {
                match plan.dividers[1] {
                    Some(second) => {
                        divider::set_rate_two_stage(self, first, second, parent_rate, rate)?;
                    }
                    None => {
                        self.set_rate_ref(node, parent_rate, rate, false)?;
                    }
                }
                self.update_topology(node);
                return Ok(self.rate_of(terminal));
            }
        }

        if let Some(index) = plan.pll {
            let node = NodeRef {
                kind: NodeKind::Pll,
                index,
            };
            let parent_rate = self.fetch_rate(self.plls[index].desc.parent);
            if rate > parent_rate {
                return match self.set_rate_if_closer(node, parent_rate, rate)? {
                    RateOutcome::NoBeneficialChange => Ok(current),
                    RateOutcome::Committed(_) => {
                        self.update_topology(node);
                        Ok(self.rate_of(terminal))
                    }
                };
            }
        }

        Err(ClockError::NoCapability)
    }

    /// Node currently feeding the terminal node of `id`.
    ///
    /// # Errors
    ///
    /// + [Err]\([ClockError::NoCapability]\): `id` is an input clock
    pub fn get_parent(&mut self, id: ClockId) -> Result<ParentRef, ClockError> {
        let terminal = self.resolve(id)?;
        self.init_ref(terminal)?;
        self.parent_of(terminal)
    }

    /// Select candidate `candidate` of mux `mux` on the chain feeding `id`,
    /// then recompute every output clock fed through that mux.
    ///
    /// # Errors
    ///
    /// + [Err]\([ClockError::InvalidParameter]\): `mux` does not feed `id`,
    /// or `candidate` is out of range or reserved
    pub fn set_parent(&mut self, id: ClockId, mux: MuxId, candidate: u8) -> Result<(), ClockError> {
        let terminal = self.resolve(id)?;
        self.init_ref(terminal)?;

        let node = NodeRef {
            kind: NodeKind::Mux,
            index: mux as usize,
        };
        if !self.chain_contains(terminal, node) {
            return Err(ClockError::InvalidParameter);
        }
        mux::set_active_parent(self, node.index, candidate)?;
        self.update_topology(node);
        Ok(())
    }

    /// Whether `id` holds at least one reference. Input clocks are always
    /// running.
    pub fn is_enabled(&self, id: ClockId) -> Result<bool, ClockError> {
        let terminal = self.resolve(id)?;
        match self.state_of(terminal) {
            Some(state) => Ok(state.is_enabled()),
            None => Ok(true),
        }
    }

    /// Number of references held on the terminal node of `id`.
    ///
    /// # Errors
    ///
    /// + [Err]\([ClockError::NoCapability]\): `id` is an input clock
    pub fn enable_count(&self, id: ClockId) -> Result<u32, ClockError> {
        let terminal = self.resolve(id)?;
        self.state_of(terminal)
            .map(|state| state.enable_count)
            .ok_or(ClockError::NoCapability)
    }
}
