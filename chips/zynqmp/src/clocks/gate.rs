// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Clock gates.
//!
//! A gate passes its parent's rate through unchanged. Its `CLKACT` bit is set
//! when the first user enables it and cleared when the last user releases it.

use log::debug;

use super::node::{ClockRate, NodeState, ParentRef};
use super::output::ClockId;
use super::topology::{GateId, GATES};
use super::ClockTree;
use crate::hil::RegisterHandle;
use crate::registers::dynamic_field;
use crate::ClockError;

pub struct GateDesc {
    pub id: GateId,
    pub output: Option<ClockId>,
    pub parent: ParentRef,
    pub register: RegisterHandle,
    /// Position of the `CLKACT` bit in `register`.
    pub bit: u8,
}

pub(crate) struct GateNode {
    pub(crate) desc: &'static GateDesc,
    pub(crate) state: NodeState,
}

impl GateNode {
    pub(crate) const fn new(desc: &'static GateDesc) -> GateNode {
        GateNode {
            desc,
            state: NodeState::new(),
        }
    }
}

fn recalc(tree: &mut ClockTree<'_>, index: usize) {
    let parent_rate = tree.fetch_rate(tree.gates[index].desc.parent);
    let state = &mut tree.gates[index].state;
    state.rate = parent_rate;
    state.is_init = true;
}

pub(crate) fn init(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    if tree.gates[index].state.is_init {
        return Ok(());
    }
    let parent = tree.gates[index].desc.parent;
    tree.init_node(parent)?;
    recalc(tree, index);
    Ok(())
}

pub(crate) fn update_rate(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let parent = tree.gates[index].desc.parent;
    tree.update_node_rate(parent)?;
    recalc(tree, index);
    Ok(())
}

pub(crate) fn enable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let desc = tree.gates[index].desc;
    tree.enable_node(desc.parent)?;

    if tree.gates[index].state.enable_count == 0 {
        tree.modify(desc.register, dynamic_field(desc.bit, 1).val(1))?;
        debug!("gate {:?} on", desc.id);
    }
    tree.gates[index].state.enable_count += 1;
    Ok(())
}

pub(crate) fn disable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let desc = tree.gates[index].desc;
    match tree.gates[index].state.enable_count {
        0 => return Ok(()),
        1 => {
            tree.modify(desc.register, dynamic_field(desc.bit, 1).val(0))?;
            debug!("gate {:?} off", desc.id);
        }
        _ => {}
    }
    tree.gates[index].state.enable_count -= 1;
    tree.disable_node(desc.parent)
}

pub(crate) fn get_rate(tree: &ClockTree<'_>, index: usize) -> ClockRate {
    tree.gates[index].state.rate
}

pub(crate) fn fetch_parent(tree: &ClockTree<'_>, index: usize) -> ParentRef {
    tree.gates[index].desc.parent
}

pub(crate) fn fetch_index_for_output(id: ClockId) -> Option<usize> {
    GATES.iter().position(|desc| desc.output == Some(id))
}
