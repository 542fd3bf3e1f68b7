// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Clock multiplexers.
//!
//! A mux forwards one of up to eight candidate parents, chosen by a `SRCSEL`
//! style field of its control register. The selection found in hardware at
//! init becomes the mux's default. Candidates marked
//! [`ParentRef::Invalid`] correspond to reserved selector values and can
//! never be selected; [`ParentRef::External`] candidates are fed from pins the
//! tree does not model, so their rate is unknown.

use log::{debug, warn};

use super::node::{ClockRate, NodeState, ParentRef, INVALID_RATE};
use super::output::ClockId;
use super::topology::{MuxId, MUXES};
use super::ClockTree;
use crate::hil::RegisterHandle;
use crate::registers::dynamic_field;
use crate::ClockError;

pub struct MuxDesc {
    pub id: MuxId,
    pub output: Option<ClockId>,
    /// Parent for each selector value. Shared between muxes with the same
    /// wiring.
    pub candidates: &'static [ParentRef],
    pub register: RegisterHandle,
    pub shift: u8,
    pub width: u8,
}

pub(crate) struct MuxNode {
    pub(crate) desc: &'static MuxDesc,
    pub(crate) state: NodeState,
    /// Selection made through [`set_active_parent`], if any.
    pub(crate) active: Option<u8>,
    /// Selection read from hardware at init.
    pub(crate) default: u8,
    /// `default` holds the hardware selection. Stays set for muxes fed from
    /// an unmanaged source, which never become initialized.
    pub(crate) default_read: bool,
}

impl MuxNode {
    pub(crate) const fn new(desc: &'static MuxDesc) -> MuxNode {
        MuxNode {
            desc,
            state: NodeState::new(),
            active: None,
            default: 0,
            default_read: false,
        }
    }

    fn selected(&self) -> u8 {
        self.active.unwrap_or(self.default)
    }

    fn candidate(&self, index: u8) -> ParentRef {
        self.desc
            .candidates
            .get(index as usize)
            .copied()
            .unwrap_or(ParentRef::Invalid)
    }

    fn parent(&self) -> ParentRef {
        self.candidate(self.selected())
    }
}

fn mirror_parent(tree: &mut ClockTree<'_>, index: usize, parent: ParentRef) {
    let parent_rate = match parent {
        ParentRef::External | ParentRef::Invalid => INVALID_RATE,
        parent => tree.fetch_rate(parent),
    };
    let state = &mut tree.muxes[index].state;
    state.rate = parent_rate;
    state.is_init = true;
}

/// Learn the default selection from the selector field.
fn read_default(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let desc = tree.muxes[index].desc;
    let field = dynamic_field(desc.shift, desc.width);
    let selected = tree.fetch_register(desc.register)?.read(field) as u8;

    let node = &mut tree.muxes[index];
    node.default = match node.candidate(selected) {
        ParentRef::Invalid => {
            warn!("{:?}: selector {} is reserved, assuming 0", desc.id, selected);
            0
        }
        _ => selected,
    };
    node.default_read = true;
    Ok(())
}

pub(crate) fn init(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    if tree.muxes[index].state.is_init {
        return Ok(());
    }
    let node = &tree.muxes[index];
    if node.active.is_none() && !node.default_read {
        read_default(tree, index)?;
    }

    let parent = tree.muxes[index].parent();
    match parent {
        // Unmanaged source, stay uninitialized.
        ParentRef::External | ParentRef::Invalid => Ok(()),
        parent => {
            tree.init_node(parent)?;
            mirror_parent(tree, index, parent);
            Ok(())
        }
    }
}

pub(crate) fn update_rate(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    if !tree.muxes[index].state.is_init {
        return init(tree, index);
    }

    let parent = tree.muxes[index].parent();
    if parent.node().is_some() {
        tree.update_node_rate(parent)?;
    }
    mirror_parent(tree, index, parent);
    Ok(())
}

pub(crate) fn enable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let node = &mut tree.muxes[index];
    if node.active.is_none() {
        node.active = Some(node.default);
    }

    let parent = node.parent();
    if parent.node().is_some() {
        tree.enable_node(parent)?;
    }
    tree.muxes[index].state.enable_count += 1;
    Ok(())
}

pub(crate) fn disable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let node = &mut tree.muxes[index];
    if node.state.enable_count == 0 {
        return Ok(());
    }
    node.state.enable_count -= 1;

    let parent = node.parent();
    if parent.node().is_some() {
        tree.disable_node(parent)?;
    }
    Ok(())
}

pub(crate) fn get_rate(tree: &ClockTree<'_>, index: usize) -> ClockRate {
    tree.muxes[index].state.rate
}

/// Switch mux `index` to candidate `candidate`.
///
/// If the mux carries holds, the new source is enabled before the selector
/// is written so the output is never left without a running clock, and every
/// hold is then moved from the old parent to the new one. An idle mux only
/// initializes the new source. Cached rates are not recomputed here.
///
/// # Errors
///
/// + [Err]\([ClockError::InvalidParameter]\): `candidate` is out of range or
/// names a reserved selector value. Nothing is written.
/// + [Err]\([ClockError::HardwareIoFailure]\): enabling the new parent or
/// writing the selector failed
pub(crate) fn set_active_parent(
    tree: &mut ClockTree<'_>,
    index: usize,
    candidate: u8,
) -> Result<(), ClockError> {
    let node = &tree.muxes[index];
    let desc = node.desc;
    let new_parent = node.candidate(candidate);
    if new_parent == ParentRef::Invalid {
        return Err(ClockError::InvalidParameter);
    }
    let old_parent = node.parent();
    let holds = node.state.enable_count;

    tree.init_node(new_parent)?;
    if holds > 0 {
        tree.enable_node(new_parent)?;
    }
    let field = dynamic_field(desc.shift, desc.width);
    tree.modify(desc.register, field.val(candidate as u32))?;
    tree.muxes[index].active = Some(candidate);
    debug!("{:?} -> {:?}", desc.id, new_parent);

    for _ in 1..holds {
        tree.enable_node(new_parent)?;
    }
    for _ in 0..holds {
        tree.disable_node(old_parent)?;
    }
    Ok(())
}

pub(crate) fn fetch_parent(tree: &ClockTree<'_>, index: usize) -> ParentRef {
    tree.muxes[index].parent()
}

pub(crate) fn fetch_index_for_output(id: ClockId) -> Option<usize> {
    MUXES.iter().position(|desc| desc.output == Some(id))
}
