// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Fixed-ratio clock taps, such as the half-rate output of every PLL.

use super::node::{ClockRate, NodeState, ParentRef};
use super::output::ClockId;
use super::topology::{FixedFactorId, FIXED_FACTORS};
use super::ClockTree;
use crate::ClockError;

pub struct FixedFactorDesc {
    pub id: FixedFactorId,
    pub output: Option<ClockId>,
    pub parent: ParentRef,
    pub multiplier: u32,
    pub divisor: u32,
}

pub(crate) struct FixedFactorNode {
    pub(crate) desc: &'static FixedFactorDesc,
    pub(crate) state: NodeState,
}

impl FixedFactorNode {
    pub(crate) const fn new(desc: &'static FixedFactorDesc) -> FixedFactorNode {
        FixedFactorNode {
            desc,
            state: NodeState::new(),
        }
    }
}

pub(crate) const fn scale(parent_rate: ClockRate, multiplier: u32, divisor: u32) -> ClockRate {
    parent_rate * multiplier as u64 / divisor as u64
}

fn recalc(tree: &mut ClockTree<'_>, index: usize) {
    let desc = tree.fixed_factors[index].desc;
    let parent_rate = tree.fetch_rate(desc.parent);
    let state = &mut tree.fixed_factors[index].state;
    state.rate = scale(parent_rate, desc.multiplier, desc.divisor);
    state.is_init = true;
}

pub(crate) fn init(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    if tree.fixed_factors[index].state.is_init {
        return Ok(());
    }
    let desc = tree.fixed_factors[index].desc;
    tree.init_node(desc.parent)?;
    recalc(tree, index);
    Ok(())
}

pub(crate) fn update_rate(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let parent = tree.fixed_factors[index].desc.parent;
    tree.update_node_rate(parent)?;
    recalc(tree, index);
    Ok(())
}

pub(crate) fn enable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let parent = tree.fixed_factors[index].desc.parent;
    tree.enable_node(parent)?;
    tree.fixed_factors[index].state.enable_count += 1;
    Ok(())
}

pub(crate) fn disable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let node = &mut tree.fixed_factors[index];
    if node.state.enable_count == 0 {
        return Ok(());
    }
    node.state.enable_count -= 1;
    let parent = node.desc.parent;
    tree.disable_node(parent)
}

pub(crate) fn get_rate(tree: &ClockTree<'_>, index: usize) -> ClockRate {
    tree.fixed_factors[index].state.rate
}

pub(crate) fn fetch_parent(tree: &ClockTree<'_>, index: usize) -> ParentRef {
    tree.fixed_factors[index].desc.parent
}

pub(crate) fn fetch_index_for_output(id: ClockId) -> Option<usize> {
    FIXED_FACTORS.iter().position(|desc| desc.output == Some(id))
}

#[cfg(test)]
mod tests {
    use super::scale;

    #[test]
    fn half_rate() {
        assert_eq!(scale(1_500_000_000, 1, 2), 750_000_000);
        assert_eq!(scale(33_333_333, 1, 2), 16_666_666);
        assert_eq!(scale(0, 1, 2), 0);
    }

    #[test]
    fn multiplier_applied_before_divisor() {
        assert_eq!(scale(10, 3, 4), 7);
    }
}
