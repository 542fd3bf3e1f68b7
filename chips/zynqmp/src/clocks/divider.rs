// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Integer clock dividers.
//!
//! Every divider is a 6-bit `DIVISOR` field of a `*_CTRL` register. A field
//! value of 0 passes the parent clock through; any other value `n` produces
//! `ceil(parent / n)`.
//!
//! Clocks with two stages (`DIVISOR0` followed by `DIVISOR1`) reach total
//! ratios up to 63 × 63. [`split_divisor`] factors a total ratio across the
//! two stages.
//!
//! # Implemented features
//!
//! - [x] Nearest-divisor rate selection for a single stage
//! - [x] Two-stage factoring with minimal rounding error
//! - [x] Dry-run rate queries
//!
//! # Missing features
//!
//! - [ ] Duty-cycle correction for odd divisors

use log::debug;

use super::node::{div_round_closest, ClockRate, NodeState, ParentRef, INVALID_RATE};
use super::output::ClockId;
use super::topology::{DividerId, DIVIDERS};
use super::ClockTree;
use crate::hil::RegisterHandle;
use crate::registers::dynamic_field;
use crate::ClockError;

pub const DIVISOR_WIDTH: u8 = 6;
pub const DIVISOR_MAX: u64 = (1 << DIVISOR_WIDTH) - 1;

pub struct DividerDesc {
    pub id: DividerId,
    pub output: Option<ClockId>,
    pub parent: ParentRef,
    pub register: RegisterHandle,
    /// Offset of the divisor field in `register`.
    pub shift: u8,
}

pub(crate) struct DividerNode {
    pub(crate) desc: &'static DividerDesc,
    pub(crate) state: NodeState,
}

impl DividerNode {
    pub(crate) const fn new(desc: &'static DividerDesc) -> DividerNode {
        DividerNode {
            desc,
            state: NodeState::new(),
        }
    }
}

/// Output rate of a divider whose field holds `divisor`.
pub const fn divided_rate(parent_rate: ClockRate, divisor: u64) -> ClockRate {
    if divisor == 0 {
        parent_rate
    } else {
        parent_rate.div_ceil(divisor)
    }
}

/// Divisor closest to `parent_rate / target`, clamped to the field range.
pub const fn divisor_for(parent_rate: ClockRate, target: ClockRate) -> u64 {
    let divisor = div_round_closest(parent_rate, target);
    if divisor < 1 {
        1
    } else if divisor > DIVISOR_MAX {
        DIVISOR_MAX
    } else {
        divisor
    }
}

/// Split a total division ratio into `(first, second)` stage divisors.
///
/// Ratios that fit a single stage are programmed into the first stage with
/// the second passing through. Larger ratios are factored by scanning the
/// first-stage divisor upwards from 2 and keeping the first candidate with the
/// smallest remainder; candidates whose quotient does not fit the second stage
/// are skipped. The second stage takes the truncated quotient, so the product
/// never exceeds `ideal`.
pub const fn split_divisor(ideal: u64) -> (u64, u64) {
    if ideal <= DIVISOR_MAX {
        return (if ideal == 0 { 1 } else { ideal }, 1);
    }

    let mut best = (DIVISOR_MAX, DIVISOR_MAX);
    let mut best_remainder = u64::MAX;
    let mut first = 2;
    while first <= DIVISOR_MAX {
        let second = ideal / first;
        if second <= DIVISOR_MAX {
            let remainder = ideal % first;
            if remainder < best_remainder {
                best_remainder = remainder;
                best = (first, second);
            }
        }
        first += 1;
    }
    best
}

fn divisor_field(desc: &DividerDesc) -> tock_registers::fields::Field<u32, ()> {
    dynamic_field(desc.shift, DIVISOR_WIDTH)
}

fn recalc(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let desc = tree.dividers[index].desc;
    let divisor = tree.fetch_register(desc.register)?.read(divisor_field(desc));
    let parent_rate = tree.fetch_rate(desc.parent);

    let state = &mut tree.dividers[index].state;
    state.rate = divided_rate(parent_rate, divisor as u64);
    state.is_init = true;
    Ok(())
}

/// Write `divisor` to the field of divider `index` and cache the result.
fn program(
    tree: &mut ClockTree<'_>,
    index: usize,
    parent_rate: ClockRate,
    divisor: u64,
) -> Result<ClockRate, ClockError> {
    let desc = tree.dividers[index].desc;
    tree.modify(desc.register, divisor_field(desc).val(divisor as u32))?;

    let rate = divided_rate(parent_rate, divisor);
    let state = &mut tree.dividers[index].state;
    state.rate = rate;
    state.is_init = true;
    debug!("divider {:?} = {} ({} Hz)", desc.id, divisor, rate);
    Ok(rate)
}

pub(crate) fn init(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    if tree.dividers[index].state.is_init {
        return Ok(());
    }
    let parent = tree.dividers[index].desc.parent;
    tree.init_node(parent)?;
    recalc(tree, index)
}

pub(crate) fn update_rate(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let parent = tree.dividers[index].desc.parent;
    tree.update_node_rate(parent)?;
    recalc(tree, index)
}

pub(crate) fn enable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let parent = tree.dividers[index].desc.parent;
    tree.enable_node(parent)?;
    tree.dividers[index].state.enable_count += 1;
    Ok(())
}

pub(crate) fn disable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let node = &mut tree.dividers[index];
    if node.state.enable_count == 0 {
        return Ok(());
    }
    node.state.enable_count -= 1;
    let parent = node.desc.parent;
    tree.disable_node(parent)
}

pub(crate) fn get_rate(tree: &ClockTree<'_>, index: usize) -> ClockRate {
    tree.dividers[index].state.rate
}

/// Program a single divider for `target` given its input `parent_rate`.
///
/// Targets above the parent rate cannot be reached by dividing and leave the
/// divider untouched.
///
/// # Errors
///
/// + [Err]\([ClockError::InvalidParameter]\): `target` is 0
/// + [Err]\([ClockError::HardwareIoFailure]\): the field could not be written
pub(crate) fn set_rate(
    tree: &mut ClockTree<'_>,
    index: usize,
    parent_rate: ClockRate,
    target: ClockRate,
    dry_run: bool,
) -> Result<ClockRate, ClockError> {
    if target == INVALID_RATE {
        return Err(ClockError::InvalidParameter);
    }
    if target > parent_rate {
        return Ok(tree.dividers[index].state.rate);
    }

    let divisor = divisor_for(parent_rate, target);
    if dry_run {
        Ok(divided_rate(parent_rate, divisor))
    } else {
        program(tree, index, parent_rate, divisor)
    }
}

/// Program a two-stage divider chain for `target`.
///
/// `first` is the stage fed by `parent_rate`, `second` is fed by `first`.
pub(crate) fn set_rate_two_stage(
    tree: &mut ClockTree<'_>,
    first: usize,
    second: usize,
    parent_rate: ClockRate,
    target: ClockRate,
) -> Result<ClockRate, ClockError> {
    if target == INVALID_RATE {
        return Err(ClockError::InvalidParameter);
    }

    let (first_divisor, second_divisor) = split_divisor(div_round_closest(parent_rate, target));
    let intermediate = program(tree, first, parent_rate, first_divisor)?;
    program(tree, second, intermediate, second_divisor)
}

pub(crate) fn fetch_parent(tree: &ClockTree<'_>, index: usize) -> ParentRef {
    tree.dividers[index].desc.parent
}

pub(crate) fn fetch_index_for_output(id: ClockId) -> Option<usize> {
    DIVIDERS.iter().position(|desc| desc.output == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_field_passes_through() {
        assert_eq!(divided_rate(100_000_000, 0), 100_000_000);
        assert_eq!(divided_rate(100_000_000, 1), 100_000_000);
        assert_eq!(divided_rate(100_000_000, 3), 33_333_334);
    }

    #[test]
    fn single_stage_stays_within_half_a_step() {
        let parents = [
            1_000u64,
            33_333_333,
            375_000_000,
            999_999_990,
            1_428_571_000,
            1_500_000_000,
        ];
        for parent in parents {
            let mut target = 1u64.max(parent / 200);
            while target <= parent {
                let divisor = divisor_for(parent, target);
                let achieved = divided_rate(parent, divisor);
                assert!((1..=DIVISOR_MAX).contains(&divisor));
                // Rounding the divisor to nearest may overshoot it by half a
                // step, so the rate can fall below the target by at most
                // target / (2 * divisor).
                assert!(
                    2 * divisor * achieved >= target * (2 * divisor - 1),
                    "parent {} target {} divisor {}",
                    parent,
                    target,
                    divisor
                );
                if parent % target == 0 {
                    assert!(achieved >= target);
                }
                target += 1u64.max(parent / 997);
            }
        }
    }

    #[test]
    fn divisor_is_clamped() {
        assert_eq!(divisor_for(1_000_000_000, 1), DIVISOR_MAX);
        assert_eq!(divisor_for(100, 100), 1);
        assert_eq!(divisor_for(100, 99), 1);
    }

    #[test]
    fn single_stage_ratio_uses_first_stage_only() {
        for ideal in 0..=DIVISOR_MAX {
            let (first, second) = split_divisor(ideal);
            assert_eq!(first, ideal.max(1));
            assert_eq!(second, 1);
        }
    }

    #[test]
    fn two_stage_split_is_in_range_and_optimal() {
        for ideal in (DIVISOR_MAX + 1)..=(DIVISOR_MAX * DIVISOR_MAX) {
            let (first, second) = split_divisor(ideal);
            assert!((2..=DIVISOR_MAX).contains(&first), "ideal {}", ideal);
            assert!((1..=DIVISOR_MAX).contains(&second), "ideal {}", ideal);
            assert!(first * second <= ideal);

            let error = ideal - first * second;
            for candidate in 2..=DIVISOR_MAX {
                let quotient = ideal / candidate;
                if quotient > DIVISOR_MAX {
                    continue;
                }
                assert!(
                    ideal - candidate * quotient >= error,
                    "ideal {}: {}x{} beats {}x{}",
                    ideal,
                    candidate,
                    quotient,
                    first,
                    second
                );
            }
        }
    }

    #[test]
    fn two_stage_ties_keep_the_first_candidate() {
        // 1000 = 20 x 50 = 25 x 40; 20 is scanned first.
        assert_eq!(split_divisor(1000), (20, 50));
        // 64 = 2 x 32 = 4 x 16 = 8 x 8
        assert_eq!(split_divisor(64), (2, 32));
        // Prime above 63: every candidate leaves a remainder.
        let (first, second) = split_divisor(67);
        assert_eq!(67 - first * second, 1);
    }

    #[test]
    fn ratio_beyond_two_stages_saturates() {
        assert_eq!(split_divisor(DIVISOR_MAX * DIVISOR_MAX + 100), (63, 63));
        assert_eq!(split_divisor(u64::MAX / 2), (63, 63));
    }

    #[test]
    fn i2c_reference_factoring() {
        let parent = 1_428_571_000;

        let ideal = div_round_closest(parent, 33_330_000);
        assert_eq!(ideal, 43);
        let (first, second) = split_divisor(ideal);
        assert_eq!((first, second), (43, 1));
        let achieved = divided_rate(divided_rate(parent, first), second);
        assert_eq!(achieved, 33_222_582);

        let ideal = div_round_closest(parent, 1_428_428);
        assert_eq!(ideal, 1000);
        let (first, second) = split_divisor(ideal);
        assert_eq!((first, second), (20, 50));
        assert_eq!(divided_rate(divided_rate(parent, first), second), 1_428_571);
    }
}
