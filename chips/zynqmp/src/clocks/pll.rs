// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! ZynqMP phase-locked loops (IOPLL, RPLL, APLL, DPLL, VPLL).
//!
//! Each PLL multiplies the reference selected by its `PRE_SRC` mux by the
//! feedback divisor `FBDIV`. In fractional mode a 16-bit fraction from
//! `FRAC_CFG.DATA` is added to the feedback divisor:
//!
//! ```text
//! rate = parent * FBDIV + parent * DATA / 65536
//! ```
//!
//! # Implemented features
//!
//! - [x] Integer mode with `FBDIV` in [25, 125]
//! - [x] Fractional mode, kept inside the 1.5-3.0GHz VCO band
//! - [x] Bounded wait for lock after power-up and reprogramming
//! - [x] Critical PLLs that are never put back into reset
//!
//! # Missing features
//!
//! - [ ] Loop filter (`*_CFG`) tuning per feedback divisor
//! - [ ] Spread-spectrum configuration
//!
//! # Usage
//!
//! PLLs are never driven directly. Rate requests on an output clock reach the
//! PLL through [`ClockTree::set_rate`]:
//!
//! ```rust,ignore
//! // VPLL feeds the DisplayPort video clock
//! let rate = clocks.set_rate(ClockId::VpllInt, 2_275_000_000)?;
//! ```

use log::{debug, warn};
use tock_registers::LocalRegisterCopy;

use super::node::{div_round_closest, ClockRate, NodeState, ParentRef, INVALID_RATE};
use super::output::ClockId;
use super::topology::{PllId, PLLS};
use super::ClockTree;
use crate::hil::RegisterHandle;
use crate::registers::{dynamic_field, PLL_CTRL, PLL_FRAC_CFG};
use crate::ClockError;

/// Fixed-point scale of the fractional feedback word.
pub const FRAC_DIV: u64 = 1 << 16;
pub const FBDIV_MIN: u64 = 25;
pub const FBDIV_MAX: u64 = 125;
pub const VCO_MIN: ClockRate = 1_500_000_000;
pub const VCO_MAX: ClockRate = 3_000_000_000;

pub struct PllDesc {
    pub id: PllId,
    pub output: Option<ClockId>,
    /// Always the PLL's `PRE_SRC` mux.
    pub parent: ParentRef,
    pub ctrl: RegisterHandle,
    pub frac_cfg: RegisterHandle,
    /// `PLL_STATUS` register of the PLL's power domain.
    pub status: RegisterHandle,
    pub lock_bit: u8,
    /// Never put into reset once running.
    pub critical: bool,
}

pub(crate) struct PllNode {
    pub(crate) desc: &'static PllDesc,
    pub(crate) state: NodeState,
}

impl PllNode {
    pub(crate) const fn new(desc: &'static PllDesc) -> PllNode {
        PllNode {
            desc,
            state: NodeState::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PllMode {
    Integer,
    Fractional,
}

/// Register values realizing a rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PllSettings {
    pub mode: PllMode,
    pub fbdiv: u64,
    /// `FRAC_CFG.DATA`, always 0 in integer mode.
    pub frac: u64,
    pub rate: ClockRate,
}

const fn clamp_fbdiv(fbdiv: u64) -> u64 {
    if fbdiv < FBDIV_MIN {
        FBDIV_MIN
    } else if fbdiv > FBDIV_MAX {
        FBDIV_MAX
    } else {
        fbdiv
    }
}

/// Rate of a PLL programmed with `fbdiv` and, if fractional mode is enabled,
/// `frac`.
pub const fn pll_rate(parent_rate: ClockRate, fbdiv: u64, frac: Option<u64>) -> ClockRate {
    let rate = parent_rate * fbdiv;
    match frac {
        Some(frac) => rate + parent_rate * frac / FRAC_DIV,
        None => rate,
    }
}

/// Pick the operating mode for `target` and the rate that mode can reach.
///
/// A target that is an exact multiple of `parent_rate` (to 1/65536) keeps the
/// PLL in integer mode. Anything else selects fractional mode, where the
/// target is only moved into the VCO band.
pub const fn round_rate(parent_rate: ClockRate, target: ClockRate) -> (PllMode, ClockRate) {
    // Wide enough for any u64 target.
    let ratio = target as u128 * FRAC_DIV as u128 / parent_rate as u128;
    if ratio % FRAC_DIV as u128 != 0 {
        let mut rate = target;
        if rate > VCO_MAX {
            rate /= rate / VCO_MAX + 1;
        }
        if rate < VCO_MIN {
            rate *= VCO_MIN.div_ceil(rate);
        }
        return (PllMode::Fractional, rate);
    }

    let fbdiv = ratio / FRAC_DIV as u128;
    let fbdiv = if fbdiv > FBDIV_MAX as u128 {
        FBDIV_MAX
    } else {
        clamp_fbdiv(fbdiv as u64)
    };
    (PllMode::Integer, parent_rate * fbdiv)
}

/// Register values for the rate closest to `target`.
pub const fn settings_for(parent_rate: ClockRate, target: ClockRate) -> PllSettings {
    let (mode, rate) = round_rate(parent_rate, target);
    match mode {
        PllMode::Integer => PllSettings {
            mode,
            fbdiv: rate / parent_rate,
            frac: 0,
            rate,
        },
        PllMode::Fractional => {
            let ratio = div_round_closest(rate * FRAC_DIV, parent_rate);
            let fbdiv = clamp_fbdiv(ratio / FRAC_DIV);
            let frac = ratio % FRAC_DIV;
            PllSettings {
                mode,
                fbdiv,
                frac,
                rate: pll_rate(parent_rate, fbdiv, Some(frac)),
            }
        }
    }
}

fn recalc(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let desc = tree.plls[index].desc;
    let ctrl = tree.fetch_register::<PLL_CTRL::Register>(desc.ctrl)?;
    let frac_cfg = tree.fetch_register::<PLL_FRAC_CFG::Register>(desc.frac_cfg)?;
    let parent_rate = tree.fetch_rate(desc.parent);

    let frac = if frac_cfg.is_set(PLL_FRAC_CFG::ENABLED) {
        Some(frac_cfg.read(PLL_FRAC_CFG::DATA) as u64)
    } else {
        None
    };

    let state = &mut tree.plls[index].state;
    state.rate = pll_rate(parent_rate, ctrl.read(PLL_CTRL::FBDIV) as u64, frac);
    state.is_init = true;
    Ok(())
}

fn is_locked(tree: &ClockTree<'_>, desc: &PllDesc) -> Result<bool, ClockError> {
    let status: LocalRegisterCopy<u32, ()> = tree.fetch_register(desc.status)?;
    Ok(status.is_set(dynamic_field(desc.lock_bit, 1)))
}

/// Poll the domain's `PLL_STATUS` until the lock bit of `desc` is set.
///
/// # Errors
///
/// + [Err]\([ClockError::HardwareTimeout]\): the PLL did not lock within
/// `pll_lock_poll_limit` polls.
fn wait_for_lock(tree: &ClockTree<'_>, desc: &PllDesc) -> Result<(), ClockError> {
    for _ in 0..tree.config().pll_lock_poll_limit {
        if is_locked(tree, desc)? {
            return Ok(());
        }
    }
    warn!("{:?} failed to lock", desc.id);
    Err(ClockError::HardwareTimeout)
}

// A PLL left running and locked by the boot loader is taken over untouched.
fn power_up(tree: &ClockTree<'_>, desc: &PllDesc) -> Result<(), ClockError> {
    let ctrl = tree.fetch_register::<PLL_CTRL::Register>(desc.ctrl)?;
    if !ctrl.is_set(PLL_CTRL::RESET) && !ctrl.is_set(PLL_CTRL::BYPASS) && is_locked(tree, desc)? {
        return Ok(());
    }
    tree.modify(desc.ctrl, PLL_CTRL::RESET::CLEAR)?;
    tree.modify(desc.ctrl, PLL_CTRL::BYPASS::CLEAR)?;
    wait_for_lock(tree, desc)
}

fn power_down(tree: &ClockTree<'_>, desc: &PllDesc) -> Result<(), ClockError> {
    tree.modify(desc.ctrl, PLL_CTRL::BYPASS::SET)?;
    tree.modify(desc.ctrl, PLL_CTRL::RESET::SET)
}

fn commit(
    tree: &mut ClockTree<'_>,
    index: usize,
    settings: &PllSettings,
) -> Result<(), ClockError> {
    let desc = tree.plls[index].desc;
    let running = tree.plls[index].state.is_enabled();

    if running {
        tree.modify(desc.ctrl, PLL_CTRL::BYPASS::SET)?;
    }
    match settings.mode {
        PllMode::Fractional => tree.modify(
            desc.frac_cfg,
            PLL_FRAC_CFG::ENABLED::SET + PLL_FRAC_CFG::DATA.val(settings.frac as u32),
        )?,
        PllMode::Integer => tree.modify(
            desc.frac_cfg,
            PLL_FRAC_CFG::ENABLED::CLEAR + PLL_FRAC_CFG::DATA.val(0),
        )?,
    }
    tree.modify(desc.ctrl, PLL_CTRL::FBDIV.val(settings.fbdiv as u32))?;
    if running {
        wait_for_lock(tree, desc)?;
        tree.modify(desc.ctrl, PLL_CTRL::BYPASS::CLEAR)?;
    }

    let state = &mut tree.plls[index].state;
    state.rate = settings.rate;
    state.is_init = true;
    debug!(
        "{:?} -> {} Hz ({:?}, fbdiv {}, frac {})",
        desc.id, settings.rate, settings.mode, settings.fbdiv, settings.frac
    );
    Ok(())
}

pub(crate) fn init(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    if tree.plls[index].state.is_init {
        return Ok(());
    }
    let parent = tree.plls[index].desc.parent;
    tree.init_node(parent)?;
    recalc(tree, index)
}

pub(crate) fn update_rate(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let parent = tree.plls[index].desc.parent;
    tree.update_node_rate(parent)?;
    recalc(tree, index)
}

/// Take a reference on the PLL, powering it up and waiting for lock on the
/// first one.
///
/// # Errors
///
/// + [Err]\([ClockError::HardwareTimeout]\): the PLL did not lock. The
/// reference is not taken and the PLL is left out of reset.
pub(crate) fn enable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let desc = tree.plls[index].desc;
    tree.enable_node(desc.parent)?;

    if tree.plls[index].state.enable_count == 0 {
        power_up(tree, desc)?;
        debug!("{:?} locked", desc.id);
    }
    tree.plls[index].state.enable_count += 1;
    Ok(())
}

pub(crate) fn disable(tree: &mut ClockTree<'_>, index: usize) -> Result<(), ClockError> {
    let desc = tree.plls[index].desc;
    match tree.plls[index].state.enable_count {
        0 => return Ok(()),
        1 if !desc.critical => {
            power_down(tree, desc)?;
            debug!("{:?} in reset", desc.id);
        }
        _ => {}
    }
    tree.plls[index].state.enable_count -= 1;
    tree.disable_node(desc.parent)
}

pub(crate) fn get_rate(tree: &ClockTree<'_>, index: usize) -> ClockRate {
    tree.plls[index].state.rate
}

/// Compute, and unless `dry_run` program, the rate closest to `target`.
///
/// # Errors
///
/// + [Err]\([ClockError::InvalidParameter]\): the reference clock or the
/// target is 0
pub(crate) fn set_rate(
    tree: &mut ClockTree<'_>,
    index: usize,
    parent_rate: ClockRate,
    target: ClockRate,
    dry_run: bool,
) -> Result<ClockRate, ClockError> {
    if parent_rate == INVALID_RATE || target == INVALID_RATE {
        return Err(ClockError::InvalidParameter);
    }

    let settings = settings_for(parent_rate, target);
    if !dry_run {
        commit(tree, index, &settings)?;
    }
    Ok(settings.rate)
}

pub(crate) fn fetch_parent(tree: &ClockTree<'_>, index: usize) -> ParentRef {
    tree.plls[index].desc.parent
}

pub(crate) fn fetch_index_for_output(id: ClockId) -> Option<usize> {
    PLLS.iter().position(|desc| desc.output == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: ClockRate = 33_333_333;

    #[test]
    fn integer_multiple_stays_integer() {
        for fbdiv in FBDIV_MIN..=FBDIV_MAX {
            let target = REF * fbdiv;
            let settings = settings_for(REF, target);
            assert_eq!(settings.mode, PllMode::Integer, "fbdiv {}", fbdiv);
            assert_eq!(settings.fbdiv, fbdiv);
            assert_eq!(settings.frac, 0);
            assert_eq!(settings.rate, target);
        }
    }

    #[test]
    fn integer_mode_clamps_feedback_divisor() {
        assert_eq!(round_rate(REF, REF * 10), (PllMode::Integer, REF * FBDIV_MIN));
        assert_eq!(round_rate(REF, REF * 200), (PllMode::Integer, REF * FBDIV_MAX));
        assert_eq!(settings_for(REF, REF * 10).fbdiv, FBDIV_MIN);
        assert_eq!(settings_for(REF, REF * 200).fbdiv, FBDIV_MAX);
    }

    #[test]
    fn over_band_exact_multiple_stays_integer() {
        // 105 * REF lies above the band but is a whole multiple
        let settings = settings_for(REF, REF * 105);
        assert_eq!(settings.mode, PllMode::Integer);
        assert_eq!(settings.fbdiv, 105);
        assert_eq!(settings.rate, REF * 105);
    }

    #[test]
    fn huge_targets_do_not_overflow() {
        for target in [1u64 << 50, u64::MAX / 2, u64::MAX] {
            let settings = settings_for(REF, target);
            assert!((FBDIV_MIN..=FBDIV_MAX).contains(&settings.fbdiv), "{}", target);
            assert!(settings.rate <= REF * FBDIV_MAX, "{}", target);
        }
        assert_eq!(round_rate(REF, REF << 30), (PllMode::Integer, REF * FBDIV_MAX));
    }

    #[test]
    fn half_step_ratio_is_fractional() {
        let settings = settings_for(50_000_000, 2_275_000_000);
        assert_eq!(settings.mode, PllMode::Fractional);
        assert_eq!(settings.fbdiv, 45);
        assert_eq!(settings.frac, 32768);
        assert_eq!(settings.rate, 2_275_000_000);
    }

    #[test]
    fn fractional_word_tracks_remainder() {
        let parent = 50_000_000u64;
        for step in 1..64u64 {
            let target = parent * 40 + parent * step / 64;
            let settings = settings_for(parent, target);
            assert_eq!(settings.mode, PllMode::Fractional);
            assert_eq!(settings.fbdiv, 40);
            assert_eq!(settings.frac, step * FRAC_DIV / 64);
            assert_eq!(settings.rate, target);
        }
    }

    #[test]
    fn fractional_targets_are_moved_into_the_vco_band() {
        let target = REF * 105 + REF / 2;
        let (mode, rate) = round_rate(REF, target);
        assert_eq!(mode, PllMode::Fractional);
        assert_eq!(rate, target / 2);
        assert!((VCO_MIN..=VCO_MAX).contains(&rate), "{}", rate);

        let (mode, rate) = round_rate(REF, 1_000_000_001);
        assert_eq!(mode, PllMode::Fractional);
        assert_eq!(rate, 2_000_000_002);
    }

    #[test]
    fn rate_formula() {
        assert_eq!(pll_rate(REF, 45, None), 1_499_999_985);
        assert_eq!(pll_rate(50_000_000, 45, Some(32768)), 2_275_000_000);
        assert_eq!(pll_rate(0, 45, Some(32768)), 0);
    }
}
