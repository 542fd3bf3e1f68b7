// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! ZynqMP clock topology.
//!
//! The tree is fixed by the silicon, so it is described entirely by the
//! constant tables below: one table per node kind, indexed by that kind's
//! identifier enum. The algorithms in the sibling modules only ever see the
//! table entries, never a specific clock.
//!
//! Most peripheral clocks follow the same pattern inside a single `*_CTRL`
//! register:
//!
//! ```text
//!  SRCSEL[2:0]     DIVISOR0[13:8]    DIVISOR1[21:16]    CLKACT[24..26]
//!  reference mux -> first divider -> [second divider] -> gate(s) -> output
//! ```
//!
//! The reference mux chooses between PLL outputs of the local power domain
//! and a PLL of the other domain reached through a `*_TO_LPD`/`*_TO_FPD`
//! divider. Selector slot 1 is reserved on every reference mux.

use tock_registers::fields::Field;

use super::divider::DividerDesc;
use super::fixed_factor::FixedFactorDesc;
use super::gate::GateDesc;
use super::ip::IpDesc;
use super::mux::MuxDesc;
use super::node::ParentRef;
use super::output::ClockId;
use super::pll::PllDesc;
use crate::hil::RegisterHandle;
use crate::registers::*;

/// Off-chip input clocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum IpId {
    PssRef,
    Video,
    PssAltRef,
    AuxRef,
    GtCrxRef,
}

impl IpId {
    pub const COUNT: usize = IpId::GtCrxRef as usize + 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PllId {
    Iopll,
    Rpll,
    Apll,
    Dpll,
    Vpll,
}

impl PllId {
    pub const COUNT: usize = PllId::Vpll as usize + 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MuxId {
    IopllPreSrc,
    IopllIntMux,
    IopllPostSrc,
    Iopll,
    RpllPreSrc,
    RpllIntMux,
    RpllPostSrc,
    Rpll,
    ApllPreSrc,
    ApllIntMux,
    ApllPostSrc,
    Apll,
    DpllPreSrc,
    DpllIntMux,
    DpllPostSrc,
    Dpll,
    VpllPreSrc,
    VpllIntMux,
    VpllPostSrc,
    Vpll,
    Acpu,
    Wdt,
    Ddr,
    Pl0,
    Pl1,
    Pl2,
    Pl3,
    DbgTrace,
    DbgFpd,
    DbgLpd,
    DbgTstmp,
    DpVideo,
    DpAudio,
    DpStc,
    Gpu,
    Sata,
    Pcie,
    FpdDma,
    Dpdma,
    TopswMain,
    TopswLsbus,
    Gtgref0,
    Usb3Dual,
    Usb0Bus,
    Usb1Bus,
    Gem0Ref,
    Gem0Tx,
    Gem1Ref,
    Gem1Tx,
    Gem2Ref,
    Gem2Tx,
    Gem3Ref,
    Gem3Tx,
    GemTsuRef,
    GemTsu,
    Qspi,
    Sdio0,
    Sdio1,
    Uart0,
    Uart1,
    Spi0,
    Spi1,
    Can0Ref,
    Can0Mio,
    Can0,
    Can1Ref,
    Can1Mio,
    Can1,
    CpuR5,
    IouSwitch,
    CsuPll,
    Pcap,
    LpdSwitch,
    LpdLsbus,
    Nand,
    Adma,
    DllRef,
    Ams,
    I2c0,
    I2c1,
    Timestamp,
}

impl MuxId {
    pub const COUNT: usize = MuxId::Timestamp as usize + 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DividerId {
    IopllToFpd,
    RpllToFpd,
    ApllToLpd,
    DpllToLpd,
    VpllToLpd,
    AcpuDiv0,
    DdrDiv0,
    Pl0Div0,
    Pl0Div1,
    Pl1Div0,
    Pl1Div1,
    Pl2Div0,
    Pl2Div1,
    Pl3Div0,
    Pl3Div1,
    DbgTraceDiv0,
    DbgFpdDiv0,
    DbgLpdDiv0,
    DbgTstmpDiv0,
    DpVideoDiv0,
    DpVideoDiv1,
    DpAudioDiv0,
    DpAudioDiv1,
    DpStcDiv0,
    DpStcDiv1,
    GpuDiv0,
    SataDiv0,
    PcieDiv0,
    FpdDmaDiv0,
    DpdmaDiv0,
    TopswMainDiv0,
    TopswLsbusDiv0,
    Gtgref0Div0,
    Usb3DualDiv0,
    Usb3DualDiv1,
    Usb0BusDiv0,
    Usb0BusDiv1,
    Usb1BusDiv0,
    Usb1BusDiv1,
    Gem0RefDiv0,
    Gem0RefDiv1,
    Gem1RefDiv0,
    Gem1RefDiv1,
    Gem2RefDiv0,
    Gem2RefDiv1,
    Gem3RefDiv0,
    Gem3RefDiv1,
    GemTsuRefDiv0,
    GemTsuRefDiv1,
    QspiDiv0,
    QspiDiv1,
    Sdio0Div0,
    Sdio0Div1,
    Sdio1Div0,
    Sdio1Div1,
    Uart0Div0,
    Uart0Div1,
    Uart1Div0,
    Uart1Div1,
    Spi0Div0,
    Spi0Div1,
    Spi1Div0,
    Spi1Div1,
    Can0RefDiv0,
    Can0RefDiv1,
    Can1RefDiv0,
    Can1RefDiv1,
    CpuR5Div0,
    IouSwitchDiv0,
    CsuPllDiv0,
    PcapDiv0,
    LpdSwitchDiv0,
    LpdLsbusDiv0,
    NandDiv0,
    NandDiv1,
    AdmaDiv0,
    AmsDiv0,
    AmsDiv1,
    I2c0Div0,
    I2c0Div1,
    I2c1Div0,
    I2c1Div1,
    TimestampDiv0,
}

impl DividerId {
    pub const COUNT: usize = DividerId::TimestampDiv0 as usize + 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum GateId {
    Acpu,
    AcpuHalf,
    Pl0,
    Pl1,
    Pl2,
    Pl3,
    DbgTrace,
    DbgFpd,
    DbgLpd,
    DpVideoRef,
    DpAudioRef,
    DpStcRef,
    GpuRef,
    GpuPp0Ref,
    GpuPp1Ref,
    Sata,
    Pcie,
    FpdDma,
    Dpdma,
    TopswMain,
    TopswLsbus,
    Gtgref0,
    Usb3Dual,
    Usb0Bus,
    Usb1Bus,
    Gem0Ref,
    Gem0Rx,
    Gem1Ref,
    Gem1Rx,
    Gem2Ref,
    Gem2Rx,
    Gem3Ref,
    Gem3Rx,
    GemTsuRef,
    Qspi,
    Sdio0,
    Sdio1,
    Uart0,
    Uart1,
    Spi0,
    Spi1,
    Can0Ref,
    Can1Ref,
    CpuR5Core,
    IouSwitch,
    CsuPll,
    Pcap,
    LpdSwitch,
    LpdLsbus,
    Nand,
    Adma,
    Ams,
    I2c0,
    I2c1,
    Timestamp,
}

impl GateId {
    pub const COUNT: usize = GateId::Timestamp as usize + 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FixedFactorId {
    IopllIntHalf,
    RpllIntHalf,
    ApllIntHalf,
    DpllIntHalf,
    VpllIntHalf,
    AcpuHalf,
}

impl FixedFactorId {
    pub const COUNT: usize = FixedFactorId::AcpuHalf as usize + 1;
}


// Candidate tables. Tables are shared by every mux with the same wiring.

const PLL_SRC_PARENTS: &[ParentRef] = &[
    ParentRef::Ip(IpId::PssRef),
    ParentRef::Ip(IpId::PssRef),
    ParentRef::Ip(IpId::PssRef),
    ParentRef::Ip(IpId::PssRef),
    ParentRef::Ip(IpId::Video),
    ParentRef::Ip(IpId::PssAltRef),
    ParentRef::Ip(IpId::AuxRef),
    ParentRef::Ip(IpId::GtCrxRef),
];

const IOPLL_INT_PARENTS: &[ParentRef] = &[
    ParentRef::Pll(PllId::Iopll),
    ParentRef::FixedFactor(FixedFactorId::IopllIntHalf),
];
const IOPLL_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Mux(MuxId::IopllPostSrc),
];
const RPLL_INT_PARENTS: &[ParentRef] = &[
    ParentRef::Pll(PllId::Rpll),
    ParentRef::FixedFactor(FixedFactorId::RpllIntHalf),
];
const RPLL_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::RpllIntMux),
    ParentRef::Mux(MuxId::RpllPostSrc),
];
const APLL_INT_PARENTS: &[ParentRef] = &[
    ParentRef::Pll(PllId::Apll),
    ParentRef::FixedFactor(FixedFactorId::ApllIntHalf),
];
const APLL_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Mux(MuxId::ApllPostSrc),
];
const DPLL_INT_PARENTS: &[ParentRef] = &[
    ParentRef::Pll(PllId::Dpll),
    ParentRef::FixedFactor(FixedFactorId::DpllIntHalf),
];
const DPLL_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::DpllIntMux),
    ParentRef::Mux(MuxId::DpllPostSrc),
];
const VPLL_INT_PARENTS: &[ParentRef] = &[
    ParentRef::Pll(PllId::Vpll),
    ParentRef::FixedFactor(FixedFactorId::VpllIntHalf),
];
const VPLL_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::VpllIntMux),
    ParentRef::Mux(MuxId::VpllPostSrc),
];

const ACPU_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::DpllIntMux),
    ParentRef::Mux(MuxId::VpllIntMux),
];
const PL_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::RpllIntMux),
    ParentRef::Divider(DividerId::DpllToLpd),
];
const DBG_FPD_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::IopllToFpd),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::DpllIntMux),
    ParentRef::Mux(MuxId::ApllIntMux),
];
const DBG_LPD_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::RpllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Divider(DividerId::DpllToLpd),
];
const DP_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::VpllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::DpllIntMux),
    ParentRef::Divider(DividerId::RpllToFpd),
];
const GPU_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::IopllToFpd),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::VpllIntMux),
    ParentRef::Mux(MuxId::DpllIntMux),
];
const SATA_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::IopllToFpd),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Mux(MuxId::DpllIntMux),
];
const PCIE_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::IopllToFpd),
    ParentRef::Invalid,
    ParentRef::Divider(DividerId::RpllToFpd),
    ParentRef::Mux(MuxId::DpllIntMux),
];
const DMA_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::VpllIntMux),
    ParentRef::Mux(MuxId::DpllIntMux),
];
const TOPSW_MAIN_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::VpllIntMux),
    ParentRef::Mux(MuxId::DpllIntMux),
];
const TOPSW_LSBUS_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Invalid,
    ParentRef::Divider(DividerId::IopllToFpd),
    ParentRef::Mux(MuxId::DpllIntMux),
];
const GTGREF_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::IopllToFpd),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Mux(MuxId::DpllIntMux),
];
const USB1_BUS_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::ApllIntMux),
    ParentRef::Divider(DividerId::DpllToLpd),
];
const SDIO_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::RpllIntMux),
    ParentRef::Divider(DividerId::VpllToLpd),
];
/// Shared by the low-power peripherals that prefer IOPLL.
const IOPLL_GROUP_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::RpllIntMux),
    ParentRef::Divider(DividerId::DpllToLpd),
];
/// Shared by the low-power interconnect and R5 clocks, which prefer RPLL.
const RPLL_GROUP_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::RpllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Divider(DividerId::DpllToLpd),
];

const DDR_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::DpllIntMux),
    ParentRef::Mux(MuxId::VpllIntMux),
];

const WDT_PARENTS: &[ParentRef] = &[ParentRef::Gate(GateId::TopswLsbus), ParentRef::External];

const TIMESTAMP_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Invalid,
    ParentRef::Mux(MuxId::RpllIntMux),
    ParentRef::Divider(DividerId::DpllToLpd),
    ParentRef::Ip(IpId::PssRef),
    ParentRef::Ip(IpId::PssRef),
    ParentRef::Ip(IpId::PssRef),
    ParentRef::Ip(IpId::PssRef),
];

const GEM0_TX_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::Gem0RefDiv1),
    ParentRef::External,
];
const GEM1_TX_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::Gem1RefDiv1),
    ParentRef::External,
];
const GEM2_TX_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::Gem2RefDiv1),
    ParentRef::External,
];
const GEM3_TX_PARENTS: &[ParentRef] = &[
    ParentRef::Divider(DividerId::Gem3RefDiv1),
    ParentRef::External,
];

const GEM_TSU_PARENTS: &[ParentRef] = &[
    ParentRef::Gate(GateId::GemTsuRef),
    ParentRef::Gate(GateId::GemTsuRef),
    ParentRef::External,
    ParentRef::External,
];

/// Every selector value routes a CAN MIO pin, none of which is modelled.
const CAN_MIO_PARENTS: &[ParentRef] = &[ParentRef::External; 77];
const CAN0_PARENTS: &[ParentRef] = &[
    ParentRef::Gate(GateId::Can0Ref),
    ParentRef::Mux(MuxId::Can0Mio),
];
const CAN1_PARENTS: &[ParentRef] = &[
    ParentRef::Gate(GateId::Can1Ref),
    ParentRef::Mux(MuxId::Can1Mio),
];

const DLL_REF_PARENTS: &[ParentRef] = &[
    ParentRef::Mux(MuxId::IopllIntMux),
    ParentRef::Mux(MuxId::RpllIntMux),
];

const fn input(id: IpId, output: ClockId) -> IpDesc {
    IpDesc {
        id,
        output: Some(output),
    }
}

const fn pll(
    id: PllId,
    output: ClockId,
    parent: MuxId,
    ctrl: RegisterHandle,
    frac_cfg: RegisterHandle,
    status: RegisterHandle,
    lock_bit: u8,
    critical: bool,
) -> PllDesc {
    PllDesc {
        id,
        output: Some(output),
        parent: ParentRef::Mux(parent),
        ctrl,
        frac_cfg,
        status,
        lock_bit,
        critical,
    }
}

const fn pll_mux(
    id: MuxId,
    output: Option<ClockId>,
    candidates: &'static [ParentRef],
    ctrl: RegisterHandle,
    field: Field<u32, PLL_CTRL::Register>,
) -> MuxDesc {
    mux(id, output, candidates, ctrl, field.shift as u8, field.mask.count_ones() as u8)
}

const fn mux(
    id: MuxId,
    output: Option<ClockId>,
    candidates: &'static [ParentRef],
    register: RegisterHandle,
    shift: u8,
    width: u8,
) -> MuxDesc {
    MuxDesc {
        id,
        output,
        candidates,
        register,
        shift,
        width,
    }
}

const fn div0(
    id: DividerId,
    output: Option<ClockId>,
    parent: ParentRef,
    register: RegisterHandle,
) -> DividerDesc {
    DividerDesc {
        id,
        output,
        parent,
        register,
        shift: 8,
    }
}

const fn div1(
    id: DividerId,
    output: Option<ClockId>,
    parent: ParentRef,
    register: RegisterHandle,
) -> DividerDesc {
    DividerDesc {
        id,
        output,
        parent,
        register,
        shift: 16,
    }
}

const fn gate(
    id: GateId,
    output: ClockId,
    parent: ParentRef,
    register: RegisterHandle,
    bit: u8,
) -> GateDesc {
    GateDesc {
        id,
        output: Some(output),
        parent,
        register,
        bit,
    }
}

const fn half(id: FixedFactorId, output: Option<ClockId>, parent: ParentRef) -> FixedFactorDesc {
    FixedFactorDesc {
        id,
        output,
        parent,
        multiplier: 1,
        divisor: 2,
    }
}

// Node tables. Entry `n` of each table describes the node whose identifier
// converts to `n`; `check_tables` enforces this.

const IP_TABLE: [IpDesc; IpId::COUNT] = [
    input(IpId::PssRef, ClockId::PssRef),
    input(IpId::Video, ClockId::Video),
    input(IpId::PssAltRef, ClockId::PssAltRef),
    input(IpId::AuxRef, ClockId::AuxRef),
    input(IpId::GtCrxRef, ClockId::GtCrxRef),
];

// IOPLL, APLL and DPLL feed the I/O interconnect, the application cores and
// DDR respectively and are never put back into reset.
const PLL_TABLE: [PllDesc; PllId::COUNT] = [
    pll(
        PllId::Iopll,
        ClockId::IopllInt,
        MuxId::IopllPreSrc,
        IOPLL_CTRL,
        IOPLL_FRAC_CFG,
        CRL_PLL_STATUS,
        0,
        true,
    ),
    pll(
        PllId::Rpll,
        ClockId::RpllInt,
        MuxId::RpllPreSrc,
        RPLL_CTRL,
        RPLL_FRAC_CFG,
        CRL_PLL_STATUS,
        1,
        false,
    ),
    pll(
        PllId::Apll,
        ClockId::ApllInt,
        MuxId::ApllPreSrc,
        APLL_CTRL,
        APLL_FRAC_CFG,
        CRF_PLL_STATUS,
        0,
        true,
    ),
    pll(
        PllId::Dpll,
        ClockId::DpllInt,
        MuxId::DpllPreSrc,
        DPLL_CTRL,
        DPLL_FRAC_CFG,
        CRF_PLL_STATUS,
        1,
        true,
    ),
    pll(
        PllId::Vpll,
        ClockId::VpllInt,
        MuxId::VpllPreSrc,
        VPLL_CTRL,
        VPLL_FRAC_CFG,
        CRF_PLL_STATUS,
        2,
        false,
    ),
];

const FIXED_FACTOR_TABLE: [FixedFactorDesc; FixedFactorId::COUNT] = [
    half(FixedFactorId::IopllIntHalf, Some(ClockId::IopllHalf), ParentRef::Pll(PllId::Iopll)),
    half(FixedFactorId::RpllIntHalf, Some(ClockId::RpllHalf), ParentRef::Pll(PllId::Rpll)),
    half(FixedFactorId::ApllIntHalf, Some(ClockId::ApllHalf), ParentRef::Pll(PllId::Apll)),
    half(FixedFactorId::DpllIntHalf, Some(ClockId::DpllHalf), ParentRef::Pll(PllId::Dpll)),
    half(FixedFactorId::VpllIntHalf, Some(ClockId::VpllHalf), ParentRef::Pll(PllId::Vpll)),
    half(FixedFactorId::AcpuHalf, None, ParentRef::Divider(DividerId::AcpuDiv0)),
];

const MUX_TABLE: [MuxDesc; MuxId::COUNT] = [
    pll_mux(MuxId::IopllPreSrc, None, PLL_SRC_PARENTS, IOPLL_CTRL, PLL_CTRL::PRE_SRC),
    pll_mux(
        MuxId::IopllIntMux,
        Some(ClockId::IopllIntMux),
        IOPLL_INT_PARENTS,
        IOPLL_CTRL,
        PLL_CTRL::DIV2,
    ),
    pll_mux(MuxId::IopllPostSrc, None, PLL_SRC_PARENTS, IOPLL_CTRL, PLL_CTRL::POST_SRC),
    pll_mux(MuxId::Iopll, Some(ClockId::Iopll), IOPLL_PARENTS, IOPLL_CTRL, PLL_CTRL::BYPASS),
    pll_mux(MuxId::RpllPreSrc, None, PLL_SRC_PARENTS, RPLL_CTRL, PLL_CTRL::PRE_SRC),
    pll_mux(
        MuxId::RpllIntMux,
        Some(ClockId::RpllIntMux),
        RPLL_INT_PARENTS,
        RPLL_CTRL,
        PLL_CTRL::DIV2,
    ),
    pll_mux(MuxId::RpllPostSrc, None, PLL_SRC_PARENTS, RPLL_CTRL, PLL_CTRL::POST_SRC),
    pll_mux(MuxId::Rpll, Some(ClockId::Rpll), RPLL_PARENTS, RPLL_CTRL, PLL_CTRL::BYPASS),
    pll_mux(MuxId::ApllPreSrc, None, PLL_SRC_PARENTS, APLL_CTRL, PLL_CTRL::PRE_SRC),
    pll_mux(
        MuxId::ApllIntMux,
        Some(ClockId::ApllIntMux),
        APLL_INT_PARENTS,
        APLL_CTRL,
        PLL_CTRL::DIV2,
    ),
    pll_mux(MuxId::ApllPostSrc, None, PLL_SRC_PARENTS, APLL_CTRL, PLL_CTRL::POST_SRC),
    pll_mux(MuxId::Apll, Some(ClockId::Apll), APLL_PARENTS, APLL_CTRL, PLL_CTRL::BYPASS),
    pll_mux(MuxId::DpllPreSrc, None, PLL_SRC_PARENTS, DPLL_CTRL, PLL_CTRL::PRE_SRC),
    pll_mux(
        MuxId::DpllIntMux,
        Some(ClockId::DpllIntMux),
        DPLL_INT_PARENTS,
        DPLL_CTRL,
        PLL_CTRL::DIV2,
    ),
    pll_mux(MuxId::DpllPostSrc, None, PLL_SRC_PARENTS, DPLL_CTRL, PLL_CTRL::POST_SRC),
    pll_mux(MuxId::Dpll, Some(ClockId::Dpll), DPLL_PARENTS, DPLL_CTRL, PLL_CTRL::BYPASS),
    pll_mux(MuxId::VpllPreSrc, None, PLL_SRC_PARENTS, VPLL_CTRL, PLL_CTRL::PRE_SRC),
    pll_mux(
        MuxId::VpllIntMux,
        Some(ClockId::VpllIntMux),
        VPLL_INT_PARENTS,
        VPLL_CTRL,
        PLL_CTRL::DIV2,
    ),
    pll_mux(MuxId::VpllPostSrc, None, PLL_SRC_PARENTS, VPLL_CTRL, PLL_CTRL::POST_SRC),
    pll_mux(MuxId::Vpll, Some(ClockId::Vpll), VPLL_PARENTS, VPLL_CTRL, PLL_CTRL::BYPASS),
    mux(MuxId::Acpu, None, ACPU_PARENTS, ACPU_CTRL, 0, 3),
    mux(MuxId::Wdt, Some(ClockId::Wdt), WDT_PARENTS, WDT_CLK_SEL, 0, 1),
    mux(MuxId::Ddr, None, DDR_PARENTS, DDR_CTRL, 0, 3),
    mux(MuxId::Pl0, None, PL_PARENTS, PL0_REF_CTRL, 0, 3),
    mux(MuxId::Pl1, None, PL_PARENTS, PL1_REF_CTRL, 0, 3),
    mux(MuxId::Pl2, None, PL_PARENTS, PL2_REF_CTRL, 0, 3),
    mux(MuxId::Pl3, None, PL_PARENTS, PL3_REF_CTRL, 0, 3),
    mux(MuxId::DbgTrace, None, DBG_FPD_PARENTS, DBG_TRACE_CTRL, 0, 3),
    mux(MuxId::DbgFpd, None, DBG_FPD_PARENTS, DBG_FPD_CTRL, 0, 3),
    mux(MuxId::DbgLpd, None, DBG_LPD_PARENTS, DBG_LPD_CTRL, 0, 3),
    mux(MuxId::DbgTstmp, None, DBG_FPD_PARENTS, DBG_TSTMP_CTRL, 0, 3),
    mux(MuxId::DpVideo, None, DP_PARENTS, DP_VIDEO_REF_CTRL, 0, 3),
    mux(MuxId::DpAudio, None, DP_PARENTS, DP_AUDIO_REF_CTRL, 0, 3),
    mux(MuxId::DpStc, None, DP_PARENTS, DP_STC_REF_CTRL, 0, 3),
    mux(MuxId::Gpu, None, GPU_PARENTS, GPU_REF_CTRL, 0, 3),
    mux(MuxId::Sata, None, SATA_PARENTS, SATA_REF_CTRL, 0, 3),
    mux(MuxId::Pcie, None, PCIE_PARENTS, PCIE_REF_CTRL, 0, 3),
    mux(MuxId::FpdDma, None, DMA_PARENTS, FPD_DMA_REF_CTRL, 0, 3),
    mux(MuxId::Dpdma, None, DMA_PARENTS, DPDMA_REF_CTRL, 0, 3),
    mux(MuxId::TopswMain, None, TOPSW_MAIN_PARENTS, TOPSW_MAIN_CTRL, 0, 3),
    mux(MuxId::TopswLsbus, None, TOPSW_LSBUS_PARENTS, TOPSW_LSBUS_CTRL, 0, 3),
    mux(MuxId::Gtgref0, None, GTGREF_PARENTS, GTGREF0_REF_CTRL, 0, 3),
    mux(MuxId::Usb3Dual, None, IOPLL_GROUP_PARENTS, USB3_DUAL_REF_CTRL, 0, 3),
    mux(MuxId::Usb0Bus, None, IOPLL_GROUP_PARENTS, USB0_BUS_REF_CTRL, 0, 3),
    mux(MuxId::Usb1Bus, None, USB1_BUS_PARENTS, USB1_BUS_REF_CTRL, 0, 3),
    mux(MuxId::Gem0Ref, None, IOPLL_GROUP_PARENTS, GEM0_REF_CTRL, 0, 3),
    mux(MuxId::Gem0Tx, Some(ClockId::Gem0Tx), GEM0_TX_PARENTS, GEM_CLK_CTRL, 1, 1),
    mux(MuxId::Gem1Ref, None, IOPLL_GROUP_PARENTS, GEM1_REF_CTRL, 0, 3),
    mux(MuxId::Gem1Tx, Some(ClockId::Gem1Tx), GEM1_TX_PARENTS, GEM_CLK_CTRL, 6, 1),
    mux(MuxId::Gem2Ref, None, IOPLL_GROUP_PARENTS, GEM2_REF_CTRL, 0, 3),
    mux(MuxId::Gem2Tx, Some(ClockId::Gem2Tx), GEM2_TX_PARENTS, GEM_CLK_CTRL, 11, 1),
    mux(MuxId::Gem3Ref, None, IOPLL_GROUP_PARENTS, GEM3_REF_CTRL, 0, 3),
    mux(MuxId::Gem3Tx, Some(ClockId::Gem3Tx), GEM3_TX_PARENTS, GEM_CLK_CTRL, 16, 1),
    mux(MuxId::GemTsuRef, None, IOPLL_GROUP_PARENTS, GEM_TSU_REF_CTRL, 0, 3),
    mux(MuxId::GemTsu, Some(ClockId::GemTsu), GEM_TSU_PARENTS, GEM_CLK_CTRL, 20, 2),
    mux(MuxId::Qspi, None, IOPLL_GROUP_PARENTS, QSPI_REF_CTRL, 0, 3),
    mux(MuxId::Sdio0, None, SDIO_PARENTS, SDIO0_REF_CTRL, 0, 3),
    mux(MuxId::Sdio1, None, SDIO_PARENTS, SDIO1_REF_CTRL, 0, 3),
    mux(MuxId::Uart0, None, IOPLL_GROUP_PARENTS, UART0_REF_CTRL, 0, 3),
    mux(MuxId::Uart1, None, IOPLL_GROUP_PARENTS, UART1_REF_CTRL, 0, 3),
    mux(MuxId::Spi0, None, IOPLL_GROUP_PARENTS, SPI0_REF_CTRL, 0, 3),
    mux(MuxId::Spi1, None, IOPLL_GROUP_PARENTS, SPI1_REF_CTRL, 0, 3),
    mux(MuxId::Can0Ref, None, IOPLL_GROUP_PARENTS, CAN0_REF_CTRL, 0, 3),
    mux(MuxId::Can0Mio, Some(ClockId::Can0Mio), CAN_MIO_PARENTS, CAN_MIO_CLK_CTRL, 0, 7),
    mux(MuxId::Can0, Some(ClockId::Can0), CAN0_PARENTS, CAN_MIO_CLK_CTRL, 7, 1),
    mux(MuxId::Can1Ref, None, IOPLL_GROUP_PARENTS, CAN1_REF_CTRL, 0, 3),
    mux(MuxId::Can1Mio, Some(ClockId::Can1Mio), CAN_MIO_PARENTS, CAN_MIO_CLK_CTRL, 15, 7),
    mux(MuxId::Can1, Some(ClockId::Can1), CAN1_PARENTS, CAN_MIO_CLK_CTRL, 22, 1),
    mux(MuxId::CpuR5, None, RPLL_GROUP_PARENTS, CPU_R5_CTRL, 0, 3),
    mux(MuxId::IouSwitch, None, RPLL_GROUP_PARENTS, IOU_SWITCH_CTRL, 0, 3),
    mux(MuxId::CsuPll, None, IOPLL_GROUP_PARENTS, CSU_PLL_CTRL, 0, 3),
    mux(MuxId::Pcap, None, IOPLL_GROUP_PARENTS, PCAP_CTRL, 0, 3),
    mux(MuxId::LpdSwitch, None, RPLL_GROUP_PARENTS, LPD_SWITCH_CTRL, 0, 3),
    mux(MuxId::LpdLsbus, None, RPLL_GROUP_PARENTS, LPD_LSBUS_CTRL, 0, 3),
    mux(MuxId::Nand, None, IOPLL_GROUP_PARENTS, NAND_REF_CTRL, 0, 3),
    mux(MuxId::Adma, None, RPLL_GROUP_PARENTS, LPD_DMA_REF_CTRL, 0, 3),
    mux(MuxId::DllRef, Some(ClockId::DllRef), DLL_REF_PARENTS, DLL_REF_CTRL, 0, 3),
    mux(MuxId::Ams, None, RPLL_GROUP_PARENTS, PSSYSMON_REF_CTRL, 0, 3),
    mux(MuxId::I2c0, None, IOPLL_GROUP_PARENTS, I2C0_REF_CTRL, 0, 3),
    mux(MuxId::I2c1, None, IOPLL_GROUP_PARENTS, I2C1_REF_CTRL, 0, 3),
    mux(MuxId::Timestamp, None, TIMESTAMP_PARENTS, TIMESTAMP_REF_CTRL, 0, 3),
];

const DIVIDER_TABLE: [DividerDesc; DividerId::COUNT] = [
    div0(
        DividerId::IopllToFpd,
        Some(ClockId::IopllToFpd),
        ParentRef::Mux(MuxId::IopllIntMux),
        IOPLL_TO_FPD_CTRL,
    ),
    div0(
        DividerId::RpllToFpd,
        Some(ClockId::RpllToFpd),
        ParentRef::Mux(MuxId::RpllIntMux),
        RPLL_TO_FPD_CTRL,
    ),
    div0(
        DividerId::ApllToLpd,
        Some(ClockId::ApllToLpd),
        ParentRef::Mux(MuxId::ApllIntMux),
        APLL_TO_LPD_CTRL,
    ),
    div0(
        DividerId::DpllToLpd,
        Some(ClockId::DpllToLpd),
        ParentRef::Mux(MuxId::DpllIntMux),
        DPLL_TO_LPD_CTRL,
    ),
    div0(
        DividerId::VpllToLpd,
        Some(ClockId::VpllToLpd),
        ParentRef::Mux(MuxId::VpllIntMux),
        VPLL_TO_LPD_CTRL,
    ),
    div0(DividerId::AcpuDiv0, None, ParentRef::Mux(MuxId::Acpu), ACPU_CTRL),
    div0(DividerId::DdrDiv0, Some(ClockId::DdrRef), ParentRef::Mux(MuxId::Ddr), DDR_CTRL),
    div0(DividerId::Pl0Div0, None, ParentRef::Mux(MuxId::Pl0), PL0_REF_CTRL),
    div1(DividerId::Pl0Div1, None, ParentRef::Divider(DividerId::Pl0Div0), PL0_REF_CTRL),
    div0(DividerId::Pl1Div0, None, ParentRef::Mux(MuxId::Pl1), PL1_REF_CTRL),
    div1(DividerId::Pl1Div1, None, ParentRef::Divider(DividerId::Pl1Div0), PL1_REF_CTRL),
    div0(DividerId::Pl2Div0, None, ParentRef::Mux(MuxId::Pl2), PL2_REF_CTRL),
    div1(DividerId::Pl2Div1, None, ParentRef::Divider(DividerId::Pl2Div0), PL2_REF_CTRL),
    div0(DividerId::Pl3Div0, None, ParentRef::Mux(MuxId::Pl3), PL3_REF_CTRL),
    div1(DividerId::Pl3Div1, None, ParentRef::Divider(DividerId::Pl3Div0), PL3_REF_CTRL),
    div0(DividerId::DbgTraceDiv0, None, ParentRef::Mux(MuxId::DbgTrace), DBG_TRACE_CTRL),
    div0(DividerId::DbgFpdDiv0, None, ParentRef::Mux(MuxId::DbgFpd), DBG_FPD_CTRL),
    div0(DividerId::DbgLpdDiv0, None, ParentRef::Mux(MuxId::DbgLpd), DBG_LPD_CTRL),
    div0(
        DividerId::DbgTstmpDiv0,
        Some(ClockId::DbgTstmp),
        ParentRef::Mux(MuxId::DbgTstmp),
        DBG_TSTMP_CTRL,
    ),
    div0(DividerId::DpVideoDiv0, None, ParentRef::Mux(MuxId::DpVideo), DP_VIDEO_REF_CTRL),
    div1(
        DividerId::DpVideoDiv1,
        None,
        ParentRef::Divider(DividerId::DpVideoDiv0),
        DP_VIDEO_REF_CTRL,
    ),
    div0(DividerId::DpAudioDiv0, None, ParentRef::Mux(MuxId::DpAudio), DP_AUDIO_REF_CTRL),
    div1(
        DividerId::DpAudioDiv1,
        None,
        ParentRef::Divider(DividerId::DpAudioDiv0),
        DP_AUDIO_REF_CTRL,
    ),
    div0(DividerId::DpStcDiv0, None, ParentRef::Mux(MuxId::DpStc), DP_STC_REF_CTRL),
    div1(DividerId::DpStcDiv1, None, ParentRef::Divider(DividerId::DpStcDiv0), DP_STC_REF_CTRL),
    div0(DividerId::GpuDiv0, None, ParentRef::Mux(MuxId::Gpu), GPU_REF_CTRL),
    div0(DividerId::SataDiv0, None, ParentRef::Mux(MuxId::Sata), SATA_REF_CTRL),
    div0(DividerId::PcieDiv0, None, ParentRef::Mux(MuxId::Pcie), PCIE_REF_CTRL),
    div0(DividerId::FpdDmaDiv0, None, ParentRef::Mux(MuxId::FpdDma), FPD_DMA_REF_CTRL),
    div0(DividerId::DpdmaDiv0, None, ParentRef::Mux(MuxId::Dpdma), DPDMA_REF_CTRL),
    div0(DividerId::TopswMainDiv0, None, ParentRef::Mux(MuxId::TopswMain), TOPSW_MAIN_CTRL),
    div0(DividerId::TopswLsbusDiv0, None, ParentRef::Mux(MuxId::TopswLsbus), TOPSW_LSBUS_CTRL),
    div0(DividerId::Gtgref0Div0, None, ParentRef::Mux(MuxId::Gtgref0), GTGREF0_REF_CTRL),
    div0(DividerId::Usb3DualDiv0, None, ParentRef::Mux(MuxId::Usb3Dual), USB3_DUAL_REF_CTRL),
    div1(
        DividerId::Usb3DualDiv1,
        None,
        ParentRef::Divider(DividerId::Usb3DualDiv0),
        USB3_DUAL_REF_CTRL,
    ),
    div0(DividerId::Usb0BusDiv0, None, ParentRef::Mux(MuxId::Usb0Bus), USB0_BUS_REF_CTRL),
    div1(
        DividerId::Usb0BusDiv1,
        None,
        ParentRef::Divider(DividerId::Usb0BusDiv0),
        USB0_BUS_REF_CTRL,
    ),
    div0(DividerId::Usb1BusDiv0, None, ParentRef::Mux(MuxId::Usb1Bus), USB1_BUS_REF_CTRL),
    div1(
        DividerId::Usb1BusDiv1,
        None,
        ParentRef::Divider(DividerId::Usb1BusDiv0),
        USB1_BUS_REF_CTRL,
    ),
    div0(DividerId::Gem0RefDiv0, None, ParentRef::Mux(MuxId::Gem0Ref), GEM0_REF_CTRL),
    div1(DividerId::Gem0RefDiv1, None, ParentRef::Divider(DividerId::Gem0RefDiv0), GEM0_REF_CTRL),
    div0(DividerId::Gem1RefDiv0, None, ParentRef::Mux(MuxId::Gem1Ref), GEM1_REF_CTRL),
    div1(DividerId::Gem1RefDiv1, None, ParentRef::Divider(DividerId::Gem1RefDiv0), GEM1_REF_CTRL),
    div0(DividerId::Gem2RefDiv0, None, ParentRef::Mux(MuxId::Gem2Ref), GEM2_REF_CTRL),
    div1(DividerId::Gem2RefDiv1, None, ParentRef::Divider(DividerId::Gem2RefDiv0), GEM2_REF_CTRL),
    div0(DividerId::Gem3RefDiv0, None, ParentRef::Mux(MuxId::Gem3Ref), GEM3_REF_CTRL),
    div1(DividerId::Gem3RefDiv1, None, ParentRef::Divider(DividerId::Gem3RefDiv0), GEM3_REF_CTRL),
    div0(DividerId::GemTsuRefDiv0, None, ParentRef::Mux(MuxId::GemTsuRef), GEM_TSU_REF_CTRL),
    div1(
        DividerId::GemTsuRefDiv1,
        None,
        ParentRef::Divider(DividerId::GemTsuRefDiv0),
        GEM_TSU_REF_CTRL,
    ),
    div0(DividerId::QspiDiv0, None, ParentRef::Mux(MuxId::Qspi), QSPI_REF_CTRL),
    div1(DividerId::QspiDiv1, None, ParentRef::Divider(DividerId::QspiDiv0), QSPI_REF_CTRL),
    div0(DividerId::Sdio0Div0, None, ParentRef::Mux(MuxId::Sdio0), SDIO0_REF_CTRL),
    div1(DividerId::Sdio0Div1, None, ParentRef::Divider(DividerId::Sdio0Div0), SDIO0_REF_CTRL),
    div0(DividerId::Sdio1Div0, None, ParentRef::Mux(MuxId::Sdio1), SDIO1_REF_CTRL),
    div1(DividerId::Sdio1Div1, None, ParentRef::Divider(DividerId::Sdio1Div0), SDIO1_REF_CTRL),
    div0(DividerId::Uart0Div0, None, ParentRef::Mux(MuxId::Uart0), UART0_REF_CTRL),
    div1(DividerId::Uart0Div1, None, ParentRef::Divider(DividerId::Uart0Div0), UART0_REF_CTRL),
    div0(DividerId::Uart1Div0, None, ParentRef::Mux(MuxId::Uart1), UART1_REF_CTRL),
    div1(DividerId::Uart1Div1, None, ParentRef::Divider(DividerId::Uart1Div0), UART1_REF_CTRL),
    div0(DividerId::Spi0Div0, None, ParentRef::Mux(MuxId::Spi0), SPI0_REF_CTRL),
    div1(DividerId::Spi0Div1, None, ParentRef::Divider(DividerId::Spi0Div0), SPI0_REF_CTRL),
    div0(DividerId::Spi1Div0, None, ParentRef::Mux(MuxId::Spi1), SPI1_REF_CTRL),
    div1(DividerId::Spi1Div1, None, ParentRef::Divider(DividerId::Spi1Div0), SPI1_REF_CTRL),
    div0(DividerId::Can0RefDiv0, None, ParentRef::Mux(MuxId::Can0Ref), CAN0_REF_CTRL),
    div1(DividerId::Can0RefDiv1, None, ParentRef::Divider(DividerId::Can0RefDiv0), CAN0_REF_CTRL),
    div0(DividerId::Can1RefDiv0, None, ParentRef::Mux(MuxId::Can1Ref), CAN1_REF_CTRL),
    div1(DividerId::Can1RefDiv1, None, ParentRef::Divider(DividerId::Can1RefDiv0), CAN1_REF_CTRL),
    div0(DividerId::CpuR5Div0, Some(ClockId::CpuR5), ParentRef::Mux(MuxId::CpuR5), CPU_R5_CTRL),
    div0(DividerId::IouSwitchDiv0, None, ParentRef::Mux(MuxId::IouSwitch), IOU_SWITCH_CTRL),
    div0(DividerId::CsuPllDiv0, None, ParentRef::Mux(MuxId::CsuPll), CSU_PLL_CTRL),
    div0(DividerId::PcapDiv0, None, ParentRef::Mux(MuxId::Pcap), PCAP_CTRL),
    div0(DividerId::LpdSwitchDiv0, None, ParentRef::Mux(MuxId::LpdSwitch), LPD_SWITCH_CTRL),
    div0(DividerId::LpdLsbusDiv0, None, ParentRef::Mux(MuxId::LpdLsbus), LPD_LSBUS_CTRL),
    div0(DividerId::NandDiv0, None, ParentRef::Mux(MuxId::Nand), NAND_REF_CTRL),
    div1(DividerId::NandDiv1, None, ParentRef::Divider(DividerId::NandDiv0), NAND_REF_CTRL),
    div0(DividerId::AdmaDiv0, None, ParentRef::Mux(MuxId::Adma), LPD_DMA_REF_CTRL),
    div0(DividerId::AmsDiv0, None, ParentRef::Mux(MuxId::Ams), PSSYSMON_REF_CTRL),
    div1(DividerId::AmsDiv1, None, ParentRef::Divider(DividerId::AmsDiv0), PSSYSMON_REF_CTRL),
    div0(DividerId::I2c0Div0, None, ParentRef::Mux(MuxId::I2c0), I2C0_REF_CTRL),
    div1(DividerId::I2c0Div1, None, ParentRef::Divider(DividerId::I2c0Div0), I2C0_REF_CTRL),
    div0(DividerId::I2c1Div0, None, ParentRef::Mux(MuxId::I2c1), I2C1_REF_CTRL),
    div1(DividerId::I2c1Div1, None, ParentRef::Divider(DividerId::I2c1Div0), I2C1_REF_CTRL),
    div0(DividerId::TimestampDiv0, None, ParentRef::Mux(MuxId::Timestamp), TIMESTAMP_REF_CTRL),
];

const GATE_TABLE: [GateDesc; GateId::COUNT] = [
    gate(GateId::Acpu, ClockId::Acpu, ParentRef::Divider(DividerId::AcpuDiv0), ACPU_CTRL, 24),
    gate(
        GateId::AcpuHalf,
        ClockId::AcpuHalf,
        ParentRef::FixedFactor(FixedFactorId::AcpuHalf),
        ACPU_CTRL,
        25,
    ),
    gate(GateId::Pl0, ClockId::Pl0, ParentRef::Divider(DividerId::Pl0Div1), PL0_REF_CTRL, 24),
    gate(GateId::Pl1, ClockId::Pl1, ParentRef::Divider(DividerId::Pl1Div1), PL1_REF_CTRL, 24),
    gate(GateId::Pl2, ClockId::Pl2, ParentRef::Divider(DividerId::Pl2Div1), PL2_REF_CTRL, 24),
    gate(GateId::Pl3, ClockId::Pl3, ParentRef::Divider(DividerId::Pl3Div1), PL3_REF_CTRL, 24),
    gate(
        GateId::DbgTrace,
        ClockId::DbgTrace,
        ParentRef::Divider(DividerId::DbgTraceDiv0),
        DBG_TRACE_CTRL,
        24,
    ),
    gate(
        GateId::DbgFpd,
        ClockId::DbgFpd,
        ParentRef::Divider(DividerId::DbgFpdDiv0),
        DBG_FPD_CTRL,
        24,
    ),
    gate(
        GateId::DbgLpd,
        ClockId::DbgLpd,
        ParentRef::Divider(DividerId::DbgLpdDiv0),
        DBG_LPD_CTRL,
        24,
    ),
    gate(
        GateId::DpVideoRef,
        ClockId::DpVideoRef,
        ParentRef::Divider(DividerId::DpVideoDiv1),
        DP_VIDEO_REF_CTRL,
        24,
    ),
    gate(
        GateId::DpAudioRef,
        ClockId::DpAudioRef,
        ParentRef::Divider(DividerId::DpAudioDiv1),
        DP_AUDIO_REF_CTRL,
        24,
    ),
    gate(
        GateId::DpStcRef,
        ClockId::DpStcRef,
        ParentRef::Divider(DividerId::DpStcDiv1),
        DP_STC_REF_CTRL,
        24,
    ),
    gate(GateId::GpuRef, ClockId::GpuRef, ParentRef::Divider(DividerId::GpuDiv0), GPU_REF_CTRL, 24),
    gate(
        GateId::GpuPp0Ref,
        ClockId::GpuPp0Ref,
        ParentRef::Divider(DividerId::GpuDiv0),
        GPU_REF_CTRL,
        25,
    ),
    gate(
        GateId::GpuPp1Ref,
        ClockId::GpuPp1Ref,
        ParentRef::Divider(DividerId::GpuDiv0),
        GPU_REF_CTRL,
        26,
    ),
    gate(GateId::Sata, ClockId::Sata, ParentRef::Divider(DividerId::SataDiv0), SATA_REF_CTRL, 24),
    gate(GateId::Pcie, ClockId::Pcie, ParentRef::Divider(DividerId::PcieDiv0), PCIE_REF_CTRL, 24),
    gate(
        GateId::FpdDma,
        ClockId::FpdDma,
        ParentRef::Divider(DividerId::FpdDmaDiv0),
        FPD_DMA_REF_CTRL,
        24,
    ),
    gate(
        GateId::Dpdma,
        ClockId::Dpdma,
        ParentRef::Divider(DividerId::DpdmaDiv0),
        DPDMA_REF_CTRL,
        24,
    ),
    gate(
        GateId::TopswMain,
        ClockId::TopswMain,
        ParentRef::Divider(DividerId::TopswMainDiv0),
        TOPSW_MAIN_CTRL,
        24,
    ),
    gate(
        GateId::TopswLsbus,
        ClockId::TopswLsbus,
        ParentRef::Divider(DividerId::TopswLsbusDiv0),
        TOPSW_LSBUS_CTRL,
        24,
    ),
    gate(
        GateId::Gtgref0,
        ClockId::Gtgref0,
        ParentRef::Divider(DividerId::Gtgref0Div0),
        GTGREF0_REF_CTRL,
        24,
    ),
    gate(
        GateId::Usb3Dual,
        ClockId::Usb3Dual,
        ParentRef::Divider(DividerId::Usb3DualDiv1),
        USB3_DUAL_REF_CTRL,
        25,
    ),
    gate(
        GateId::Usb0Bus,
        ClockId::Usb0Bus,
        ParentRef::Divider(DividerId::Usb0BusDiv1),
        USB0_BUS_REF_CTRL,
        25,
    ),
    gate(
        GateId::Usb1Bus,
        ClockId::Usb1Bus,
        ParentRef::Divider(DividerId::Usb1BusDiv1),
        USB1_BUS_REF_CTRL,
        25,
    ),
    gate(
        GateId::Gem0Ref,
        ClockId::Gem0Ref,
        ParentRef::Divider(DividerId::Gem0RefDiv1),
        GEM0_REF_CTRL,
        25,
    ),
    gate(GateId::Gem0Rx, ClockId::Gem0Rx, ParentRef::Mux(MuxId::Gem0Tx), GEM0_REF_CTRL, 26),
    gate(
        GateId::Gem1Ref,
        ClockId::Gem1Ref,
        ParentRef::Divider(DividerId::Gem1RefDiv1),
        GEM1_REF_CTRL,
        25,
    ),
    gate(GateId::Gem1Rx, ClockId::Gem1Rx, ParentRef::Mux(MuxId::Gem1Tx), GEM1_REF_CTRL, 26),
    gate(
        GateId::Gem2Ref,
        ClockId::Gem2Ref,
        ParentRef::Divider(DividerId::Gem2RefDiv1),
        GEM2_REF_CTRL,
        25,
    ),
    gate(GateId::Gem2Rx, ClockId::Gem2Rx, ParentRef::Mux(MuxId::Gem2Tx), GEM2_REF_CTRL, 26),
    gate(
        GateId::Gem3Ref,
        ClockId::Gem3Ref,
        ParentRef::Divider(DividerId::Gem3RefDiv1),
        GEM3_REF_CTRL,
        25,
    ),
    gate(GateId::Gem3Rx, ClockId::Gem3Rx, ParentRef::Mux(MuxId::Gem3Tx), GEM3_REF_CTRL, 26),
    gate(
        GateId::GemTsuRef,
        ClockId::GemTsuRef,
        ParentRef::Divider(DividerId::GemTsuRefDiv1),
        GEM_TSU_REF_CTRL,
        24,
    ),
    gate(GateId::Qspi, ClockId::Qspi, ParentRef::Divider(DividerId::QspiDiv1), QSPI_REF_CTRL, 24),
    gate(
        GateId::Sdio0,
        ClockId::Sdio0,
        ParentRef::Divider(DividerId::Sdio0Div1),
        SDIO0_REF_CTRL,
        24,
    ),
    gate(
        GateId::Sdio1,
        ClockId::Sdio1,
        ParentRef::Divider(DividerId::Sdio1Div1),
        SDIO1_REF_CTRL,
        24,
    ),
    gate(
        GateId::Uart0,
        ClockId::Uart0,
        ParentRef::Divider(DividerId::Uart0Div1),
        UART0_REF_CTRL,
        24,
    ),
    gate(
        GateId::Uart1,
        ClockId::Uart1,
        ParentRef::Divider(DividerId::Uart1Div1),
        UART1_REF_CTRL,
        24,
    ),
    gate(GateId::Spi0, ClockId::Spi0, ParentRef::Divider(DividerId::Spi0Div1), SPI0_REF_CTRL, 24),
    gate(GateId::Spi1, ClockId::Spi1, ParentRef::Divider(DividerId::Spi1Div1), SPI1_REF_CTRL, 24),
    gate(
        GateId::Can0Ref,
        ClockId::Can0Ref,
        ParentRef::Divider(DividerId::Can0RefDiv1),
        CAN0_REF_CTRL,
        24,
    ),
    gate(
        GateId::Can1Ref,
        ClockId::Can1Ref,
        ParentRef::Divider(DividerId::Can1RefDiv1),
        CAN1_REF_CTRL,
        24,
    ),
    gate(
        GateId::CpuR5Core,
        ClockId::CpuR5Core,
        ParentRef::Divider(DividerId::CpuR5Div0),
        CPU_R5_CTRL,
        25,
    ),
    gate(
        GateId::IouSwitch,
        ClockId::IouSwitch,
        ParentRef::Divider(DividerId::IouSwitchDiv0),
        IOU_SWITCH_CTRL,
        24,
    ),
    gate(
        GateId::CsuPll,
        ClockId::CsuPll,
        ParentRef::Divider(DividerId::CsuPllDiv0),
        CSU_PLL_CTRL,
        24,
    ),
    gate(GateId::Pcap, ClockId::Pcap, ParentRef::Divider(DividerId::PcapDiv0), PCAP_CTRL, 24),
    gate(
        GateId::LpdSwitch,
        ClockId::LpdSwitch,
        ParentRef::Divider(DividerId::LpdSwitchDiv0),
        LPD_SWITCH_CTRL,
        24,
    ),
    gate(
        GateId::LpdLsbus,
        ClockId::LpdLsbus,
        ParentRef::Divider(DividerId::LpdLsbusDiv0),
        LPD_LSBUS_CTRL,
        24,
    ),
    gate(GateId::Nand, ClockId::Nand, ParentRef::Divider(DividerId::NandDiv1), NAND_REF_CTRL, 24),
    gate(
        GateId::Adma,
        ClockId::Adma,
        ParentRef::Divider(DividerId::AdmaDiv0),
        LPD_DMA_REF_CTRL,
        24,
    ),
    gate(GateId::Ams, ClockId::Ams, ParentRef::Divider(DividerId::AmsDiv1), PSSYSMON_REF_CTRL, 24),
    gate(GateId::I2c0, ClockId::I2c0, ParentRef::Divider(DividerId::I2c0Div1), I2C0_REF_CTRL, 24),
    gate(GateId::I2c1, ClockId::I2c1, ParentRef::Divider(DividerId::I2c1Div1), I2C1_REF_CTRL, 24),
    gate(
        GateId::Timestamp,
        ClockId::Timestamp,
        ParentRef::Divider(DividerId::TimestampDiv0),
        TIMESTAMP_REF_CTRL,
        24,
    ),
];

pub static INPUTS: [IpDesc; IpId::COUNT] = IP_TABLE;
pub static PLLS: [PllDesc; PllId::COUNT] = PLL_TABLE;
pub static MUXES: [MuxDesc; MuxId::COUNT] = MUX_TABLE;
pub static DIVIDERS: [DividerDesc; DividerId::COUNT] = DIVIDER_TABLE;
pub static GATES: [GateDesc; GateId::COUNT] = GATE_TABLE;
pub static FIXED_FACTORS: [FixedFactorDesc; FixedFactorId::COUNT] = FIXED_FACTOR_TABLE;

const fn claim(mut claims: [u8; ClockId::COUNT], output: Option<ClockId>) -> [u8; ClockId::COUNT] {
    if let Some(id) = output {
        claims[id as usize] += 1;
    }
    claims
}

/// Returns `true` if every table entry sits at the index of its identifier
/// and every output clock is claimed by exactly one node.
const fn check_tables() -> bool {
    let mut claims = [0u8; ClockId::COUNT];

    let mut i = 0;
    while i < IP_TABLE.len() {
        if IP_TABLE[i].id as usize != i {
            return false;
        }
        claims = claim(claims, IP_TABLE[i].output);
        i += 1;
    }
    i = 0;
    while i < PLL_TABLE.len() {
        if PLL_TABLE[i].id as usize != i {
            return false;
        }
        claims = claim(claims, PLL_TABLE[i].output);
        i += 1;
    }
    i = 0;
    while i < MUX_TABLE.len() {
        let desc = &MUX_TABLE[i];
        if desc.id as usize != i || desc.candidates.len() > (1 << desc.width) {
            return false;
        }
        claims = claim(claims, desc.output);
        i += 1;
    }
    i = 0;
    while i < GATE_TABLE.len() {
        if GATE_TABLE[i].id as usize != i {
            return false;
        }
        claims = claim(claims, GATE_TABLE[i].output);
        i += 1;
    }
    i = 0;
    while i < DIVIDER_TABLE.len() {
        if DIVIDER_TABLE[i].id as usize != i {
            return false;
        }
        claims = claim(claims, DIVIDER_TABLE[i].output);
        i += 1;
    }
    i = 0;
    while i < FIXED_FACTOR_TABLE.len() {
        if FIXED_FACTOR_TABLE[i].id as usize != i {
            return false;
        }
        claims = claim(claims, FIXED_FACTOR_TABLE[i].output);
        i += 1;
    }

    i = 0;
    while i < ClockId::COUNT {
        if claims[i] != 1 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(check_tables(), "clock topology tables are inconsistent");
