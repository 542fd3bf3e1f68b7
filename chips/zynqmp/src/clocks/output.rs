// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Output clock identifiers.
//!
//! An output clock is a clock signal consumed outside of the clock tree: by a
//! peripheral, a CPU cluster or the programmable logic. Each identifier is
//! claimed by exactly one terminal node in the topology tables; the claim is
//! checked when the crate is compiled.

/// Identifier of an externally consumable clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockId {
    // PLL outputs and their taps
    IopllInt,
    RpllInt,
    ApllInt,
    DpllInt,
    VpllInt,
    Iopll,
    Rpll,
    Apll,
    Dpll,
    Vpll,
    IopllIntMux,
    RpllIntMux,
    ApllIntMux,
    DpllIntMux,
    VpllIntMux,
    IopllHalf,
    RpllHalf,
    ApllHalf,
    DpllHalf,
    VpllHalf,
    IopllToFpd,
    RpllToFpd,
    ApllToLpd,
    DpllToLpd,
    VpllToLpd,
    // Peripheral and interconnect clocks
    Acpu,
    AcpuHalf,
    Wdt,
    DdrRef,
    Pl0,
    Pl1,
    Pl2,
    Pl3,
    DbgTrace,
    DbgFpd,
    DbgLpd,
    DbgTstmp,
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
    Gem0Tx,
    Gem1Ref,
    Gem1Rx,
    Gem1Tx,
    Gem2Ref,
    Gem2Rx,
    Gem2Tx,
    Gem3Ref,
    Gem3Rx,
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
    CpuR5Core,
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
    // Input clocks
    PssRef,
    Video,
    PssAltRef,
    AuxRef,
    GtCrxRef,
}

impl ClockId {
    pub const COUNT: usize = ClockId::GtCrxRef as usize + 1;

    /// Every output clock, in identifier order.
    pub const ALL: [ClockId; ClockId::COUNT] = [
        ClockId::IopllInt,
        ClockId::RpllInt,
        ClockId::ApllInt,
        ClockId::DpllInt,
        ClockId::VpllInt,
        ClockId::Iopll,
        ClockId::Rpll,
        ClockId::Apll,
        ClockId::Dpll,
        ClockId::Vpll,
        ClockId::IopllIntMux,
        ClockId::RpllIntMux,
        ClockId::ApllIntMux,
        ClockId::DpllIntMux,
        ClockId::VpllIntMux,
        ClockId::IopllHalf,
        ClockId::RpllHalf,
        ClockId::ApllHalf,
        ClockId::DpllHalf,
        ClockId::VpllHalf,
        ClockId::IopllToFpd,
        ClockId::RpllToFpd,
        ClockId::ApllToLpd,
        ClockId::DpllToLpd,
        ClockId::VpllToLpd,
        ClockId::Acpu,
        ClockId::AcpuHalf,
        ClockId::Wdt,
        ClockId::DdrRef,
        ClockId::Pl0,
        ClockId::Pl1,
        ClockId::Pl2,
        ClockId::Pl3,
        ClockId::DbgTrace,
        ClockId::DbgFpd,
        ClockId::DbgLpd,
        ClockId::DbgTstmp,
        ClockId::DpVideoRef,
        ClockId::DpAudioRef,
        ClockId::DpStcRef,
        ClockId::GpuRef,
        ClockId::GpuPp0Ref,
        ClockId::GpuPp1Ref,
        ClockId::Sata,
        ClockId::Pcie,
        ClockId::FpdDma,
        ClockId::Dpdma,
        ClockId::TopswMain,
        ClockId::TopswLsbus,
        ClockId::Gtgref0,
        ClockId::Usb3Dual,
        ClockId::Usb0Bus,
        ClockId::Usb1Bus,
        ClockId::Gem0Ref,
        ClockId::Gem0Rx,
        ClockId::Gem0Tx,
        ClockId::Gem1Ref,
        ClockId::Gem1Rx,
        ClockId::Gem1Tx,
        ClockId::Gem2Ref,
        ClockId::Gem2Rx,
        ClockId::Gem2Tx,
        ClockId::Gem3Ref,
        ClockId::Gem3Rx,
        ClockId::Gem3Tx,
        ClockId::GemTsuRef,
        ClockId::GemTsu,
        ClockId::Qspi,
        ClockId::Sdio0,
        ClockId::Sdio1,
        ClockId::Uart0,
        ClockId::Uart1,
        ClockId::Spi0,
        ClockId::Spi1,
        ClockId::Can0Ref,
        ClockId::Can0Mio,
        ClockId::Can0,
        ClockId::Can1Ref,
        ClockId::Can1Mio,
        ClockId::Can1,
        ClockId::CpuR5,
        ClockId::CpuR5Core,
        ClockId::IouSwitch,
        ClockId::CsuPll,
        ClockId::Pcap,
        ClockId::LpdSwitch,
        ClockId::LpdLsbus,
        ClockId::Nand,
        ClockId::Adma,
        ClockId::DllRef,
        ClockId::Ams,
        ClockId::I2c0,
        ClockId::I2c1,
        ClockId::Timestamp,
        ClockId::PssRef,
        ClockId::Video,
        ClockId::PssAltRef,
        ClockId::AuxRef,
        ClockId::GtCrxRef,
    ];
}

#[cfg(test)]
mod tests {
    use super::ClockId;

    #[test]
    fn all_is_in_identifier_order() {
        for (index, id) in ClockId::ALL.iter().enumerate() {
            assert_eq!(*id as usize, index);
        }
    }
}
