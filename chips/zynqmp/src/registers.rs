// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register map of the ZynqMP clock and reset blocks.
//!
//! Clocks of the low-power domain live in CRL_APB, clocks of the full-power
//! domain in CRF_APB. A handful of selectors (GEM, CAN, watchdog) sit in the
//! IOU_SLCR and FPD_SLCR blocks.

use tock_registers::fields::Field;
use tock_registers::register_bitfields;

use crate::hil::RegisterHandle;

pub const CRL_APB_BASE: u32 = 0xFF5E_0000;
pub const CRF_APB_BASE: u32 = 0xFD1A_0000;
pub const IOU_SLCR_BASE: u32 = 0xFF18_0000;
pub const FPD_SLCR_BASE: u32 = 0xFD61_0000;

const fn crl(offset: u32) -> RegisterHandle {
    RegisterHandle::new(CRL_APB_BASE + offset)
}

const fn crf(offset: u32) -> RegisterHandle {
    RegisterHandle::new(CRF_APB_BASE + offset)
}

// CRL_APB
pub const IOPLL_CTRL: RegisterHandle = crl(0x020);
pub const IOPLL_FRAC_CFG: RegisterHandle = crl(0x028);
pub const RPLL_CTRL: RegisterHandle = crl(0x030);
pub const RPLL_FRAC_CFG: RegisterHandle = crl(0x038);
pub const CRL_PLL_STATUS: RegisterHandle = crl(0x040);
pub const IOPLL_TO_FPD_CTRL: RegisterHandle = crl(0x044);
pub const RPLL_TO_FPD_CTRL: RegisterHandle = crl(0x048);
pub const USB3_DUAL_REF_CTRL: RegisterHandle = crl(0x04C);
pub const GEM0_REF_CTRL: RegisterHandle = crl(0x050);
pub const GEM1_REF_CTRL: RegisterHandle = crl(0x054);
pub const GEM2_REF_CTRL: RegisterHandle = crl(0x058);
pub const GEM3_REF_CTRL: RegisterHandle = crl(0x05C);
pub const USB0_BUS_REF_CTRL: RegisterHandle = crl(0x060);
pub const USB1_BUS_REF_CTRL: RegisterHandle = crl(0x064);
pub const QSPI_REF_CTRL: RegisterHandle = crl(0x068);
pub const SDIO0_REF_CTRL: RegisterHandle = crl(0x06C);
pub const SDIO1_REF_CTRL: RegisterHandle = crl(0x070);
pub const UART0_REF_CTRL: RegisterHandle = crl(0x074);
pub const UART1_REF_CTRL: RegisterHandle = crl(0x078);
pub const SPI0_REF_CTRL: RegisterHandle = crl(0x07C);
pub const SPI1_REF_CTRL: RegisterHandle = crl(0x080);
pub const CAN0_REF_CTRL: RegisterHandle = crl(0x084);
pub const CAN1_REF_CTRL: RegisterHandle = crl(0x088);
pub const CPU_R5_CTRL: RegisterHandle = crl(0x090);
pub const IOU_SWITCH_CTRL: RegisterHandle = crl(0x09C);
pub const CSU_PLL_CTRL: RegisterHandle = crl(0x0A0);
pub const PCAP_CTRL: RegisterHandle = crl(0x0A4);
pub const LPD_SWITCH_CTRL: RegisterHandle = crl(0x0A8);
pub const LPD_LSBUS_CTRL: RegisterHandle = crl(0x0AC);
pub const DBG_LPD_CTRL: RegisterHandle = crl(0x0B0);
pub const NAND_REF_CTRL: RegisterHandle = crl(0x0B4);
pub const LPD_DMA_REF_CTRL: RegisterHandle = crl(0x0B8);
pub const PL0_REF_CTRL: RegisterHandle = crl(0x0C0);
pub const PL1_REF_CTRL: RegisterHandle = crl(0x0C4);
pub const PL2_REF_CTRL: RegisterHandle = crl(0x0C8);
pub const PL3_REF_CTRL: RegisterHandle = crl(0x0CC);
pub const GEM_TSU_REF_CTRL: RegisterHandle = crl(0x100);
pub const DLL_REF_CTRL: RegisterHandle = crl(0x104);
pub const PSSYSMON_REF_CTRL: RegisterHandle = crl(0x108);
pub const I2C0_REF_CTRL: RegisterHandle = crl(0x120);
pub const I2C1_REF_CTRL: RegisterHandle = crl(0x124);
pub const TIMESTAMP_REF_CTRL: RegisterHandle = crl(0x128);

// CRF_APB
pub const APLL_CTRL: RegisterHandle = crf(0x020);
pub const APLL_FRAC_CFG: RegisterHandle = crf(0x028);
pub const DPLL_CTRL: RegisterHandle = crf(0x02C);
pub const DPLL_FRAC_CFG: RegisterHandle = crf(0x034);
pub const VPLL_CTRL: RegisterHandle = crf(0x038);
pub const VPLL_FRAC_CFG: RegisterHandle = crf(0x040);
pub const CRF_PLL_STATUS: RegisterHandle = crf(0x044);
pub const APLL_TO_LPD_CTRL: RegisterHandle = crf(0x048);
pub const DPLL_TO_LPD_CTRL: RegisterHandle = crf(0x04C);
pub const VPLL_TO_LPD_CTRL: RegisterHandle = crf(0x050);
pub const ACPU_CTRL: RegisterHandle = crf(0x060);
pub const DBG_TRACE_CTRL: RegisterHandle = crf(0x064);
pub const DBG_FPD_CTRL: RegisterHandle = crf(0x068);
pub const DP_VIDEO_REF_CTRL: RegisterHandle = crf(0x070);
pub const DP_AUDIO_REF_CTRL: RegisterHandle = crf(0x074);
pub const DP_STC_REF_CTRL: RegisterHandle = crf(0x07C);
pub const DDR_CTRL: RegisterHandle = crf(0x080);
pub const GPU_REF_CTRL: RegisterHandle = crf(0x084);
pub const SATA_REF_CTRL: RegisterHandle = crf(0x0A0);
pub const PCIE_REF_CTRL: RegisterHandle = crf(0x0B4);
pub const FPD_DMA_REF_CTRL: RegisterHandle = crf(0x0B8);
pub const DPDMA_REF_CTRL: RegisterHandle = crf(0x0BC);
pub const TOPSW_MAIN_CTRL: RegisterHandle = crf(0x0C0);
pub const TOPSW_LSBUS_CTRL: RegisterHandle = crf(0x0C4);
pub const GTGREF0_REF_CTRL: RegisterHandle = crf(0x0C8);
pub const DBG_TSTMP_CTRL: RegisterHandle = crf(0x0F8);

// IOU_SLCR / FPD_SLCR
pub const CAN_MIO_CLK_CTRL: RegisterHandle = RegisterHandle::new(IOU_SLCR_BASE + 0x304);
pub const GEM_CLK_CTRL: RegisterHandle = RegisterHandle::new(IOU_SLCR_BASE + 0x308);
pub const WDT_CLK_SEL: RegisterHandle = RegisterHandle::new(FPD_SLCR_BASE + 0x100);

register_bitfields![u32,
    pub PLL_CTRL [
        /// Post-output clock source select
        POST_SRC OFFSET(24) NUMBITS(3) [],
        /// Pre-output clock source select
        PRE_SRC OFFSET(20) NUMBITS(3) [],
        /// Divide the VCO output by two
        DIV2 OFFSET(16) NUMBITS(1) [],
        /// Feedback divisor
        FBDIV OFFSET(8) NUMBITS(7) [],
        /// Route the post source to the output instead of the VCO
        BYPASS OFFSET(3) NUMBITS(1) [],
        /// Hold the PLL in reset
        RESET OFFSET(0) NUMBITS(1) []
    ],
    pub PLL_FRAC_CFG [
        /// Fractional mode enable
        ENABLED OFFSET(31) NUMBITS(1) [],
        /// Fractional part of the feedback divisor, in 1/65536 units
        DATA OFFSET(0) NUMBITS(16) []
    ]
];

/// Build a field descriptor for a selector or divisor described by a table
/// entry rather than by a named bitfield.
pub const fn dynamic_field(shift: u8, width: u8) -> Field<u32, ()> {
    Field::<u32, ()>::new((1u32 << width) - 1, shift as usize)
}
