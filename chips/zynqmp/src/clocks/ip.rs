// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Off-chip input clocks.
//!
//! Input clocks have no parent, are always running and their rate comes from
//! the board [`Config`](crate::config::Config). They never go through the
//! enable or rate dispatch tables.

use super::output::ClockId;
use super::topology::{IpId, INPUTS};

pub struct IpDesc {
    pub id: IpId,
    pub output: Option<ClockId>,
}

pub(crate) fn fetch_index_for_output(id: ClockId) -> Option<usize> {
    INPUTS.iter().position(|desc| desc.output == Some(id))
}
