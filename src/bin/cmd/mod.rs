// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod classify;
mod inspect;
mod pose;
mod read;

pub use classify::ClassifyCmd;
pub use inspect::InspectCmd;
pub use pose::PoseCmd;
pub use read::ReadCmd;
