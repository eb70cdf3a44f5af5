// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query module - non-interactive commands over a ranked session

pub mod rank;
