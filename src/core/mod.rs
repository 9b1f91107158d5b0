// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod cache;
pub mod coordinator;
pub mod storage;
pub mod validation;
