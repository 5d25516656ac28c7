// SPDX-License-Identifier: MPL-2.0
//! Build and deployment helpers shipped as the `copy-assets` and
//! `verify-deploy` binaries.

pub mod copy_assets;
pub mod deploy_check;
