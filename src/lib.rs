// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod models;
pub mod error;
pub mod region;
pub mod tiers;
pub mod fees;
pub mod rates;
pub mod convert;
pub mod cancel;
pub mod utils;
pub mod commands;

// The four operations the rest of the platform is allowed to call.
pub use cancel::compute_policy;
pub use convert::{Convert, DirectConverter, RemoteConverter};
pub use fees::compute_fees;
pub use region::infer_region;
