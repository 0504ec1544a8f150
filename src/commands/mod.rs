// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod quote;
pub mod region;
pub mod convert;
pub mod rates;
pub mod cancel;
