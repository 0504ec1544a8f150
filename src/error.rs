// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid price {0} cents; prices must be positive")]
    InvalidPrice(i64),

    #[error("Unknown currency code '{0}'")]
    UnknownCurrency(String),

    #[error("Unknown region '{0}'")]
    UnknownRegion(String),

    #[error("Unknown booking kind '{0}'")]
    UnknownBookingKind(String),

    #[error("Booking started {0} minutes ago; cancellation is no longer possible")]
    BookingAlreadyStarted(i64),
}
