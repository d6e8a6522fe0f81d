// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for alarm delivery and presentation

pub mod delivery;
pub mod presenter;
pub mod traced;

pub use delivery::{DeliveryAdapter, DeliveryError, NoOpDeliveryAdapter, TimerDelivery};
pub use presenter::{ConsolePresenter, NoOpPresenterAdapter, PresentError, PresenterAdapter};
pub use traced::{TracedDeliveryAdapter, TracedPresenterAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use delivery::{DeliveryCall, FakeDeliveryAdapter};
#[cfg(any(test, feature = "test-support"))]
pub use presenter::{FakePresenterAdapter, PresentCall};
