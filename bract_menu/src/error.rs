// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Structural misuse that cannot be recovered from locally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum MenuError {
    /// A selection helper ran with neither a disclosure container nor a popover above it.
    #[error("selection requires an enclosing menu or popover")]
    MissingContext,
    /// An event named an item that was never registered.
    #[error("no item is registered under this id")]
    UnknownItem,
}
