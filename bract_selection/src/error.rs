// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::controller::OwnershipMode;

/// Misuse of a selection controller's configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The seed value's shape does not match `multi_select`.
    #[error("selection value shape does not match multi_select={multi_select}")]
    ShapeMismatch {
        /// The container's multi-select flag.
        multi_select: bool,
    },
    /// Ownership changed between controlled and uncontrolled after initialization.
    #[error("selection ownership switched from {from:?} to {to:?}")]
    OwnershipSwitched {
        /// Mode the controller was created with.
        from: OwnershipMode,
        /// Mode requested later.
        to: OwnershipMode,
    },
}
