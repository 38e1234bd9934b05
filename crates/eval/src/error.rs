// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::{CardError, HandClass};

/// Errors returned by hand classification and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card built from raw values is not valid.
    #[error(transparent)]
    InvalidCard(#[from] CardError),
    /// A hand has the wrong number of cards or duplicate cards.
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    /// A hand class is missing from the canonical table, this is a bug.
    #[error("hand class {0} not found in the canonical table")]
    ClassNotFound(HandClass),
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, Error>;
