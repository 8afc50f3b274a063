// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised by fallible kernel accessors.
///
/// Only indexed access can fail. Degenerate geometry never produces an error;
/// it resolves to a documented fallback value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A linear component or cell index was outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },
    /// A `(row, column)` pair addressed a cell outside the 4×4 grid.
    #[error("matrix cell ({row}, {column}) out of range for a 4x4 matrix")]
    CellOutOfRange {
        /// The rejected row.
        row: usize,
        /// The rejected column.
        column: usize,
    },
}
