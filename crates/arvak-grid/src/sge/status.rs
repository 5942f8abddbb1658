//! Grid Engine status code decoding.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::snapshot::QueueStatus;

/// Raw `qstat` state codes and the queue status each one maps to.
///
/// Codes are case-sensitive.
pub const STATUS_CODES: &[(&str, QueueStatus)] = &[
    ("t", QueueStatus::Running),
    ("r", QueueStatus::Running),
    ("R", QueueStatus::Running),
    ("hr", QueueStatus::Running),
    ("qw", QueueStatus::Pending),
    ("h", QueueStatus::Pending),
    ("w", QueueStatus::Pending),
    ("P", QueueStatus::Pending),
    ("N", QueueStatus::Pending),
    ("S", QueueStatus::Hold),
    ("s", QueueStatus::Hold),
    ("T", QueueStatus::Hold),
    ("Tr", QueueStatus::Hold),
    ("hqw", QueueStatus::Hold),
    ("Eqw", QueueStatus::Error),
    ("E", QueueStatus::Error),
];

static STATUS_TABLE: LazyLock<FxHashMap<&'static str, QueueStatus>> =
    LazyLock::new(|| STATUS_CODES.iter().copied().collect());

/// Decode a raw state code. Codes missing from the table map to
/// [`QueueStatus::Unknown`].
pub fn map_status_code(code: &str) -> QueueStatus {
    match STATUS_TABLE.get(code) {
        Some(status) => *status,
        None => {
            tracing::warn!("Unknown Grid Engine state code: {}", code);
            QueueStatus::Unknown
        }
    }
}
