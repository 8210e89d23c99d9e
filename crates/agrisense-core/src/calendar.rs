//! Month source for the seasonal weather estimate.

use chrono::{Datelike, Utc};

/// Where the engine takes the current month from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Calendar {
    /// The UTC month of the system clock at call time.
    #[default]
    System,
    /// A pinned month (1-12).
    Fixed(u32),
}

impl Calendar {
    /// The month (1-12) to use for a synthesis starting now.
    pub fn current_month(self) -> u32 {
        match self {
            Self::System => Utc::now().month(),
            Self::Fixed(month) => month,
        }
    }
}
