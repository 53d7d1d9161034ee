//! Project status buckets.
//!
//! The `projects.status` column carries a richer set of raw labels than the
//! API exposes. List queries filter by one of three buckets; the mapping is
//! held here as data so the SQL layer can bind it as an array parameter
//! instead of building query text from the filter value.

/// Status written to a project when planning is submitted.
pub const SCHEDULED_STATUS: &str = "Scheduled";

/// Enumerated status filter accepted by the project list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Projects still being planned.
    Planning,
    /// Projects with work underway.
    Work,
    /// Finished projects.
    Completed,
}

impl StatusFilter {
    /// Parse the wire value of the `status` query parameter.
    ///
    /// Returns `None` for unrecognized values; callers treat that as
    /// "no status filter" rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planning" => Some(Self::Planning),
            "work" => Some(Self::Work),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Raw status labels belonging to this bucket.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Planning => &["Planning", "Draft", "Scheduled"],
            Self::Work => &["In Progress", "Active"],
            Self::Completed => &["Completed", "Finished"],
        }
    }
}
