/// Index of a concept node within a [`crate::universe::Universe`].
///
/// This is an index into `Universe::nodes` in catalog order, and is only
/// meaningful within the lifetime of a given `Universe` instance.
pub type ConceptIndex = usize;

/// Identifier for a scheduled timed action (highlight expiry, tour advance).
///
/// Handles are allocated by the owning engine and never reused within a
/// session.
pub type TaskHandle = u64;
