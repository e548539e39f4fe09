use chrono::NaiveDate;

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - designed to be **append-only**
///
/// Business time in this domain is a calendar date; no operation carries
/// time-of-day semantics, so events expose the date they were booked under
/// rather than a full timestamp.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "ledger.account.funds_deposited").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn schema_version(&self) -> u32;

    /// The calendar date the event was booked under (business time).
    fn occurred_on(&self) -> NaiveDate;
}
