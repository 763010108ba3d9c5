//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PwmService (domain)
//! ```
//!
//! Driven adapters (the shared duty word, the LED pin) implement these
//! traits. The [`PwmService`](super::service::PwmService) consumes them
//! via generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Duty store port (driven adapter: shared memory → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick to obtain the
/// current duty word.
///
/// ## Consistency contract
///
/// The backing word is written by an external actor with no locking and
/// no handshake, so implementations return a **best-effort snapshot**:
/// the value observed at the instant of the call, with no cross-read
/// consistency guarantee. A read that races a write may yield a torn
/// value; callers treat whatever comes back as valid input. Implementors
/// must not add locking — the external writer cannot cooperate with it.
pub trait DutyStorePort {
    /// Fetch the raw duty word. Every value is valid; values ≥ 256 simply
    /// exceed the counter's range and read as "always on".
    fn raw_duty(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Binary state of the indicator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Write-side port: the domain calls this to drive the one fixed output
/// channel. Exactly one call per tick.
pub trait OutputPort {
    fn set_output(&mut self, state: LedState);
}
