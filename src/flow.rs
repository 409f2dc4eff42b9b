//! Unidirectional state-machine primitives.
//!
//! Interactive units in this crate are driven as explicit state machines:
//! events flow into a reducer, the reducer returns the next state, views
//! read the state. Tests drive the machine with literal state assertions
//! instead of racing real timing.
//!
//! ```text
//! Event ──→ Reducer ──→ State ──→ View
//!   ↑                              │
//!   └──────────────────────────────┘
//! ```

/// Marker trait for view-facing state objects.
///
/// States are immutable snapshots: a reducer consumes one and returns the
/// next, and equality comparison detects whether anything changed.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for events fed into a reducer.
///
/// Events cover user actions (edits, submit presses) and settled system
/// outcomes (a relay accepting or rejecting a delivery).
pub trait FlowEvent: Send + 'static {}

/// Pure transition function over a state machine.
///
/// The reducer is the only place where state transitions happen; it must
/// have no side effects.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ViewState;

    /// The event type this reducer handles.
    type Event: FlowEvent;

    /// Apply one event and return the next state.
    fn reduce(state: Self::State, event: Self::Event) -> Self::State;
}
