//! Confirmation gate for destructive actions
//!
//! Two-step interaction: `request` shows the modal for a target,
//! `begin` transitions into the in-flight state (close affordance
//! disabled, duplicate submission impossible), `resolve` closes. The
//! underlying mutation is only reachable through `begin`.

#[derive(Debug, Clone, PartialEq, Eq)]
enum GateState<T> {
    Closed,
    Pending(T),
    Confirming(T),
}

/// Gate that a delete/deactivate must pass through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmGate<T> {
    state: GateState<T>,
}

impl<T> Default for ConfirmGate<T> {
    fn default() -> Self {
        Self {
            state: GateState::Closed,
        }
    }
}

impl<T: Clone> ConfirmGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for a target. Ignored while a request is already
    /// open or in flight.
    pub fn request(&mut self, target: T) -> bool {
        if matches!(self.state, GateState::Closed) {
            self.state = GateState::Pending(target);
            true
        } else {
            false
        }
    }

    /// Close without side effect. Refused while the request is in flight.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            GateState::Pending(_) => {
                self.state = GateState::Closed;
                true
            }
            _ => false,
        }
    }

    /// Move from pending to in-flight, handing back the target the caller
    /// should mutate. Returns `None` unless a request is pending.
    pub fn begin(&mut self) -> Option<T> {
        match &self.state {
            GateState::Pending(target) => {
                let target = target.clone();
                self.state = GateState::Confirming(target.clone());
                Some(target)
            }
            _ => None,
        }
    }

    /// The in-flight request finished (either way); close the modal
    pub fn resolve(&mut self) {
        self.state = GateState::Closed;
    }

    /// The target awaiting or undergoing confirmation
    pub fn target(&self) -> Option<&T> {
        match &self.state {
            GateState::Closed => None,
            GateState::Pending(t) | GateState::Confirming(t) => Some(t),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, GateState::Closed)
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.state, GateState::Confirming(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_request_confirm_cycle() {
        let mut gate: ConfirmGate<String> = ConfirmGate::new();
        assert!(gate.begin().is_none());

        assert!(gate.request("admin A".to_string()));
        assert_eq!(gate.target().map(String::as_str), Some("admin A"));
        assert!(!gate.is_confirming());

        let target = gate.begin().unwrap();
        assert_eq!(target, "admin A");
        assert!(gate.is_confirming());

        gate.resolve();
        assert!(!gate.is_open());
    }

    #[test]
    fn cancel_only_from_pending() {
        let mut gate: ConfirmGate<&str> = ConfirmGate::new();
        assert!(!gate.cancel());

        gate.request("x");
        assert!(gate.cancel());
        assert!(!gate.is_open());

        gate.request("y");
        gate.begin();
        // close affordance disabled while in flight
        assert!(!gate.cancel());
        assert!(gate.is_confirming());
    }

    #[test]
    fn duplicate_begin_is_impossible() {
        let mut gate: ConfirmGate<&str> = ConfirmGate::new();
        gate.request("x");
        assert!(gate.begin().is_some());
        assert!(gate.begin().is_none());
    }

    #[test]
    fn request_while_open_is_ignored() {
        let mut gate: ConfirmGate<&str> = ConfirmGate::new();
        gate.request("x");
        assert!(!gate.request("y"));
        assert_eq!(gate.target(), Some(&"x"));
    }
}
