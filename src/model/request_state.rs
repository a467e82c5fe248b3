/// Lifecycle of one user-triggered request: idle, loading, then success or
/// error. A new action restarts it; an in-flight request is never cancelled,
/// so whichever response settles last is what stays on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn begin(&mut self) {
        *self = RequestState::Loading;
    }

    pub fn settle<E: std::fmt::Display>(&mut self, outcome: Result<T, E>) {
        *self = match outcome {
            Ok(value) => RequestState::Ready(value),
            Err(e) => RequestState::Failed(e.to_string()),
        };
    }

    /// Clears an error so the inline message disappears; other states are kept.
    pub fn dismiss(&mut self) {
        if matches!(self, RequestState::Failed(_)) {
            *self = RequestState::Idle;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RequestState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_cycle() {
        let mut state = RequestState::<u32>::default();
        assert_eq!(state, RequestState::Idle);

        state.begin();
        assert!(state.is_loading());

        state.settle::<String>(Ok(7));
        assert_eq!(state.ready(), Some(&7));
        assert!(!state.is_loading());
    }

    #[test]
    fn error_cycle_and_dismiss() {
        let mut state = RequestState::<u32>::Idle;
        state.begin();
        state.settle(Err("backend down"));
        assert_eq!(state.error(), Some("backend down"));

        state.dismiss();
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn dismiss_keeps_data() {
        let mut state = RequestState::Ready(1);
        state.dismiss();
        assert_eq!(state.ready(), Some(&1));
    }

    #[test]
    fn last_settlement_wins() {
        let mut state = RequestState::<&str>::Idle;
        state.begin();
        state.begin();
        state.settle::<String>(Ok("second"));
        state.settle::<String>(Ok("first"));
        assert_eq!(state.ready(), Some(&"first"));
    }
}
