use std::marker::PhantomData;
use tokio::sync::watch;

use super::reducer::Reducer;

/// Owns one state instance and runs every transition through `R`.
///
/// Subscribers receive a [`watch::Receiver`] that is marked changed only
/// when a dispatch produced a different state.
pub struct Store<R: Reducer> {
    tx: watch::Sender<R::State>,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            _reducer: PhantomData,
        }
    }

    /// Reduce `intent` into the current state. Returns true if it changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.tx.send_if_modified(|state| {
            let previous = state.clone();
            *state = R::reduce(std::mem::take(state), intent);
            *state != previous
        })
    }

    /// Borrow the current state. Do not hold across a dispatch.
    pub fn state(&self) -> watch::Ref<'_, R::State> {
        self.tx.borrow()
    }

    pub fn snapshot(&self) -> R::State {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }
}
