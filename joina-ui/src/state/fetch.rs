//! View Fetch Binding
//!
//! Ties a [`ViewController`] to the lifetime of the component that mounts
//! it. The initial request goes out when the component is created; cleanup
//! unmounts the controller and aborts whatever request is still in flight.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use leptos::*;
use web_sys::AbortController;

use joina::fetch::{Completion, FetchState, FetchTicket, ViewController, ViewData};
use joina::stats::StatsPayload;

use crate::api;

/// Reactive handle on one view's data
pub struct ViewHandle<P: StatsPayload> {
    pub state: ReadSignal<FetchState<ViewData<P>>>,
    pub last_updated: ReadSignal<Option<DateTime<Utc>>>,
    /// Re-enter loading and fetch again
    pub retry: Callback<()>,
}

impl<P: StatsPayload> Clone for ViewHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: StatsPayload> Copy for ViewHandle<P> {}

/// Mount a view controller for `P` in the current reactive owner
pub fn use_view_state<P: StatsPayload>() -> ViewHandle<P> {
    let controller = Rc::new(RefCell::new(ViewController::<P>::new()));
    let in_flight: Rc<RefCell<Option<AbortController>>> = Rc::new(RefCell::new(None));

    let (state, set_state) = create_signal(FetchState::Loading);
    let (last_updated, set_last_updated) = create_signal(None);

    let start = {
        let controller = Rc::clone(&controller);
        let in_flight = Rc::clone(&in_flight);

        move |ticket: FetchTicket| {
            set_state.set(FetchState::Loading);

            let abort = AbortController::new().ok();
            let signal = abort.as_ref().map(|a| a.signal());
            if let Some(previous) = in_flight.replace(abort) {
                previous.abort();
            }

            let controller = Rc::clone(&controller);
            spawn_local(async move {
                let outcome = api::fetch_text(ticket.endpoint(), signal.as_ref()).await;

                let applied = {
                    let mut controller = controller.borrow_mut();
                    match controller.complete(ticket, outcome) {
                        Completion::Applied => {
                            Some((controller.state().clone(), controller.last_updated()))
                        }
                        Completion::Stale | Completion::Unmounted => None,
                    }
                };

                if let Some((next, updated)) = applied {
                    set_state.set(next);
                    set_last_updated.set(updated);
                }
            });
        }
    };

    let initial = controller.borrow_mut().mount();
    start(initial);

    let retry = {
        let controller = Rc::clone(&controller);
        Callback::new(move |_: ()| {
            let ticket = controller.borrow_mut().retry();
            if let Some(ticket) = ticket {
                start(ticket);
            }
        })
    };

    on_cleanup(move || {
        controller.borrow_mut().unmount();
        if let Some(request) = in_flight.borrow_mut().take() {
            request.abort();
        }
    });

    ViewHandle {
        state,
        last_updated,
        retry,
    }
}
