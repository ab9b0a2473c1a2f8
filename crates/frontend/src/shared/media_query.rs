//! `matchMedia` as a reactive signal.

use contracts::shared::viewport::{BreakpointObserver, MediaQuerySource, Subscription};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

/// `window.matchMedia(query)` as a [`MediaQuerySource`].
pub struct WindowMediaQuery {
    list: MediaQueryList,
}

impl WindowMediaQuery {
    /// `None` when there is no window or the query is rejected by the browser.
    pub fn new(query: &str) -> Option<Self> {
        let window = web_sys::window()?;
        match window.match_media(query) {
            Ok(Some(list)) => Some(Self { list }),
            Ok(None) => None,
            Err(err) => {
                log::warn!("matchMedia('{}') failed: {:?}", query, err);
                None
            }
        }
    }
}

impl MediaQuerySource for WindowMediaQuery {
    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription {
        let list = self.list.clone();
        let closure = {
            let list = list.clone();
            Closure::wrap(Box::new(move |event: web_sys::Event| {
                let matches = event
                    .dyn_ref::<MediaQueryListEvent>()
                    .map(|e| e.matches())
                    .unwrap_or_else(|| list.matches());
                on_change(matches);
            }) as Box<dyn FnMut(_)>)
        };

        if let Err(err) =
            list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            log::warn!("matchMedia change listener not registered: {:?}", err);
            return Subscription::noop();
        }

        Subscription::new(move || {
            let _ = list
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        })
    }
}

/// Tracks `query` for the lifetime of the calling component.
///
/// Without viewport support the signal stays at `fallback`.
pub fn use_media_query(query: &str, fallback: bool) -> Signal<bool> {
    let source = WindowMediaQuery::new(query);
    if source.is_none() {
        log::warn!("viewport queries unavailable, '{}' fixed to {}", query, fallback);
    }
    use_media_query_source(source, fallback)
}

/// Signal over any [`MediaQuerySource`]; the listener is removed in `on_cleanup`.
pub fn use_media_query_source<S>(source: Option<S>, fallback: bool) -> Signal<bool>
where
    S: MediaQuerySource + 'static,
{
    let (matches, set_matches) = signal(fallback);

    let observer = BreakpointObserver::observe(source.as_ref(), fallback, move |m| {
        set_matches.set(m)
    });
    set_matches.set(observer.initial());

    let observer = StoredValue::new_local(observer);
    on_cleanup(move || observer.dispose());

    matches.into()
}
