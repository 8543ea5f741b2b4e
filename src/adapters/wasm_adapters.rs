use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll, Waker},
    time::Duration,
};
use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::ports::TimePort;

/// Browser clock plus a `setTimeout`-backed timer.
pub struct WasmTimeAdapter;

#[async_trait::async_trait(?Send)]
impl TimePort for WasmTimeAdapter {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn now_secs(&self) -> u64 {
        (js_sys::Date::now() / 1000.0) as u64
    }

    async fn sleep(&self, duration: Duration) {
        Timeout::new(duration).await;
    }
}

struct TimeoutState {
    fired: bool,
    waker: Option<Waker>,
}

/// Single-shot future completed by a `setTimeout` callback.
struct Timeout {
    state: Rc<RefCell<TimeoutState>>,
    _cb: Closure<dyn FnMut()>,
}

impl Timeout {
    fn new(duration: Duration) -> Self {
        let state = Rc::new(RefCell::new(TimeoutState {
            fired: false,
            waker: None,
        }));
        let cb_state = Rc::clone(&state);
        let cb = Closure::wrap(Box::new(move || {
            let mut s = cb_state.borrow_mut();
            s.fired = true;
            if let Some(waker) = s.waker.take() {
                waker.wake();
            }
        }) as Box<dyn FnMut()>);
        schedule_timeout(&cb, duration.as_millis() as f64);
        Self { state, _cb: cb }
    }
}

impl Future for Timeout {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut s = self.state.borrow_mut();
        if s.fired {
            Poll::Ready(())
        } else {
            s.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

// Looks up `setTimeout` on the global object rather than assuming a `window`,
// so worker contexts behave the same.
fn schedule_timeout(cb: &Closure<dyn FnMut()>, ms: f64) {
    let global = js_sys::global();
    let set_timeout = js_sys::Reflect::get(&global, &JsValue::from_str("setTimeout"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(f) = set_timeout {
        let _ = f.call2(&global, cb.as_ref().unchecked_ref(), &JsValue::from_f64(ms));
    }
}
