//! Helpers shared by unit tests.

use std::pin::pin;
use std::task::{Context, Poll, Waker};

/// Drive a future that never actually suspends (the non-browser stubs) to
/// completion.
pub fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
