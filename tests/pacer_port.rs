//! The port-driven `Pacer` honors the same timer contract as the free
//! functions when backed by the tokio adapter.

use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::time::advance;

use pacer::adapters::TokioTimeAdapter;
use pacer::consts::{SHORT_DELAY_MS, SUCCESS_MESSAGE_DURATION_MS};
use pacer::delay::Pacer;

fn pacer() -> Pacer {
    Pacer::new(Arc::new(TokioTimeAdapter))
}

#[tokio::test(start_paused = true)]
async fn delay_defaults_to_short_delay() {
    let p = pacer();
    let fut = p.delay(None);
    tokio::pin!(fut);

    assert!(fut.as_mut().now_or_never().is_none());
    advance(Duration::from_millis(SHORT_DELAY_MS - 1)).await;
    assert!(fut.as_mut().now_or_never().is_none());
    advance(Duration::from_millis(1)).await;
    assert_eq!(fut.as_mut().now_or_never(), Some(()));
}

#[tokio::test(start_paused = true)]
async fn zero_still_passes_through_scheduler() {
    let p = pacer();
    let fut = p.delay(Some(0));
    tokio::pin!(fut);

    assert!(fut.as_mut().now_or_never().is_none());
    fut.await;
}

#[tokio::test(start_paused = true)]
async fn success_hold_matches_constant() {
    let p = pacer();
    let fut = p.hold_success_message();
    tokio::pin!(fut);

    assert!(fut.as_mut().now_or_never().is_none());
    advance(Duration::from_millis(SUCCESS_MESSAGE_DURATION_MS)).await;
    assert_eq!(fut.as_mut().now_or_never(), Some(()));
}

#[test]
fn clock_reads_agree_on_scale() {
    let p = pacer();
    let secs = p.now_secs();
    let millis = p.now_millis();
    // Two separate wall-clock reads may straddle a second boundary.
    assert!((millis / 1000).abs_diff(secs) <= 1);
}

#[tokio::test(start_paused = true)]
async fn pacer_is_cheap_to_clone_and_share() {
    let p = pacer();
    let p2 = p.clone();

    let a = p.delay(Some(5));
    let b = p2.delay(Some(5));
    tokio::pin!(a);
    tokio::pin!(b);

    assert!(a.as_mut().now_or_never().is_none());
    assert!(b.as_mut().now_or_never().is_none());
    advance(Duration::from_millis(5)).await;
    assert_eq!(a.as_mut().now_or_never(), Some(()));
    assert_eq!(b.as_mut().now_or_never(), Some(()));
}
