//! Waiting for freshly injected images before the collection is revealed.

use crate::shared::dom;
use futures::future::{select, Either};
use futures::stream::{FuturesUnordered, StreamExt};
use gloo_timers::future::TimeoutFuture;
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlImageElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageOutcome {
    /// `load` or `error` fired
    Settled,
    TimedOut,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageWaitReport {
    pub total: usize,
    pub already_complete: usize,
    pub settled: usize,
    pub timed_out: usize,
}

/// Resolve once every `img` under `container` has loaded, failed, or used up
/// its own `timeout_ms`. The waits run concurrently.
pub async fn wait_for_images(container: &Element, timeout_ms: u32) -> ImageWaitReport {
    let images: Vec<HtmlImageElement> = dom::query_all_in(container, "img")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect();

    let mut report = ImageWaitReport {
        total: images.len(),
        ..Default::default()
    };

    let mut pending: FuturesUnordered<_> = images
        .into_iter()
        .filter(|img| {
            let complete = img.complete();
            if complete {
                report.already_complete += 1;
            }
            !complete
        })
        .map(|img| wait_one(img, timeout_ms))
        .collect();

    while let Some(outcome) = pending.next().await {
        match outcome {
            ImageOutcome::Settled => report.settled += 1,
            ImageOutcome::TimedOut => report.timed_out += 1,
        }
    }

    report
}

async fn wait_one(img: HtmlImageElement, timeout_ms: u32) -> ImageOutcome {
    let settled = Promise::new(&mut |resolve, _reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&resolve));
    });

    let settled = JsFuture::from(settled);
    let timeout = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(settled, timeout);

    let outcome = match select(settled, timeout).await {
        Either::Left(_) => ImageOutcome::Settled,
        Either::Right(_) => {
            log::debug!("Image {} not ready after {}ms", img.src(), timeout_ms);
            ImageOutcome::TimedOut
        }
    };

    img.set_onload(None);
    img.set_onerror(None);
    outcome
}
