//! Scroll sampling.
//!
//! The window `scroll` listener is passive and only requests an animation
//! frame; the frame callback measures the page and sends one sample through
//! the coroutine channel. Listener and frame callbacks never touch signals.

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::config::story;
use crate::core::scroll::ScrollSeries;

/// Live reading-progress series for the page. The listener is attached on
/// first render and removed, along with any pending frame, on unmount.
pub fn use_scroll_series() -> Signal<ScrollSeries> {
    let series = use_signal(|| ScrollSeries::with_capacity(story().series_capacity));

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<f64>| {
        let mut series = series;
        async move {
            while let Some(sample) = rx.next().await {
                series.write().push(sample);
            }
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(|| std::rc::Rc::new(browser::ScrollListener::attach(coroutine.tx())));
        use_drop(move || listener.detach());
    }

    // Native renderers have no window scroll to observe; the series stays at
    // its initial sample.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = coroutine;

    series
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures_channel::mpsc::UnboundedSender;
    use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
    use gloo_render::{request_animation_frame, AnimationFrame};
    use tracing::debug;

    use crate::core::scroll::{scroll_percent, FrameCoalescer};

    type Frames = Rc<RefCell<FrameCoalescer<AnimationFrame>>>;

    pub(super) struct ScrollListener {
        listener: RefCell<Option<EventListener>>,
        frames: Frames,
    }

    impl ScrollListener {
        pub(super) fn attach(tx: UnboundedSender<f64>) -> Self {
            let frames: Frames = Rc::new(RefCell::new(FrameCoalescer::new()));
            let listener = web_sys::window().map(|window| {
                let frames = frames.clone();
                let tx = tx.clone();
                let options = EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: true,
                };
                EventListener::new_with_options(&window, "scroll", options, move |_| {
                    request_sample(&frames, &tx);
                })
            });
            if listener.is_none() {
                debug!("No window; scroll tracking disabled");
            }

            // Pick up the position of a page restored mid-scroll.
            request_sample(&frames, &tx);

            Self {
                listener: RefCell::new(listener),
                frames,
            }
        }

        pub(super) fn detach(&self) {
            self.listener.borrow_mut().take();
            // Dropping an AnimationFrame cancels it.
            self.frames.borrow_mut().cancel();
            debug!("Scroll listener detached");
        }
    }

    fn request_sample(frames: &Frames, tx: &UnboundedSender<f64>) {
        let callback_frames = frames.clone();
        let tx = tx.clone();
        let frame = request_animation_frame(move |_| {
            let _finished = callback_frames.borrow_mut().complete();
            if let Some(percent) = measure() {
                let _ = tx.unbounded_send(percent);
            }
        });
        let displaced = frames.borrow_mut().schedule(frame);
        drop(displaced);
    }

    fn measure() -> Option<f64> {
        let window = web_sys::window()?;
        let offset = window.scroll_y().ok()?;
        let viewport = window.inner_height().ok()?.as_f64()?;
        let document_height = window.document()?.document_element()?.scroll_height() as f64;
        Some(scroll_percent(offset, document_height, viewport))
    }
}
