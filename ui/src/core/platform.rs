//! Thin wrappers over the browser for the few places the page reaches outside
//! of Dioxus: in-page navigation and math typesetting.

use tracing::debug;

/// Smooth-scroll the element with DOM id `anchor` into view. Unknown anchors
/// are ignored.
pub fn scroll_to_anchor(anchor: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            debug!(anchor, "Anchor not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        debug!(anchor, "Scrolling via document eval");
        let script = format!(
            "document.getElementById({anchor:?})?.scrollIntoView({{ behavior: 'smooth' }});"
        );
        let _ = dioxus::prelude::document::eval(&script);
    }
}

/// External formula renderer that rewrites `$…$` / `$$…$$` spans in the DOM.
pub trait MathTypesetter {
    /// The engine the renderer drives has finished loading.
    fn engine_loaded(&self) -> bool {
        true
    }
    fn available(&self) -> bool;
    fn typeset(&self);
}

/// Run `typesetter` if it is present on the page. Returns whether it ran.
pub fn typeset_math(typesetter: &dyn MathTypesetter) -> bool {
    if !typesetter.available() {
        debug!("Math typesetter unavailable; leaving formulas as text");
        return false;
    }
    typesetter.typeset();
    true
}

/// What a polling loop should do after one typesetting attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypesetStep {
    Done,
    Retry,
    GaveUp,
}

/// Bounded retries while the renderer's scripts are still loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypesetRetry {
    attempts_left: u32,
}

impl TypesetRetry {
    pub const fn new(attempts: u32) -> Self {
        Self {
            attempts_left: attempts,
        }
    }

    pub fn step(&mut self, typesetter: &dyn MathTypesetter) -> TypesetStep {
        if typeset_math(typesetter) {
            return TypesetStep::Done;
        }
        self.attempts_left = self.attempts_left.saturating_sub(1);
        if self.attempts_left == 0 {
            TypesetStep::GaveUp
        } else {
            TypesetStep::Retry
        }
    }
}

/// KaTeX auto-render (`window.renderMathInElement`). Auto-render binds
/// `window.katex` when it loads, so it must be injected after KaTeX itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct KatexAutoRender;

#[cfg(target_arch = "wasm32")]
impl KatexAutoRender {
    fn function() -> Option<js_sys::Function> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &"renderMathInElement".into())
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }

    fn options() -> js_sys::Object {
        use wasm_bindgen::JsValue;

        let delimiters = js_sys::Array::new();
        for (left, right, display) in [("$$", "$$", true), ("$", "$", false)] {
            let entry = js_sys::Object::new();
            js_sys::Reflect::set(&entry, &"left".into(), &left.into()).ok();
            js_sys::Reflect::set(&entry, &"right".into(), &right.into()).ok();
            js_sys::Reflect::set(&entry, &"display".into(), &JsValue::from_bool(display)).ok();
            delimiters.push(&entry);
        }
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"delimiters".into(), &delimiters).ok();
        options
    }
}

impl MathTypesetter for KatexAutoRender {
    #[cfg(target_arch = "wasm32")]
    fn engine_loaded(&self) -> bool {
        web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &"katex".into()).ok())
            .is_some_and(|katex| katex.is_object())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn engine_loaded(&self) -> bool {
        false
    }

    #[cfg(target_arch = "wasm32")]
    fn available(&self) -> bool {
        Self::function().is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn available(&self) -> bool {
        false
    }

    #[cfg(target_arch = "wasm32")]
    fn typeset(&self) {
        use wasm_bindgen::JsValue;

        let Some(function) = Self::function() else {
            return;
        };
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        if let Err(err) = function.call2(&JsValue::NULL, &body, &Self::options()) {
            tracing::warn!("renderMathInElement failed: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn typeset(&self) {}
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakeTypesetter {
        present: bool,
        runs: Cell<u32>,
    }

    impl MathTypesetter for FakeTypesetter {
        fn available(&self) -> bool {
            self.present
        }

        fn typeset(&self) {
            self.runs.set(self.runs.get() + 1);
        }
    }

    #[test]
    fn missing_typesetter_is_skipped() {
        let fake = FakeTypesetter {
            present: false,
            runs: Cell::new(0),
        };
        assert!(!typeset_math(&fake));
        assert_eq!(fake.runs.get(), 0);
    }

    #[test]
    fn present_typesetter_runs() {
        let fake = FakeTypesetter {
            present: true,
            runs: Cell::new(0),
        };
        assert!(typeset_math(&fake));
        assert_eq!(fake.runs.get(), 1);
    }

    #[test]
    fn katex_is_absent_off_the_web() {
        assert!(!typeset_math(&KatexAutoRender));
    }

    struct LateTypesetter {
        ready_after: u32,
        checks: Cell<u32>,
        runs: Cell<u32>,
    }

    impl MathTypesetter for LateTypesetter {
        fn available(&self) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.checks.get() > self.ready_after
        }

        fn typeset(&self) {
            self.runs.set(self.runs.get() + 1);
        }
    }

    #[test]
    fn late_typesetter_runs_once_it_appears() {
        let late = LateTypesetter {
            ready_after: 3,
            checks: Cell::new(0),
            runs: Cell::new(0),
        };
        let mut retry = TypesetRetry::new(10);
        let steps: Vec<_> = (0..4).map(|_| retry.step(&late)).collect();
        assert_eq!(
            steps,
            [
                TypesetStep::Retry,
                TypesetStep::Retry,
                TypesetStep::Retry,
                TypesetStep::Done
            ]
        );
        assert_eq!(late.runs.get(), 1);
    }

    #[test]
    fn retries_are_bounded() {
        let never = FakeTypesetter {
            present: false,
            runs: Cell::new(0),
        };
        let mut retry = TypesetRetry::new(2);
        assert_eq!(retry.step(&never), TypesetStep::Retry);
        assert_eq!(retry.step(&never), TypesetStep::GaveUp);
        assert_eq!(never.runs.get(), 0);
    }

    #[test]
    fn katex_engine_is_absent_off_the_web() {
        assert!(!KatexAutoRender.engine_loaded());
    }
}
