use common::{LayoutMode, ShellAction, ShellState};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Shell toggle state owned by the root component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellStore(pub ShellState);

impl ShellStore {
    pub fn new(mode: LayoutMode) -> Self {
        Self(ShellState::new(mode))
    }
}

impl Reducible for ShellStore {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Shell action: {:?}", action);
        Rc::new(Self(self.0.apply(action)))
    }
}

/// Current window width in CSS pixels, if a window is available.
pub fn current_viewport_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

/// Tracks the window width, starting from `initial` until the first resize.
#[hook]
pub fn use_viewport_width(initial: u32) -> u32 {
    let width = use_state_eq(|| initial);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move || {
                if let Some(current) = current_viewport_width() {
                    log::trace!("Viewport resized to {}px", current);
                    width.set(current);
                }
            }) as Box<dyn Fn()>);

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(err) = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                {
                    log::warn!("Could not listen for resize events: {:?}", err);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    *width
}
