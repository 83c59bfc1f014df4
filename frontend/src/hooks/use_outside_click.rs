use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

/// Hook that reports pointer presses landing outside `container`.
///
/// A single capture-phase `mousedown` listener is installed on the document
/// when the component mounts and removed when it unmounts, no matter how
/// often the component re-renders. Presses inside the container, including
/// any dropdown rendered as its descendant, are ignored.
#[hook]
pub fn use_outside_click(container: NodeRef, on_outside: Callback<()>) {
    // The listener lives for the whole mount, so it reads the newest callback
    let latest = use_mut_ref(|| on_outside.clone());
    *latest.borrow_mut() = on_outside;

    use_effect_with((), move |_| {
        let document = web_sys::window().and_then(|window| window.document());
        let listener = document.map(|document| {
            EventListener::new_with_options(
                &document,
                "mousedown",
                EventListenerOptions::run_in_capture_phase(),
                move |event| {
                    let Some(container) = container.cast::<Node>() else {
                        return;
                    };
                    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                    if !container.contains(target.as_ref()) {
                        latest.borrow().emit(());
                    }
                },
            )
        });

        move || drop(listener)
    });
}
