//! Background scroll suppression while an overlay is open.

/// Lock or unlock `<body>` scrolling. One effect drives this from the
/// modal's `is_open()` so every exit path releases the lock.
pub fn set(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}
