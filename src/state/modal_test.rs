use super::*;

// =============================================================
// Open / close
// =============================================================

#[test]
fn starts_closed() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert!(!state.is_lightbox_open());
    assert_eq!(state.selected(), None);
}

#[test]
fn open_selects_project() {
    let mut state = ModalState::default();
    state.open(2);
    assert!(state.is_open());
    assert_eq!(state.selected(), Some(2));
}

#[test]
fn close_clears_selection() {
    let mut state = ModalState::default();
    state.open(1);
    state.close();
    assert!(!state.is_open());
    assert_eq!(state.selected(), None);
}

#[test]
fn every_exit_path_leaves_the_same_closed_state() {
    // Explicit close button, backdrop click, and Escape all call close();
    // from any reachable open state the result must be indistinguishable.
    let mut plain = ModalState::default();
    plain.open(1);
    plain.close();

    let mut with_lightbox = ModalState::default();
    with_lightbox.open(1);
    with_lightbox.open_lightbox("/images/jobs.png");
    with_lightbox.close();

    assert_eq!(plain, ModalState::default());
    assert_eq!(with_lightbox, ModalState::default());
}

// =============================================================
// Lightbox subordination
// =============================================================

#[test]
fn lightbox_opens_only_while_modal_open() {
    let mut state = ModalState::default();
    state.open_lightbox("/images/piano.png");
    assert!(!state.is_lightbox_open());

    state.open(2);
    state.open_lightbox("/images/piano.png");
    assert!(state.is_lightbox_open());
    assert_eq!(state.lightbox_src().as_deref(), Some("/images/piano.png"));
}

#[test]
fn closing_lightbox_keeps_modal_open() {
    let mut state = ModalState::default();
    state.open(3);
    state.open_lightbox("/images/dsa1.png");
    state.close_lightbox();
    assert!(state.is_open());
    assert!(!state.is_lightbox_open());
}

#[test]
fn closing_modal_closes_lightbox() {
    let mut state = ModalState::default();
    state.open(3);
    state.open_lightbox("/images/dsa1.png");
    state.close();
    assert!(!state.is_lightbox_open());
    assert_eq!(state.lightbox_src(), None);
}

#[test]
fn reopening_starts_without_lightbox() {
    let mut state = ModalState::default();
    state.open(1);
    state.open_lightbox("/images/login.png");
    state.open(2);
    assert!(!state.is_lightbox_open());
    assert_eq!(state.selected(), Some(2));
}
