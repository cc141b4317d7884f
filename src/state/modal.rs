#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Project detail modal selection plus the lightbox nested inside it.
///
/// Owned by the projects section. The lightbox's lifetime is subordinate to
/// the modal's: closing the modal always clears the lightbox, while closing
/// the lightbox leaves the modal open. Explicit close, backdrop click, and
/// Escape all funnel through [`ModalState::close`], which is what lets one
/// effect drive the body scroll-lock from `is_open()` alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    selected: Option<u32>,
    lightbox: Option<String>,
}

impl ModalState {
    /// Select a project and open the modal.
    pub fn open(&mut self, project_id: u32) {
        self.selected = Some(project_id);
        self.lightbox = None;
    }

    /// Close the modal, clearing the selection and any open lightbox.
    pub fn close(&mut self) {
        self.selected = None;
        self.lightbox = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected project id, if the modal is open.
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Open the full-screen lightbox on one image. No-op while the modal
    /// itself is closed.
    pub fn open_lightbox(&mut self, src: &str) {
        if self.selected.is_some() {
            self.lightbox = Some(src.to_owned());
        }
    }

    /// Close the lightbox only; the surrounding modal stays open.
    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn lightbox_src(&self) -> Option<String> {
        self.lightbox.clone()
    }
}
