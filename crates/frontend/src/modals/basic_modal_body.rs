use super::controller::{ModalBody, ModalController};

/// Generic body used when no controller is registered for a modal name.
#[derive(Default)]
pub struct BasicModalBody {
    body: ModalBody,
}

impl BasicModalBody {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModalController for BasicModalBody {
    fn body(&self) -> &ModalBody {
        &self.body
    }
}
