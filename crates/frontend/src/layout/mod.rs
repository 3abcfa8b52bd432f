pub mod modal_service;

pub use modal_service::ModalService;
