//! Mutations module - read-modify-write transactions against the stored
//! portfolio document.

mod mutations_service;
mod mutations_traits;


pub use mutations_service::MutationService;
pub use mutations_traits::MutationServiceTrait;
