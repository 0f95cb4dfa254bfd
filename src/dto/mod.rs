pub mod action_dto;

pub use action_dto::ActionResult;
