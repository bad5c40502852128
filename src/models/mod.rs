pub mod card;
pub mod content;
pub mod context;
pub mod status;
pub mod validation;
