// Records
pub mod product;

pub mod handlers;
pub mod state;
