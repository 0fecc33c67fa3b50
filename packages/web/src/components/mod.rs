//! Reusable UI components

mod add_resource_modal;
mod bottom_nav;
mod category_chips;
mod error_boundary;
mod fab;
mod loading;
mod resource_card;
mod resource_grid;
mod shell;

pub use add_resource_modal::*;
pub use bottom_nav::*;
pub use category_chips::*;
pub use error_boundary::*;
pub use fab::*;
pub use loading::*;
pub use resource_card::*;
pub use resource_grid::*;
pub use shell::*;
