mod coordinates;
mod draft;
mod service;
mod shortcut;
mod suggestion;

pub use coordinates::{is_valid_coordinates, Coordinates, Degrees};
pub use draft::{Draft, Field, FieldQuery};
pub use service::{CabService, ServiceSelection};
pub use shortcut::Shortcut;
pub use suggestion::Suggestion;
