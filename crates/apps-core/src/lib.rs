pub mod constants;
pub mod distance;
pub mod error;
pub mod geo;
pub mod heading;
pub mod hunter;
pub mod position;
pub mod prompter;
pub mod scroll;
pub mod subscription;

pub use constants::*;
pub use distance::*;
pub use error::*;
pub use geo::*;
pub use heading::*;
pub use hunter::*;
pub use position::*;
pub use prompter::*;
pub use scroll::*;
pub use subscription::*;
