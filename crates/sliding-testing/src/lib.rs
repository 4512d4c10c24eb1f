//! Testing utilities and gesture robot for Sliding

pub mod clock;
pub mod robot;

pub use clock::*;
pub use robot::*;

pub mod prelude {
    pub use crate::clock::*;
    pub use crate::robot::*;
}
