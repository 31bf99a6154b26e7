pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{auth::factory as auth_factory, school::factory},
        TestError, TestSetup,
    };
}
