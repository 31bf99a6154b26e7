pub mod factory;
pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn school<'a>(&'a mut self) -> SchoolFixtures<'a> {
        SchoolFixtures { setup: self }
    }
}

pub struct SchoolFixtures<'a> {
    setup: &'a mut TestSetup,
}
