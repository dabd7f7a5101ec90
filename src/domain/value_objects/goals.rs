//! Goals value object - what a configuration must end up running

use super::{Feature, Service};

/// Target services and features a configuration has to satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goals {
    services: Vec<Service>,
    features: Vec<Feature>,
}

impl Goals {
    pub fn new(services: Vec<Service>, features: Vec<Feature>) -> Self {
        Self { services, features }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}
