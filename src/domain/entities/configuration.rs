//! Configuration aggregate - the instances chosen for one deployment
//!
//! Instances live in an arena in insertion order and are addressed by
//! [`InstanceId`]. Provider links are resolved in a second pass
//! ([`Configuration::connect`]) because instances may name each other before
//! all of them exist.

use std::collections::{HashMap, HashSet};

use super::{Instance, InstanceId, Model, ResolveError};

/// A set of instances over a model, one candidate deployment.
#[derive(Debug, Clone)]
pub struct Configuration<'m> {
    model: &'m Model,
    instances: Vec<Instance<'m>>,
    by_name: HashMap<String, InstanceId>,
}

impl<'m> Configuration<'m> {
    /// Build the arena. Instance names must be unique.
    pub fn new(model: &'m Model, instances: Vec<Instance<'m>>) -> Result<Self, ResolveError> {
        let mut by_name = HashMap::with_capacity(instances.len());
        for (index, instance) in instances.iter().enumerate() {
            if by_name
                .insert(instance.name().to_string(), InstanceId(index))
                .is_some()
            {
                return Err(ResolveError::DuplicateInstance {
                    identifier: instance.name().to_string(),
                });
            }
        }
        Ok(Self {
            model,
            instances,
            by_name,
        })
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    /// Instances in insertion order; realization follows this order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance<'m>> {
        self.instances.iter()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance<'m>> {
        self.instances.get(id.0)
    }

    pub fn id_of(&self, identifier: &str) -> Result<InstanceId, ResolveError> {
        self.by_name
            .get(identifier)
            .copied()
            .ok_or_else(|| ResolveError::UnknownInstance {
                identifier: identifier.to_string(),
            })
    }

    /// Exact-name lookup of an instance.
    pub fn resolve(&self, identifier: &str) -> Result<&Instance<'m>, ResolveError> {
        let id = self.id_of(identifier)?;
        Ok(&self.instances[id.0])
    }

    /// Linking pass for one instance: set its providers by name.
    ///
    /// Fails on the first unknown name and leaves the instance untouched.
    pub fn connect<S: AsRef<str>>(
        &mut self,
        instance: &str,
        feature_provider: Option<&str>,
        service_providers: &[S],
    ) -> Result<(), ResolveError> {
        let target = self.id_of(instance)?;
        let feature_provider = feature_provider.map(|name| self.id_of(name)).transpose()?;
        let service_providers = service_providers
            .iter()
            .map(|name| self.id_of(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let instance = &mut self.instances[target.0];
        instance.set_feature_provider(feature_provider);
        instance.set_service_providers(service_providers);
        tracing::trace!(
            instance = instance.name(),
            feature_provider = ?feature_provider,
            "instance linked"
        );
        Ok(())
    }

    pub fn feature_provider_of(&self, instance: &Instance<'m>) -> Option<&Instance<'m>> {
        instance.feature_provider().and_then(|id| self.get(id))
    }

    pub fn service_providers_of(&self, instance: &Instance<'m>) -> Vec<&Instance<'m>> {
        instance
            .service_providers()
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Chains of instances linked by `feature_provider`, one per top instance.
    ///
    /// A top instance is nobody's feature provider. An instance providing
    /// features to several others shows up in several stacks.
    pub fn stacks(&self) -> Stacks<'_, 'm> {
        let referenced: HashSet<InstanceId> = self
            .instances
            .iter()
            .filter_map(Instance::feature_provider)
            .collect();
        let tops = (0..self.instances.len())
            .map(InstanceId)
            .filter(|id| !referenced.contains(id))
            .collect::<Vec<_>>()
            .into_iter();
        Stacks {
            configuration: self,
            tops,
        }
    }
}

/// Lazy iterator over the stacks of a configuration.
pub struct Stacks<'c, 'm> {
    configuration: &'c Configuration<'m>,
    tops: std::vec::IntoIter<InstanceId>,
}

impl<'c, 'm> Iterator for Stacks<'c, 'm> {
    type Item = Vec<&'c Instance<'m>>;

    fn next(&mut self) -> Option<Self::Item> {
        let top = self.tops.next()?;
        let mut seen = HashSet::new();
        let mut stack = Vec::new();
        let mut current = Some(top);
        // A provider cycle is cut at its first repeated instance.
        while let Some(id) = current {
            if !seen.insert(id) {
                break;
            }
            let Some(instance) = self.configuration.get(id) else {
                break;
            };
            stack.push(instance);
            current = instance.feature_provider();
        }
        Some(stack)
    }
}
