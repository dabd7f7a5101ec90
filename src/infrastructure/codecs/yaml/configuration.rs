//! Configuration documents: first-error loading and saving
//!
//! Loading happens in two passes. The first creates every instance against its
//! component definition; the second links providers by name once the whole
//! arena exists. Either pass stops at the first problem.

use std::path::Path;

use serde_yaml_ng::{Mapping, Value as YamlValue};

use crate::domain::entities::{Configuration, Instance, Model, ResolveError};
use crate::domain::value_objects::Value;
use crate::error::{CampError, CampResult};

use super::Keys;

/// Provider names of one instance, kept for the linking pass
struct Links {
    instance: String,
    feature_provider: Option<String>,
    service_providers: Vec<String>,
}

/// Load a configuration of `model` from YAML text.
pub fn load_configuration<'m>(model: &'m Model, text: &str) -> CampResult<Configuration<'m>> {
    let document: YamlValue = serde_yaml_ng::from_str(text)?;
    let entries = document
        .get(Keys::INSTANCES)
        .and_then(YamlValue::as_mapping)
        .ok_or_else(|| malformed(Keys::INSTANCES.to_string(), "mapping"))?;

    let mut instances = Vec::with_capacity(entries.len());
    let mut links = Vec::with_capacity(entries.len());
    for (name, entry) in entries {
        let name = name
            .as_str()
            .ok_or_else(|| malformed(Keys::INSTANCES.to_string(), "instance names as strings"))?;
        let path = format!("{}.{}", Keys::INSTANCES, name);
        let entry = entry
            .as_mapping()
            .ok_or_else(|| malformed(path.clone(), "mapping"))?;

        instances.push(create_instance(model, name, entry, &path)?);
        links.push(read_links(name, entry, &path)?);
    }

    let mut configuration = Configuration::new(model, instances)?;
    for link in links {
        configuration.connect(
            &link.instance,
            link.feature_provider.as_deref(),
            link.service_providers.as_slice(),
        )?;
    }

    tracing::debug!(
        instances = configuration.instance_count(),
        "configuration loaded"
    );
    Ok(configuration)
}

/// Load a configuration of `model` from a YAML file
pub fn load_configuration_from_path<'m>(
    model: &'m Model,
    path: &Path,
) -> CampResult<Configuration<'m>> {
    let text = std::fs::read_to_string(path).map_err(|e| CampError::io(path, e))?;
    load_configuration(model, &text)
}

fn create_instance<'m>(
    model: &'m Model,
    name: &str,
    entry: &Mapping,
    path: &str,
) -> CampResult<Instance<'m>> {
    let definition = entry
        .get(Keys::DEFINITION)
        .and_then(YamlValue::as_str)
        .ok_or_else(|| malformed(format!("{}.{}", path, Keys::DEFINITION), "string"))?;
    let component = model.resolve_component(definition)?;

    let mut configuration = Vec::new();
    if let Some(chosen) = entry.get(Keys::CONFIGURATION) {
        let path = format!("{}.{}", path, Keys::CONFIGURATION);
        let chosen = chosen
            .as_mapping()
            .ok_or_else(|| malformed(path.clone(), "mapping"))?;

        for (variable_name, value) in chosen {
            let variable_name = variable_name
                .as_str()
                .ok_or_else(|| malformed(path.clone(), "variable names as strings"))?;
            let variable = component.variable_named(variable_name).ok_or_else(|| {
                ResolveError::UnknownVariable {
                    component: component.name().to_string(),
                    variable: variable_name.to_string(),
                }
            })?;
            let value = scalar(value)
                .ok_or_else(|| malformed(format!("{}.{}", path, variable_name), "scalar"))?;
            configuration.push((variable, value));
        }
    }

    Ok(Instance::new(name, component).with_configuration(configuration))
}

fn read_links(name: &str, entry: &Mapping, path: &str) -> CampResult<Links> {
    let feature_provider = match entry.get(Keys::FEATURE_PROVIDER) {
        None | Some(YamlValue::Null) => None,
        Some(YamlValue::String(provider)) => Some(provider.clone()),
        Some(_) => {
            return Err(malformed(
                format!("{}.{}", path, Keys::FEATURE_PROVIDER),
                "string",
            ))
        }
    };

    let service_providers = match entry.get(Keys::SERVICE_PROVIDERS) {
        None | Some(YamlValue::Null) => Vec::new(),
        Some(YamlValue::Sequence(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                malformed(
                    format!("{}.{}", path, Keys::SERVICE_PROVIDERS),
                    "sequence of strings",
                )
            })?,
        Some(_) => {
            return Err(malformed(
                format!("{}.{}", path, Keys::SERVICE_PROVIDERS),
                "sequence of strings",
            ))
        }
    };

    Ok(Links {
        instance: name.to_string(),
        feature_provider,
        service_providers,
    })
}

fn scalar(value: &YamlValue) -> Option<Value> {
    match value {
        YamlValue::Bool(b) => Some(Value::Boolean(*b)),
        YamlValue::Number(n) => n
            .as_i64()
            .map(Value::Integer)
            .or_else(|| n.as_f64().map(Value::Float)),
        YamlValue::String(s) => Some(Value::Text(s.clone())),
        _ => None,
    }
}

fn malformed(path: String, expected: &str) -> CampError {
    CampError::MalformedConfiguration {
        path,
        expected: expected.to_string(),
    }
}

/// Save a configuration as YAML; the structural inverse of [`load_configuration`].
///
/// Instances appear in arena order. `feature_provider` is written only when set.
pub fn save_configuration(configuration: &Configuration<'_>) -> CampResult<String> {
    let mut instances = Mapping::new();

    for instance in configuration.instances() {
        let mut entry = Mapping::new();
        entry.insert(
            Keys::DEFINITION.into(),
            instance.definition().name().into(),
        );

        if let Some(provider) = configuration.feature_provider_of(instance) {
            entry.insert(Keys::FEATURE_PROVIDER.into(), provider.name().into());
        }

        let providers = configuration
            .service_providers_of(instance)
            .into_iter()
            .map(|provider| YamlValue::from(provider.name()))
            .collect();
        entry.insert(
            Keys::SERVICE_PROVIDERS.into(),
            YamlValue::Sequence(providers),
        );

        let mut chosen = Mapping::new();
        for (variable, value) in instance.configuration() {
            chosen.insert(variable.name().into(), serde_yaml_ng::to_value(value)?);
        }
        entry.insert(Keys::CONFIGURATION.into(), YamlValue::Mapping(chosen));

        instances.insert(instance.name().into(), YamlValue::Mapping(entry));
    }

    let mut document = Mapping::new();
    document.insert(Keys::INSTANCES.into(), YamlValue::Mapping(instances));
    Ok(serde_yaml_ng::to_string(&document)?)
}
