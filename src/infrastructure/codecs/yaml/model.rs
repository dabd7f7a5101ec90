//! Model documents: aggregate-report loading
//!
//! The parser walks the untyped YAML tree, builds whatever it can and records a
//! warning for everything it cannot. Nothing is returned unless the whole
//! document came through without a single warning.

use std::collections::HashSet;
use std::path::Path;

use serde_yaml_ng::{Mapping, Value as YamlValue};

use crate::domain::entities::{Component, Model, Variable};
use crate::domain::services::{cover, CoverageError};
use crate::domain::value_objects::{
    EntryPath, Feature, Goals, Implementation, LoadWarning, Service, Substitution, Value,
};
use crate::error::{CampError, CampResult};

use super::{escape, type_name, Keys};

const MAPPING: &str = "mapping";
const SEQUENCE: &str = "sequence";
const STRING: &str = "string";
const INTEGER: &str = "integer";
const SCALAR: &str = "scalar";

/// Load a model from YAML text.
///
/// Fails with [`CampError::InvalidModel`] carrying every warning if the
/// document has any structural problem.
pub fn load_model(text: &str) -> CampResult<Model> {
    let document: YamlValue = serde_yaml_ng::from_str(text)?;
    let mut parser = ModelParser::default();
    let model = parser.parse(&document);

    if !parser.warnings.is_empty() {
        tracing::debug!(count = parser.warnings.len(), "model rejected");
        return Err(CampError::InvalidModel {
            warnings: parser.warnings,
        });
    }

    tracing::debug!(
        components = model.components().count(),
        constraints = model.constraints().len(),
        "model loaded"
    );
    Ok(model)
}

/// Load a model from a YAML file
pub fn load_model_from_path(path: &Path) -> CampResult<Model> {
    let text = std::fs::read_to_string(path).map_err(|e| CampError::io(path, e))?;
    load_model(&text)
}

/// Call-scoped warning collector
#[derive(Default)]
struct ModelParser {
    warnings: Vec<LoadWarning>,
}

impl ModelParser {
    fn parse(&mut self, document: &YamlValue) -> Model {
        let root = EntryPath::root();
        let mut components = Vec::new();
        let mut goals = Goals::default();
        let mut constraints = Vec::new();

        // An empty file is an empty model
        if document.is_null() {
            return Model::default();
        }

        let Some(mapping) = self.mapping(document, &root) else {
            return Model::default();
        };

        for (key, item) in mapping {
            let Some(path) = self.key_path(&root, key) else {
                continue;
            };
            match path_key(&path) {
                Keys::COMPONENTS => components = self.components(item, &path),
                Keys::GOALS => {
                    if let Some(parsed) = self.goals(item, &path) {
                        goals = parsed;
                    }
                }
                Keys::CONSTRAINTS => constraints = self.strings(item, &path),
                _ => self.ignore(path),
            }
        }

        Model::new(components, goals).with_constraints(constraints)
    }

    fn components(&mut self, data: &YamlValue, path: &EntryPath) -> Vec<Component> {
        let Some(mapping) = self.mapping(data, path) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        mapping
            .iter()
            .filter_map(|(name, item)| {
                let path = self.key_path(path, name)?;
                let name = path_key(&path).to_string();
                // `42` and `"_42"` escape to the same name; the first one stays.
                if !seen.insert(name.clone()) {
                    self.ignore(path);
                    return None;
                }
                self.component(name, item, &path)
            })
            .collect()
    }

    fn component(&mut self, name: String, data: &YamlValue, path: &EntryPath) -> Option<Component> {
        let mapping = self.mapping(data, path)?;
        let mut component = Component::new(name);

        for (key, item) in mapping {
            let Some(path) = self.key_path(path, key) else {
                continue;
            };
            component = match path_key(&path) {
                Keys::PROVIDES_SERVICES => {
                    let names = self.names(item, &path);
                    component.with_provided_services(names.into_iter().map(Service::new).collect())
                }
                Keys::REQUIRES_SERVICES => {
                    let names = self.names(item, &path);
                    component.with_required_services(names.into_iter().map(Service::new).collect())
                }
                Keys::PROVIDES_FEATURES => {
                    let names = self.names(item, &path);
                    component.with_provided_features(names.into_iter().map(Feature::new).collect())
                }
                Keys::REQUIRES_FEATURES => {
                    let names = self.names(item, &path);
                    component.with_required_features(names.into_iter().map(Feature::new).collect())
                }
                Keys::VARIABLES => {
                    let variables = self.variables(item, &path);
                    component.with_variables(variables)
                }
                Keys::IMPLEMENTATION => match self.implementation(item, &path) {
                    Some(implementation) => component.with_implementation(implementation),
                    None => component,
                },
                _ => {
                    self.ignore(path);
                    component
                }
            };
        }

        Some(component)
    }

    fn variables(&mut self, data: &YamlValue, path: &EntryPath) -> Vec<Variable> {
        let Some(mapping) = self.mapping(data, path) else {
            return Vec::new();
        };

        mapping
            .iter()
            .filter_map(|(name, item)| {
                let path = self.key_path(path, name)?;
                let name = path_key(&path).to_string();
                self.variable(name, item, &path)
            })
            .collect()
    }

    fn variable(&mut self, name: String, data: &YamlValue, path: &EntryPath) -> Option<Variable> {
        let mapping = self.mapping(data, path)?;
        let mut variable = Variable::new(name);

        for (key, item) in mapping {
            let Some(path) = self.key_path(path, key) else {
                continue;
            };
            variable = match path_key(&path) {
                Keys::VALUES => {
                    let domain = self.values(item, &path);
                    variable.with_domain(domain)
                }
                Keys::TYPE => match self.string(item, &path) {
                    Some(value_type) => variable.with_type(value_type),
                    None => variable,
                },
                Keys::REALIZATION => {
                    let realization = self.realization(item, &path);
                    variable.with_realization(realization)
                }
                _ => {
                    self.ignore(path);
                    variable
                }
            };
        }

        Some(variable)
    }

    /// An explicit list of scalars, or a `range`/`coverage` mapping
    fn values(&mut self, data: &YamlValue, path: &EntryPath) -> Vec<Value> {
        match data {
            YamlValue::Sequence(items) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| self.scalar(item, &path.child(format!("#{}", index + 1))))
                .collect(),
            YamlValue::Mapping(mapping) => self.range(mapping, path),
            other => {
                self.wrong_type(SEQUENCE, other, path.clone());
                Vec::new()
            }
        }
    }

    fn range(&mut self, mapping: &Mapping, path: &EntryPath) -> Vec<Value> {
        let mut bounds = None;
        let mut coverage = None;
        let mut malformed = false;

        for (key, item) in mapping {
            let Some(path) = self.key_path(path, key) else {
                continue;
            };
            match path_key(&path) {
                Keys::RANGE => match self.bounds(item, &path) {
                    Some(pair) => bounds = Some(pair),
                    None => malformed = true,
                },
                Keys::COVERAGE => match item.as_i64() {
                    Some(c) => coverage = Some(c),
                    None => {
                        malformed = true;
                        self.wrong_type(INTEGER, item, path);
                    }
                },
                _ => self.ignore(path),
            }
        }

        // A present but mistyped entry is reported once, as a wrong type.
        if malformed {
            return Vec::new();
        }
        let Some((minimum, maximum)) = bounds else {
            self.missing(&[Keys::RANGE], path.clone());
            return Vec::new();
        };
        let Some(coverage) = coverage.filter(|c| *c > 0) else {
            self.missing(&[Keys::COVERAGE], path.clone());
            return Vec::new();
        };

        match cover(minimum, maximum, coverage) {
            Ok(points) => points.into_iter().map(Value::Integer).collect(),
            Err(CoverageError::InvalidCoverage { .. }) => {
                self.missing(&[Keys::COVERAGE], path.clone());
                Vec::new()
            }
            Err(err) => {
                tracing::debug!(path = %path, error = %err, "range not coverable");
                self.ignore(path.child(Keys::RANGE));
                Vec::new()
            }
        }
    }

    /// Smallest and largest of a two-integer sequence
    fn bounds(&mut self, data: &YamlValue, path: &EntryPath) -> Option<(i64, i64)> {
        let pair = match data {
            YamlValue::Sequence(items) if items.len() == 2 => {
                items[0].as_i64().zip(items[1].as_i64())
            }
            _ => None,
        };
        match pair {
            Some((a, b)) => Some((a.min(b), a.max(b))),
            None => {
                self.wrong_type("sequence of two integers", data, path.clone());
                None
            }
        }
    }

    fn realization(&mut self, data: &YamlValue, path: &EntryPath) -> Vec<Substitution> {
        let Some(items) = self.sequence(data, path) else {
            return Vec::new();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let path = path.child(format!("#{}", index + 1));
                self.substitution(item, &path)
            })
            .collect()
    }

    fn substitution(&mut self, data: &YamlValue, path: &EntryPath) -> Option<Substitution> {
        let mapping = self.mapping(data, path)?;
        let mut targets = Vec::new();
        let mut pattern = None;
        let mut replacements = Vec::new();

        for (key, item) in mapping {
            let Some(path) = self.key_path(path, key) else {
                continue;
            };
            match path_key(&path) {
                Keys::TARGETS => targets = self.strings(item, &path),
                Keys::PATTERN => pattern = self.string(item, &path),
                Keys::REPLACEMENTS => replacements = self.strings(item, &path),
                _ => self.ignore(path),
            }
        }

        if targets.is_empty() {
            self.missing(&[Keys::TARGETS], path.clone());
        }
        if pattern.is_none() {
            self.missing(&[Keys::PATTERN], path.clone());
        }
        if replacements.is_empty() {
            self.missing(&[Keys::REPLACEMENTS], path.clone());
        }

        Substitution::new(targets, pattern?, replacements).ok()
    }

    fn implementation(&mut self, data: &YamlValue, path: &EntryPath) -> Option<Implementation> {
        let mapping = self.mapping(data, path)?;
        let mut implementation = None;

        for (key, item) in mapping {
            let Some(path) = self.key_path(path, key) else {
                continue;
            };
            match path_key(&path) {
                Keys::DOCKER => implementation = self.docker(item, &path),
                _ => self.ignore(path),
            }
        }

        implementation
    }

    fn docker(&mut self, data: &YamlValue, path: &EntryPath) -> Option<Implementation> {
        let mapping = self.mapping(data, path)?;
        let mut docker = None;

        for (key, item) in mapping {
            let Some(path) = self.key_path(path, key) else {
                continue;
            };
            let key = path_key(&path);
            let is_variant = key == Keys::FILE || key == Keys::IMAGE;
            if !is_variant || docker.is_some() {
                self.ignore(path);
                continue;
            }
            let Some(reference) = self.name(item, &path) else {
                continue;
            };
            docker = Some(if key == Keys::FILE {
                Implementation::DockerFile(reference)
            } else {
                Implementation::DockerImage(reference)
            });
        }

        if docker.is_none() {
            self.missing(&[Keys::FILE, Keys::IMAGE], path.clone());
        }
        docker
    }

    fn goals(&mut self, data: &YamlValue, path: &EntryPath) -> Option<Goals> {
        let mapping = self.mapping(data, path)?;
        let mut running = Vec::new();

        for (key, item) in mapping {
            let Some(path) = self.key_path(path, key) else {
                continue;
            };
            match path_key(&path) {
                Keys::RUNNING => {
                    running = self
                        .names(item, &path)
                        .into_iter()
                        .map(Service::new)
                        .collect()
                }
                _ => self.ignore(path),
            }
        }

        Some(Goals::new(running, Vec::new()))
    }

    // -- shape checks ----------------------------------------------------

    fn mapping<'a>(&mut self, data: &'a YamlValue, path: &EntryPath) -> Option<&'a Mapping> {
        match data {
            YamlValue::Mapping(mapping) => Some(mapping),
            other => {
                self.wrong_type(MAPPING, other, path.clone());
                None
            }
        }
    }

    fn sequence<'a>(&mut self, data: &'a YamlValue, path: &EntryPath) -> Option<&'a [YamlValue]> {
        match data {
            YamlValue::Sequence(items) => Some(items),
            other => {
                self.wrong_type(SEQUENCE, other, path.clone());
                None
            }
        }
    }

    fn string(&mut self, data: &YamlValue, path: &EntryPath) -> Option<String> {
        match data {
            YamlValue::String(s) => Some(s.clone()),
            other => {
                self.wrong_type(STRING, other, path.clone());
                None
            }
        }
    }

    /// A sequence of strings; each non-string item is reported on its own
    fn strings(&mut self, data: &YamlValue, path: &EntryPath) -> Vec<String> {
        let Some(items) = self.sequence(data, path) else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.string(item, &path.child(format!("#{}", index + 1))))
            .collect()
    }

    /// An identifier, escaped when it is not a string
    fn name(&mut self, data: &YamlValue, path: &EntryPath) -> Option<String> {
        let name = escape(data);
        if name.is_none() {
            self.wrong_type(STRING, data, path.clone());
        }
        name
    }

    fn names(&mut self, data: &YamlValue, path: &EntryPath) -> Vec<String> {
        let Some(items) = self.sequence(data, path) else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.name(item, &path.child(format!("#{}", index + 1))))
            .collect()
    }

    fn scalar(&mut self, data: &YamlValue, path: &EntryPath) -> Option<Value> {
        let value = match data {
            YamlValue::Bool(b) => Some(Value::Boolean(*b)),
            YamlValue::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .or_else(|| n.as_f64().map(Value::Float)),
            YamlValue::String(s) => Some(Value::Text(s.clone())),
            _ => None,
        };
        if value.is_none() {
            self.wrong_type(SCALAR, data, path.clone());
        }
        value
    }

    /// Path of a mapping entry; keys are escaped like names
    fn key_path(&mut self, parent: &EntryPath, key: &YamlValue) -> Option<EntryPath> {
        match escape(key) {
            Some(key) => Some(parent.child(key)),
            None => {
                self.wrong_type(STRING, key, parent.clone());
                None
            }
        }
    }

    // -- warnings --------------------------------------------------------

    fn ignore(&mut self, path: EntryPath) {
        tracing::trace!(path = %path, "entry ignored");
        self.warnings.push(LoadWarning::Ignored { path });
    }

    fn wrong_type(&mut self, expected: &str, found: &YamlValue, path: EntryPath) {
        self.warnings.push(LoadWarning::WrongType {
            expected: expected.to_string(),
            found: type_name(found).to_string(),
            path,
        });
    }

    fn missing(&mut self, candidates: &[&str], path: EntryPath) {
        self.warnings.push(LoadWarning::Missing {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            path,
        });
    }
}

fn path_key(path: &EntryPath) -> &str {
    path.segments().last().map(String::as_str).unwrap_or_default()
}
