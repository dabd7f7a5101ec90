//! Contracts for provider stacks.

use camp::{load_configuration, load_model};

const LAYERS: &str = r#"
components:
  app:
    requires_features: [ Runtime ]
  tool:
    requires_features: [ Runtime ]
  runtime:
    provides_features: [ Runtime ]
"#;

fn stack_names(configuration_text: &str) -> Vec<Vec<String>> {
    let model = load_model(LAYERS).unwrap();
    let configuration = load_configuration(&model, configuration_text).unwrap();
    configuration
        .stacks()
        .map(|stack| stack.iter().map(|i| i.name().to_string()).collect())
        .collect()
}

/// CONTRACT: a shared provider shows up in every stack above it
#[test]
fn contract_shared_provider_in_every_stack() {
    let stacks = stack_names(
        r#"
instances:
  a:
    definition: app
    feature_provider: b
  b:
    definition: runtime
  c:
    definition: tool
    feature_provider: b
"#,
    );

    assert_eq!(stacks, vec![vec!["a", "b"], vec!["c", "b"]]);
}

/// CONTRACT: an instance nobody builds on is a stack of its own
#[test]
fn contract_lone_instance_is_its_own_stack() {
    let stacks = stack_names("instances:\n  r:\n    definition: runtime\n");

    assert_eq!(stacks, vec![vec!["r"]]);
}

/// CONTRACT: a provider cycle yields no stack, since nobody is on top
#[test]
fn contract_provider_cycle_has_no_top() {
    let stacks = stack_names(
        r#"
instances:
  a:
    definition: app
    feature_provider: b
  b:
    definition: runtime
    feature_provider: a
"#,
    );

    assert!(stacks.is_empty());
}
