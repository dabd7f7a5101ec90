//! Contracts for name resolution: exact names, first unknown name fails.

use camp::domain::entities::{ResolveError, Resolved};
use camp::{load_configuration, load_model, CampError};

use crate::common::{server_configuration, SERVER_MODEL};

/// CONTRACT: present identifiers return the stored object
#[test]
fn contract_model_resolves_components_services_and_features() {
    let model = load_model(SERVER_MODEL).unwrap();

    match model.resolve("server").unwrap() {
        Resolved::Component(component) => assert_eq!(component.name(), "server"),
        other => panic!("expected a component, got {other:?}"),
    }
    assert!(matches!(model.resolve("Awesome"), Ok(Resolved::Service(s)) if s.name() == "Awesome"));
    assert!(matches!(model.resolve("JVM"), Ok(Resolved::Feature(f)) if f.name() == "JVM"));
}

/// CONTRACT: absent identifiers are not found, close matches included
#[test]
fn contract_model_resolution_is_exact() {
    let model = load_model(SERVER_MODEL).unwrap();

    for name in ["nginx", "Server", "serve", ""] {
        assert_eq!(
            model.resolve(name),
            Err(ResolveError::UnknownIdentifier {
                identifier: name.to_string()
            })
        );
    }
    assert_eq!(
        model.resolve_component("JVM").unwrap_err(),
        ResolveError::NotAComponent {
            identifier: "JVM".to_string()
        }
    );
}

/// CONTRACT: configuration instances resolve by exact name
#[test]
fn contract_configuration_resolves_instances() {
    let model = load_model(SERVER_MODEL).unwrap();
    let configuration = load_configuration(&model, &server_configuration("1GB")).unwrap();

    assert_eq!(configuration.resolve("jdk_0").unwrap().name(), "jdk_0");
    assert!(matches!(
        configuration.resolve("jdk_1"),
        Err(ResolveError::UnknownInstance { .. })
    ));
}

/// CONTRACT: a configuration naming an unknown provider is rejected as a whole
#[test]
fn contract_unknown_provider_rejects_the_configuration() {
    let model = load_model(SERVER_MODEL).unwrap();
    let text = server_configuration("1GB").replace("feature_provider: jdk_0", "feature_provider: jre_0");

    let err = load_configuration(&model, &text).unwrap_err();

    assert!(matches!(
        err,
        CampError::Resolve(ResolveError::UnknownInstance { ref identifier }) if identifier == "jre_0"
    ));
}
