//! Scenario: the template tree does not match the model
//!
//! Success Criteria:
//! - `check_templates` names every missing file before anything is built
//! - a build stops at the first missing target and says which one

use camp::application::RealizeError;
use camp::infrastructure::LocalFs;
use camp::{check_templates, load_configuration, load_model, RealizeUseCase};

use crate::common::*;

fn template_without(missing: &str) -> TestEnv {
    SERVER_TEMPLATE
        .iter()
        .filter(|(path, _)| *path != missing)
        .fold(TestEnv::builder(), |builder, (path, content)| {
            builder.with_template_file(path, content)
        })
        .build()
}

/// SCENARIO: the check lists what the build would trip on
#[test]
fn scenario_check_reports_missing_targets() {
    let env = template_without("server/server.cfg");
    let model = load_model(SERVER_MODEL).unwrap();

    let result = check_templates(&LocalFs::new(), &model, env.root());

    assert!(!result.is_success());
    let references: Vec<&str> = result
        .missing
        .iter()
        .map(|missing| missing.reference.as_str())
        .collect();
    assert_eq!(references, vec!["server/server.cfg"]);
}

/// SCENARIO: a missing component target fails the build
#[test]
fn scenario_missing_target_fails_the_build() {
    let env = template_without("server/server.cfg");
    let model = load_model(SERVER_MODEL).unwrap();
    let configuration = load_configuration(&model, &server_configuration("2GB")).unwrap();

    let err = RealizeUseCase::new(LocalFs::new())
        .build(&configuration, env.root(), &env.destination(1))
        .unwrap_err();

    match err {
        RealizeError::TargetNotFound {
            instance, target, ..
        } => {
            assert_eq!(instance, "server_0");
            assert_eq!(target, "server/server.cfg");
        }
        other => panic!("expected TargetNotFound, got {other:?}"),
    }
}

/// SCENARIO: no template directory at all
#[test]
fn scenario_missing_template_directory() {
    let env = TestEnv::builder().build();
    let model = load_model(SERVER_MODEL).unwrap();
    let configuration = load_configuration(&model, &server_configuration("1GB")).unwrap();

    let err = RealizeUseCase::new(LocalFs::new())
        .build(&configuration, env.root(), &env.destination(1))
        .unwrap_err();

    assert!(matches!(err, RealizeError::TemplateNotFound { .. }));
    assert!(!env.destination(1).exists());
}
