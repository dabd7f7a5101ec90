//! Contracts for model documents: nothing half-loaded, every problem named.

use camp::{load_model, CampError, LoadWarning};

use crate::common::SERVER_MODEL;

/// CONTRACT: a model with one unknown key is rejected with exactly one warning
#[test]
fn contract_single_unknown_key_single_warning() {
    let text = format!("{}\nextra: 1\n", SERVER_MODEL);

    let err = load_model(&text).unwrap_err();

    assert_eq!(err.warnings().len(), 1);
    assert!(err.warnings()[0].is_ignored());
    assert!(load_model(SERVER_MODEL).is_ok());
}

/// CONTRACT: the rejection lists every problem with its dotted path
#[test]
fn contract_invalid_model_lists_every_problem() {
    let err = load_model(
        r#"
components:
  server:
    requires_features: JVM
    variables:
      memory:
        values: { range: [ 1 ], coverage: 2 }
goals:
  running: [ Awesome ]
  stopped: [ Legacy ]
"#,
    )
    .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @r"
    invalid model: 3 problem(s) found
      - Wrong type at 'components.server.requires_features'! Expected 'sequence' but found 'string'.
      - Wrong type at 'components.server.variables.memory.values.range'! Expected 'sequence of two integers' but found 'sequence'.
      - Entry 'goals.stopped' ignored!
    ");
}

/// CONTRACT: problems of different kinds keep their kind
#[test]
fn contract_warning_kinds_are_preserved() {
    let err = load_model(
        r#"
components:
  server:
    implementation:
      docker: {}
"#,
    )
    .unwrap_err();

    assert!(matches!(err, CampError::InvalidModel { .. }));
    match &err.warnings()[0] {
        LoadWarning::Missing { candidates, path } => {
            assert_eq!(candidates, &["file", "image"]);
            assert_eq!(path.to_string(), "components.server.implementation.docker");
        }
        other => panic!("expected Missing, got {other:?}"),
    }
}

/// CONTRACT: an empty document is an empty model, not an error
#[test]
fn contract_empty_document_is_an_empty_model() {
    let model = load_model("").unwrap();
    assert_eq!(model.components().count(), 0);
}
