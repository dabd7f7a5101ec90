//! Property tests for saving and re-loading configurations.

use proptest::prelude::*;

use camp::{load_configuration, load_model, save_configuration, Configuration};

const MODEL: &str = r#"
components:
  server:
    requires_features: [ JVM ]
    requires_services: [ Storage ]
    variables:
      memory:
        values: [ 1GB, 2GB, 4GB ]
      threads:
        type: Integer
        values: { range: [ 1, 8 ], coverage: 1 }
  jdk:
    provides_features: [ JVM ]
  db:
    provides_services: [ Storage ]
"#;

const MEMORY: [&str; 3] = ["1GB", "2GB", "4GB"];

/// One server: chosen memory, thread count, jdk index and db indices
type ServerSpec = (usize, i64, usize, Vec<usize>);

fn servers() -> impl Strategy<Value = Vec<ServerSpec>> {
    proptest::collection::vec(
        (
            0..MEMORY.len(),
            1i64..=8,
            0usize..3,
            proptest::collection::vec(0usize..2, 0..=2),
        ),
        1..=4,
    )
}

fn document(servers: &[ServerSpec]) -> String {
    let mut text = String::from("instances:\n");
    for (index, (memory, threads, jdk, dbs)) in servers.iter().enumerate() {
        let providers: Vec<String> = dbs.iter().map(|db| format!("db_{}", db)).collect();
        text.push_str(&format!(
            "  server_{index}:\n    definition: server\n    feature_provider: jdk_{jdk}\n    service_providers: [ {} ]\n    configuration:\n      memory: {}\n      threads: {threads}\n",
            providers.join(", "),
            MEMORY[*memory],
        ));
    }
    for jdk in 0..3 {
        text.push_str(&format!("  jdk_{jdk}:\n    definition: jdk\n"));
    }
    for db in 0..2 {
        text.push_str(&format!("  db_{db}:\n    definition: db\n"));
    }
    text
}

/// Everything a configuration says, by name
fn summary(configuration: &Configuration<'_>) -> Vec<(String, String, Option<String>, Vec<String>, Vec<String>)> {
    configuration
        .instances()
        .map(|instance| {
            (
                instance.name().to_string(),
                instance.definition().name().to_string(),
                configuration
                    .feature_provider_of(instance)
                    .map(|provider| provider.name().to_string()),
                configuration
                    .service_providers_of(instance)
                    .iter()
                    .map(|provider| provider.name().to_string())
                    .collect(),
                instance
                    .configuration()
                    .iter()
                    .map(|(variable, value)| format!("{}={}", variable.name(), value))
                    .collect(),
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: load(save(c)) keeps names, definitions, providers and values.
    #[test]
    fn property_configuration_round_trips(servers in servers()) {
        let model = load_model(MODEL).unwrap();
        let original = load_configuration(&model, &document(&servers)).unwrap();

        let saved = save_configuration(&original).unwrap();
        let restored = load_configuration(&model, &saved).unwrap();

        prop_assert_eq!(summary(&original), summary(&restored));
    }

    /// PROPERTY: saving is stable once a configuration went through it.
    #[test]
    fn property_save_is_idempotent(servers in servers()) {
        let model = load_model(MODEL).unwrap();
        let original = load_configuration(&model, &document(&servers)).unwrap();

        let once = save_configuration(&original).unwrap();
        let twice = save_configuration(&load_configuration(&model, &once).unwrap()).unwrap();

        prop_assert_eq!(once, twice);
    }
}
