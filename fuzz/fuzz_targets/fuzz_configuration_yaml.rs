#![no_main]

use libfuzzer_sys::fuzz_target;

const MODEL: &str = r#"
components:
  server:
    requires_features: [ JVM ]
    variables:
      memory:
        values: [ 1GB, 2GB ]
      threads:
        type: Integer
        values: { range: [ 1, 4 ], coverage: 1 }
  jdk:
    provides_features: [ JVM ]
"#;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(model) = camp::load_model(MODEL) else {
        return;
    };

    // Whatever loads must save and load again
    if let Ok(configuration) = camp::load_configuration(&model, content) {
        let saved = camp::save_configuration(&configuration).unwrap();
        let restored = camp::load_configuration(&model, &saved).unwrap();
        assert_eq!(configuration.instance_count(), restored.instance_count());
        let _ = configuration.stacks().count();
    }
});
