//! Document Codecs
//!
//! Turn model and configuration documents into domain entities and back.

pub mod yaml;

pub use yaml::{
    load_configuration, load_configuration_from_path, load_model, load_model_from_path,
    save_configuration,
};
