//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Field;

/// Problems with the answers collected by the form.
///
/// These are always recoverable: the user is told what is wrong and no
/// inference is attempted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("please fill in every field before predicting (missing: {})", field_list(.0))]
    Incomplete(Vec<Field>),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("`{value}` is not an option for {field} (expected one of: {})", .field.options().join(", "))]
    UnknownOption { field: Field, value: String },
    #[error("{field} expects a number, got `{value}`")]
    InvalidNumber { field: Field, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("expected `key=value`, got `{0}`")]
    MalformedPair(String),
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures loading, saving or running the classifier.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot open model file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model file {} is not a valid model: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rmp_serde::decode::Error,
    },
    #[error("failed to serialize model: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("model schema mismatch: expected columns {expected:?}, found {found:?}")]
    Schema {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("model classes {0:?} are not exactly no-churn (0) and churn (1)")]
    Classes(Vec<usize>),
    #[error("training failed: {0}")]
    Training(String),
    #[error("classifier returned no prediction")]
    EmptyOutput,
    #[error("predicted class {0} has no probability in the model output")]
    MissingClass(usize),
    #[error("class index {0} is neither churn nor no-churn")]
    UnknownClass(usize),
}

/// Failures reading the dataset preview.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("cannot read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Outcome of a rejected form submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] FormError),
    #[error(transparent)]
    Inference(#[from] ModelError),
}
