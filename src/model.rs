//! The classifier contract and the persisted churn model.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use linfa::prelude::{Dataset, Fit, Predict};
use linfa_bayes::{GaussianNb, NaiveBayes};
use ndarray::{Array1, Array2};
use rmp_serde::{decode::from_read, encode::write_named};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::encoder::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
use crate::error::ModelError;

/// Probability of every class the model knows, in the model's own class order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDistribution {
    pub classes: Vec<usize>,
    pub probabilities: Vec<f64>,
}

impl ClassDistribution {
    /// Probability assigned to `class`, looked up by class value rather than
    /// by position.
    pub fn probability_of(&self, class: usize) -> Option<f64> {
        self.classes
            .iter()
            .position(|&c| c == class)
            .and_then(|i| self.probabilities.get(i).copied())
    }
}

/// Anything that can classify an encoded customer.
pub trait Classifier {
    /// Predicted class index.
    fn predict(&self, features: &FeatureVector) -> Result<usize, ModelError>;

    /// Distribution over all classes.
    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassDistribution, ModelError>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, features: &FeatureVector) -> Result<usize, ModelError> {
        (**self).predict(features)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassDistribution, ModelError> {
        (**self).predict_proba(features)
    }
}

/// Gaussian Naive Bayes churn classifier together with the column schema it
/// was fitted on.
#[derive(Serialize, Deserialize)]
pub struct ChurnModel {
    model: GaussianNb<f64, usize>,
    columns: Vec<String>,
}

impl ChurnModel {
    /// Fits a model on already-encoded rows (`n × 19`) and class labels.
    pub fn fit(x: Array2<f64>, y: Array1<usize>) -> Result<Self, ModelError> {
        if x.ncols() != FEATURE_COUNT {
            return Err(ModelError::Schema {
                expected: expected_columns(),
                found: (0..x.ncols()).map(|i| format!("column {i}")).collect(),
            });
        }
        let mut classes = y.to_vec();
        classes.sort_unstable();
        classes.dedup();
        check_classes(classes)?;

        let dataset = Dataset::new(x, y);
        let model = GaussianNb::params()
            .fit(&dataset)
            .map_err(|e| ModelError::Training(e.to_string()))?;
        Ok(ChurnModel {
            model,
            columns: expected_columns(),
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Saves the model to a binary `.msgpack` file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ModelError> {
        let file = File::create(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        write_named(&mut writer, self)?;
        writer.flush().map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "model saved");
        Ok(())
    }

    /// Loads the model from a binary `.msgpack` file and checks that its
    /// schema matches the encoder's column order and that it predicts
    /// exactly the classes 0 and 1.
    pub fn load_from_file(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let model: ChurnModel = from_read(reader).map_err(|source| ModelError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        if model.columns != expected_columns() {
            return Err(ModelError::Schema {
                expected: expected_columns(),
                found: model.columns,
            });
        }
        let zeros = FeatureVector::new([0.0; FEATURE_COUNT]);
        let mut classes = model.predict_proba(&zeros)?.classes;
        classes.sort_unstable();
        check_classes(classes)?;

        info!(path = %path.display(), "model loaded");
        Ok(model)
    }
}

/// Both verdicts must be present and nothing else. `classes` is sorted.
fn check_classes(classes: Vec<usize>) -> Result<(), ModelError> {
    if classes != [0, 1] {
        return Err(ModelError::Classes(classes));
    }
    Ok(())
}

fn expected_columns() -> Vec<String> {
    FEATURE_NAMES.iter().map(|c| c.to_string()).collect()
}

impl Classifier for ChurnModel {
    fn predict(&self, features: &FeatureVector) -> Result<usize, ModelError> {
        let input = features.to_row();
        let labels: Array1<usize> = self.model.predict(&input);
        let class = labels.get(0).copied().ok_or(ModelError::EmptyOutput)?;
        debug!(class, "model predicted class");
        Ok(class)
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<ClassDistribution, ModelError> {
        let input = features.to_row();
        let (proba, classes) = self.model.predict_proba(input.view());
        if proba.nrows() == 0 {
            return Err(ModelError::EmptyOutput);
        }
        Ok(ClassDistribution {
            classes: classes.into_iter().copied().collect(),
            probabilities: proba.row(0).to_vec(),
        })
    }
}
