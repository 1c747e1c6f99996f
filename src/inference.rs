//! Turning a model's raw output into a churn verdict.

use std::fmt;

use tracing::info;

use crate::encoder::FeatureVector;
use crate::error::ModelError;
use crate::model::Classifier;

/// Class index the model uses for each verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChurnLabel {
    NoChurn,
    Churn,
}

impl ChurnLabel {
    pub fn from_class(class: usize) -> Result<Self, ModelError> {
        match class {
            0 => Ok(ChurnLabel::NoChurn),
            1 => Ok(ChurnLabel::Churn),
            other => Err(ModelError::UnknownClass(other)),
        }
    }

    pub fn class(self) -> usize {
        match self {
            ChurnLabel::NoChurn => 0,
            ChurnLabel::Churn => 1,
        }
    }
}

impl fmt::Display for ChurnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChurnLabel::NoChurn => f.write_str("no-churn"),
            ChurnLabel::Churn => f.write_str("churn"),
        }
    }
}

/// Verdict for one customer and the model's confidence in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: ChurnLabel,
    /// Raw class index returned by the model.
    pub class: usize,
    /// Probability of `class`, in `[0, 1]`.
    pub probability: f64,
}

impl Prediction {
    pub fn is_churn(&self) -> bool {
        self.label == ChurnLabel::Churn
    }
}

/// Runs both model operations on the same vector and pairs the predicted class
/// with its own probability entry.
pub fn predict<C: Classifier + ?Sized>(
    model: &C,
    features: &FeatureVector,
) -> Result<Prediction, ModelError> {
    let class = model.predict(features)?;
    let distribution = model.predict_proba(features)?;
    let probability = distribution
        .probability_of(class)
        .ok_or(ModelError::MissingClass(class))?;
    let label = ChurnLabel::from_class(class)?;

    info!(%label, probability, "prediction");
    Ok(Prediction {
        label,
        class,
        probability,
    })
}
