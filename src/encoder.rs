//! Categorical-to-numeric encoding of a customer record.

use std::ops::Index;

use ndarray::{Array1, Array2};

use crate::record::{CustomerRecord, Field};

/// Width of the feature vector.
pub const FEATURE_COUNT: usize = 19;

/// Training column names, in the order the classifier expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "gender",
    "SeniorCitizen",
    "Partner",
    "Dependents",
    "tenure",
    "PhoneService",
    "MultipleLines",
    "InternetService",
    "OnlineSecurity",
    "OnlineBackup",
    "DeviceProtection",
    "TechSupport",
    "StreamingTV",
    "StreamingMovies",
    "Contract",
    "PaperlessBilling",
    "PaymentMethod",
    "MonthlyCharges",
    "TotalCharges",
];

/// Encoded customer, one value per [`Field`] in vector order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        FeatureVector(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, field: Field) -> f64 {
        self.0[field.index()]
    }

    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_vec(self.0.to_vec())
    }

    /// Single-row matrix, the shape the classifier consumes.
    pub fn to_row(&self) -> Array2<f64> {
        self.to_array().insert_axis(ndarray::Axis(0))
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

/// Encodes a validated record. Pure and total: every record maps to exactly
/// one vector.
pub fn encode(r: &CustomerRecord) -> FeatureVector {
    FeatureVector([
        r.gender.code().into(),
        r.senior_citizen.code().into(),
        r.partner.code().into(),
        r.dependents.code().into(),
        r.tenure.into(),
        r.phone_service.code().into(),
        r.multiple_lines.code().into(),
        r.internet_service.code().into(),
        r.online_security.code().into(),
        r.online_backup.code().into(),
        r.device_protection.code().into(),
        r.tech_support.code().into(),
        r.streaming_tv.code().into(),
        r.streaming_movies.code().into(),
        r.contract.code().into(),
        r.paperless_billing.code().into(),
        r.payment_method.code().into(),
        r.monthly_charges,
        r.total_charges,
    ])
}
