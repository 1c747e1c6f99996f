//! # churnpredict 📉
//!
//! Predict whether a telecom customer is about to churn using a pre-trained
//! classifier.
//!
//! The crate collects a customer's answers through a form, encodes the
//! categorical answers into the fixed 19-column feature vector the model was
//! trained on, and asks the model for a churn / no-churn verdict together with
//! the probability of that verdict.
//!
//! ## Features
//! - Exhaustive, per-field categorical encoding (no silent fallthrough)
//! - Form validation: nothing reaches the model until every field is answered
//! - Gaussian Naive Bayes model via [`linfa-bayes`](https://crates.io/crates/linfa-bayes),
//!   persisted with `rmp-serde` (MessagePack) and schema-checked on load
//! - Probability looked up for the predicted class, whatever the model's class order
//! - Interactive terminal dashboard with accuracy, dataset and about pages
//!
//! ## Example
//! ```no_run
//! use std::path::Path;
//! use churnpredict::{ChurnModel, CustomerForm, encode, predict};
//!
//! let model = ChurnModel::load_from_file(Path::new("model.msgpack"))?;
//! let form = CustomerForm::from_pairs([
//!     "gender=Female", "senior_citizen=No", "partner=Yes", "dependents=No",
//!     "tenure=2", "phone_service=Yes", "multiple_lines=No",
//!     "internet_service=Fiber optic", "online_security=No", "online_backup=No",
//!     "device_protection=No", "tech_support=No", "streaming_tv=Yes",
//!     "streaming_movies=Yes", "contract=Month-to-month", "paperless_billing=Yes",
//!     "payment_method=Electronic check", "monthly_charges=95.5",
//!     "total_charges=191.0",
//! ])?;
//! let prediction = predict(&model, &encode(&form.validate()?))?;
//! println!("{} ({:.2})", prediction.label, prediction.probability);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod encoder;
pub mod error;
pub mod inference;
pub mod model;
pub mod record;
pub mod views;

pub use config::Config;
pub use dashboard::{Dashboard, Page};
pub use encoder::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, encode};
pub use error::{DatasetError, FormError, ModelError, SubmitError};
pub use inference::{ChurnLabel, Prediction, predict};
pub use model::{ChurnModel, ClassDistribution, Classifier};
pub use record::{CustomerForm, CustomerRecord, Field};
