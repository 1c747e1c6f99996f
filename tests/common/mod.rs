#![allow(dead_code)]

use std::cell::Cell;

use churnpredict::record::{
    Contract, Gender, InternetAddOn, InternetService, MultipleLines, PaymentMethod, YesNo,
};
use churnpredict::{
    ChurnModel, ClassDistribution, Classifier, CustomerRecord, FEATURE_COUNT, FeatureVector,
    ModelError, encode,
};
use ndarray::{Array1, Array2};
use proptest::prelude::*;

fn yes_no(b: bool) -> YesNo {
    if b { YesNo::Yes } else { YesNo::No }
}

/// Columns that carry no signal cycle identically in both classes.
fn base(i: usize) -> CustomerRecord {
    CustomerRecord {
        gender: Gender::ALL[i % 2],
        senior_citizen: yes_no(i % 3 == 0),
        partner: yes_no(i % 2 == 1),
        dependents: yes_no((i / 2) % 2 == 0),
        tenure: 0,
        phone_service: yes_no(i % 4 != 0),
        multiple_lines: MultipleLines::ALL[i % 3],
        internet_service: InternetService::Dsl,
        online_security: InternetAddOn::ALL[i % 3],
        online_backup: InternetAddOn::ALL[(i + 1) % 3],
        device_protection: InternetAddOn::ALL[(i + 2) % 3],
        tech_support: InternetAddOn::ALL[i % 3],
        streaming_tv: InternetAddOn::ALL[(i + 1) % 3],
        streaming_movies: InternetAddOn::ALL[(i + 2) % 3],
        contract: Contract::MonthToMonth,
        paperless_billing: yes_no(i % 2 == 0),
        payment_method: PaymentMethod::ElectronicCheck,
        monthly_charges: 0.0,
        total_charges: 0.0,
    }
}

pub fn churner(i: usize) -> CustomerRecord {
    let tenure = 1 + (i % 6) as u32;
    let monthly = 80.0 + (i % 15) as f64;
    CustomerRecord {
        tenure,
        internet_service: InternetService::FiberOptic,
        contract: Contract::MonthToMonth,
        payment_method: if i % 2 == 0 {
            PaymentMethod::ElectronicCheck
        } else {
            PaymentMethod::MailedCheck
        },
        monthly_charges: monthly,
        total_charges: monthly * f64::from(tenure),
        ..base(i)
    }
}

pub fn loyal(i: usize) -> CustomerRecord {
    let tenure = 40 + (i % 30) as u32;
    let monthly = 30.0 + (i % 15) as f64;
    CustomerRecord {
        tenure,
        internet_service: InternetService::Dsl,
        contract: if i % 2 == 0 {
            Contract::OneYear
        } else {
            Contract::TwoYear
        },
        payment_method: if i % 2 == 0 {
            PaymentMethod::BankTransfer
        } else {
            PaymentMethod::CreditCard
        },
        monthly_charges: monthly,
        total_charges: monthly * f64::from(tenure),
        ..base(i)
    }
}

/// A clear churn case: new, month-to-month, fiber, electronic check.
pub fn likely_churner() -> CustomerRecord {
    CustomerRecord {
        tenure: 2,
        monthly_charges: 90.0,
        total_charges: 180.0,
        ..churner(0)
    }
}

/// A clear retention case: long tenure on a two-year contract.
pub fn likely_loyal() -> CustomerRecord {
    CustomerRecord {
        tenure: 60,
        monthly_charges: 40.0,
        total_charges: 2400.0,
        ..loyal(1)
    }
}

pub fn training_set() -> (Array2<f64>, Array1<usize>) {
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for i in 0..60 {
        rows.extend_from_slice(encode(&churner(i)).as_slice());
        labels.push(1);
        rows.extend_from_slice(encode(&loyal(i)).as_slice());
        labels.push(0);
    }
    let x = Array2::from_shape_vec((labels.len(), FEATURE_COUNT), rows).unwrap();
    (x, Array1::from_vec(labels))
}

pub fn fitted_model() -> ChurnModel {
    let (x, y) = training_set();
    ChurnModel::fit(x, y).unwrap()
}

/// Classifier with canned output that counts how often it is consulted.
pub struct Stub {
    pub class: usize,
    pub distribution: ClassDistribution,
    pub calls: Cell<usize>,
}

impl Stub {
    pub fn new(class: usize, classes: Vec<usize>, probabilities: Vec<f64>) -> Self {
        Stub {
            class,
            distribution: ClassDistribution {
                classes,
                probabilities,
            },
            calls: Cell::new(0),
        }
    }
}

impl Classifier for Stub {
    fn predict(&self, _: &FeatureVector) -> Result<usize, ModelError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.class)
    }

    fn predict_proba(&self, _: &FeatureVector) -> Result<ClassDistribution, ModelError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.distribution.clone())
    }
}

/// Any well-formed customer record.
pub fn any_record() -> impl Strategy<Value = CustomerRecord> {
    let categorical = (
        prop::sample::select(Gender::ALL),
        prop::sample::select(YesNo::ALL),
        prop::sample::select(YesNo::ALL),
        prop::sample::select(YesNo::ALL),
        prop::sample::select(YesNo::ALL),
        prop::sample::select(MultipleLines::ALL),
        prop::sample::select(InternetService::ALL),
        prop::collection::vec(prop::sample::select(InternetAddOn::ALL), 6),
        prop::sample::select(Contract::ALL),
        prop::sample::select(YesNo::ALL),
        prop::sample::select(PaymentMethod::ALL),
    );
    let numeric = (0u32..=10_000, 0.0f64..=1_000.0, 0.0f64..=10_000.0);
    (categorical, numeric).prop_map(
        |(
            (
                gender,
                senior,
                partner,
                dependents,
                phone,
                lines,
                internet,
                add_ons,
                contract,
                paperless,
                payment,
            ),
            (tenure, monthly, total),
        )| CustomerRecord {
            gender,
            senior_citizen: senior,
            partner,
            dependents,
            tenure,
            phone_service: phone,
            multiple_lines: lines,
            internet_service: internet,
            online_security: add_ons[0],
            online_backup: add_ons[1],
            device_protection: add_ons[2],
            tech_support: add_ons[3],
            streaming_tv: add_ons[4],
            streaming_movies: add_ons[5],
            contract,
            paperless_billing: paperless,
            payment_method: payment,
            monthly_charges: monthly,
            total_charges: total,
        },
    )
}
