//! Customer answers: categorical domains, the form, and the validated record.
//!
//! Every categorical field family is an enum whose variants carry both the
//! label shown on the form and the numeric code the classifier was trained on.
//! Parsing a label is exact and per-family, so `"No internet service"` is a
//! valid [`InternetAddOn`] but never a valid [`MultipleLines`].

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Text of the placeholder option that every form field starts on.
pub const UNSELECTED: &str = "Select...";

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal = $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants, in the order the form lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Labels of [`Self::ALL`], in the same order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Numeric code fed to the classifier.
            pub fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

categorical!(
    Gender {
        Male => "Male" = 1,
        Female => "Female" = 0,
    }
);

categorical!(
    /// Shared by senior citizen, partner, dependents, phone service and
    /// paperless billing.
    YesNo {
        Yes => "Yes" = 1,
        No => "No" = 0,
    }
);

categorical!(
    MultipleLines {
        Yes => "Yes" = 1,
        No => "No" = 0,
        NoPhoneService => "No phone service" = 2,
    }
);

categorical!(
    InternetService {
        Dsl => "DSL" = 1,
        FiberOptic => "Fiber optic" = 2,
        No => "No" = 0,
    }
);

categorical!(
    /// Internet add-ons: online security, online backup, device protection,
    /// tech support, streaming TV and streaming movies.
    InternetAddOn {
        Yes => "Yes" = 1,
        No => "No" = 0,
        NoInternetService => "No internet service" = 2,
    }
);

categorical!(
    Contract {
        MonthToMonth => "Month-to-month" = 0,
        OneYear => "One year" = 1,
        TwoYear => "Two year" = 2,
    }
);

categorical!(
    PaymentMethod {
        ElectronicCheck => "Electronic check" = 0,
        MailedCheck => "Mailed check" = 1,
        BankTransfer => "Bank transfer (automatic)" = 2,
        CreditCard => "Credit card (automatic)" = 3,
    }
);

/// The 19 form fields, declared in feature-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Gender,
    SeniorCitizen,
    Partner,
    Dependents,
    Tenure,
    PhoneService,
    MultipleLines,
    InternetService,
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
    Contract,
    PaperlessBilling,
    PaymentMethod,
    MonthlyCharges,
    TotalCharges,
}

impl Field {
    pub const ALL: [Field; 19] = [
        Field::Gender,
        Field::SeniorCitizen,
        Field::Partner,
        Field::Dependents,
        Field::Tenure,
        Field::PhoneService,
        Field::MultipleLines,
        Field::InternetService,
        Field::OnlineSecurity,
        Field::OnlineBackup,
        Field::DeviceProtection,
        Field::TechSupport,
        Field::StreamingTv,
        Field::StreamingMovies,
        Field::Contract,
        Field::PaperlessBilling,
        Field::PaymentMethod,
        Field::MonthlyCharges,
        Field::TotalCharges,
    ];

    /// Position of this field in the feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label used on the form.
    pub fn label(self) -> &'static str {
        match self {
            Field::Gender => "Gender",
            Field::SeniorCitizen => "Senior Citizen",
            Field::Partner => "Partner",
            Field::Dependents => "Dependents",
            Field::Tenure => "Tenure",
            Field::PhoneService => "Phone Service",
            Field::MultipleLines => "Multiple Lines",
            Field::InternetService => "Internet Service",
            Field::OnlineSecurity => "Online Security",
            Field::OnlineBackup => "Online Backup",
            Field::DeviceProtection => "Device Protection",
            Field::TechSupport => "Tech Support",
            Field::StreamingTv => "Streaming TV",
            Field::StreamingMovies => "Streaming Movies",
            Field::Contract => "Contract",
            Field::PaperlessBilling => "Paperless Billing",
            Field::PaymentMethod => "Payment Method",
            Field::MonthlyCharges => "Monthly Charges",
            Field::TotalCharges => "Total Charges",
        }
    }

    /// Key accepted on the command line (`senior_citizen=Yes`).
    pub fn key(self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::SeniorCitizen => "senior_citizen",
            Field::Partner => "partner",
            Field::Dependents => "dependents",
            Field::Tenure => "tenure",
            Field::PhoneService => "phone_service",
            Field::MultipleLines => "multiple_lines",
            Field::InternetService => "internet_service",
            Field::OnlineSecurity => "online_security",
            Field::OnlineBackup => "online_backup",
            Field::DeviceProtection => "device_protection",
            Field::TechSupport => "tech_support",
            Field::StreamingTv => "streaming_tv",
            Field::StreamingMovies => "streaming_movies",
            Field::Contract => "contract",
            Field::PaperlessBilling => "paperless_billing",
            Field::PaymentMethod => "payment_method",
            Field::MonthlyCharges => "monthly_charges",
            Field::TotalCharges => "total_charges",
        }
    }

    /// Column name in the training data.
    pub fn column(self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::SeniorCitizen => "SeniorCitizen",
            Field::Partner => "Partner",
            Field::Dependents => "Dependents",
            Field::Tenure => "tenure",
            Field::PhoneService => "PhoneService",
            Field::MultipleLines => "MultipleLines",
            Field::InternetService => "InternetService",
            Field::OnlineSecurity => "OnlineSecurity",
            Field::OnlineBackup => "OnlineBackup",
            Field::DeviceProtection => "DeviceProtection",
            Field::TechSupport => "TechSupport",
            Field::StreamingTv => "StreamingTV",
            Field::StreamingMovies => "StreamingMovies",
            Field::Contract => "Contract",
            Field::PaperlessBilling => "PaperlessBilling",
            Field::PaymentMethod => "PaymentMethod",
            Field::MonthlyCharges => "MonthlyCharges",
            Field::TotalCharges => "TotalCharges",
        }
    }

    /// Selectable option labels, or an empty slice for numeric fields.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Field::Gender => Gender::LABELS,
            Field::SeniorCitizen
            | Field::Partner
            | Field::Dependents
            | Field::PhoneService
            | Field::PaperlessBilling => YesNo::LABELS,
            Field::MultipleLines => MultipleLines::LABELS,
            Field::InternetService => InternetService::LABELS,
            Field::OnlineSecurity
            | Field::OnlineBackup
            | Field::DeviceProtection
            | Field::TechSupport
            | Field::StreamingTv
            | Field::StreamingMovies => InternetAddOn::LABELS,
            Field::Contract => Contract::LABELS,
            Field::PaymentMethod => PaymentMethod::LABELS,
            Field::Tenure | Field::MonthlyCharges | Field::TotalCharges => &[],
        }
    }

    pub fn is_numeric(self) -> bool {
        self.options().is_empty()
    }

    /// Inclusive bounds for numeric fields.
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            Field::Tenure => Some((0.0, 10_000.0)),
            Field::MonthlyCharges => Some((0.0, 1_000.0)),
            Field::TotalCharges => Some((0.0, 10_000.0)),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = FormError;

    /// Accepts the CLI key or the training column name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(s) || f.column().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A fully answered customer: every field holds a concrete value.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub gender: Gender,
    pub senior_citizen: YesNo,
    pub partner: YesNo,
    pub dependents: YesNo,
    pub tenure: u32,
    pub phone_service: YesNo,
    pub multiple_lines: MultipleLines,
    pub internet_service: InternetService,
    pub online_security: InternetAddOn,
    pub online_backup: InternetAddOn,
    pub device_protection: InternetAddOn,
    pub tech_support: InternetAddOn,
    pub streaming_tv: InternetAddOn,
    pub streaming_movies: InternetAddOn,
    pub contract: Contract,
    pub paperless_billing: YesNo,
    pub payment_method: PaymentMethod,
    pub monthly_charges: f64,
    pub total_charges: f64,
}

/// Form state. `None` is the "unselected" placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub gender: Option<Gender>,
    pub senior_citizen: Option<YesNo>,
    pub partner: Option<YesNo>,
    pub dependents: Option<YesNo>,
    pub tenure: Option<u32>,
    pub phone_service: Option<YesNo>,
    pub multiple_lines: Option<MultipleLines>,
    pub internet_service: Option<InternetService>,
    pub online_security: Option<InternetAddOn>,
    pub online_backup: Option<InternetAddOn>,
    pub device_protection: Option<InternetAddOn>,
    pub tech_support: Option<InternetAddOn>,
    pub streaming_tv: Option<InternetAddOn>,
    pub streaming_movies: Option<InternetAddOn>,
    pub contract: Option<Contract>,
    pub paperless_billing: Option<YesNo>,
    pub payment_method: Option<PaymentMethod>,
    pub monthly_charges: Option<f64>,
    pub total_charges: Option<f64>,
}

fn choice<T>(field: Field, answer: &str, parse: fn(&str) -> Option<T>) -> Result<T, FormError> {
    parse(answer).ok_or_else(|| FormError::UnknownOption {
        field,
        value: answer.to_string(),
    })
}

fn number(field: Field, answer: &str) -> Result<f64, FormError> {
    let value: f64 = answer.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: answer.to_string(),
    })?;
    if !value.is_finite() {
        return Err(FormError::InvalidNumber {
            field,
            value: answer.to_string(),
        });
    }
    if let Some((min, max)) = field.bounds() {
        if value < min || value > max {
            return Err(FormError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
    }
    Ok(value)
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form from `key=value` strings.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut form = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| FormError::MalformedPair(pair.to_string()))?;
            form.set(key.parse()?, value)?;
        }
        Ok(form)
    }

    /// Stores one answer. Blank input or the placeholder resets the field to
    /// unselected.
    pub fn set(&mut self, field: Field, answer: &str) -> Result<(), FormError> {
        let answer = answer.trim();
        if answer.is_empty() || answer == UNSELECTED {
            self.clear(field);
            return Ok(());
        }

        match field {
            Field::Gender => self.gender = Some(choice(field, answer, Gender::from_label)?),
            Field::SeniorCitizen => {
                self.senior_citizen = Some(choice(field, answer, YesNo::from_label)?)
            }
            Field::Partner => self.partner = Some(choice(field, answer, YesNo::from_label)?),
            Field::Dependents => self.dependents = Some(choice(field, answer, YesNo::from_label)?),
            Field::Tenure => {
                let value = number(field, answer)?;
                if value.fract() != 0.0 {
                    return Err(FormError::InvalidNumber {
                        field,
                        value: answer.to_string(),
                    });
                }
                self.tenure = Some(value as u32);
            }
            Field::PhoneService => {
                self.phone_service = Some(choice(field, answer, YesNo::from_label)?)
            }
            Field::MultipleLines => {
                self.multiple_lines = Some(choice(field, answer, MultipleLines::from_label)?)
            }
            Field::InternetService => {
                self.internet_service = Some(choice(field, answer, InternetService::from_label)?)
            }
            Field::OnlineSecurity => {
                self.online_security = Some(choice(field, answer, InternetAddOn::from_label)?)
            }
            Field::OnlineBackup => {
                self.online_backup = Some(choice(field, answer, InternetAddOn::from_label)?)
            }
            Field::DeviceProtection => {
                self.device_protection = Some(choice(field, answer, InternetAddOn::from_label)?)
            }
            Field::TechSupport => {
                self.tech_support = Some(choice(field, answer, InternetAddOn::from_label)?)
            }
            Field::StreamingTv => {
                self.streaming_tv = Some(choice(field, answer, InternetAddOn::from_label)?)
            }
            Field::StreamingMovies => {
                self.streaming_movies = Some(choice(field, answer, InternetAddOn::from_label)?)
            }
            Field::Contract => self.contract = Some(choice(field, answer, Contract::from_label)?),
            Field::PaperlessBilling => {
                self.paperless_billing = Some(choice(field, answer, YesNo::from_label)?)
            }
            Field::PaymentMethod => {
                self.payment_method = Some(choice(field, answer, PaymentMethod::from_label)?)
            }
            Field::MonthlyCharges => self.monthly_charges = Some(number(field, answer)?),
            Field::TotalCharges => self.total_charges = Some(number(field, answer)?),
        }
        Ok(())
    }

    /// Resets a field to the placeholder.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Gender => self.gender = None,
            Field::SeniorCitizen => self.senior_citizen = None,
            Field::Partner => self.partner = None,
            Field::Dependents => self.dependents = None,
            Field::Tenure => self.tenure = None,
            Field::PhoneService => self.phone_service = None,
            Field::MultipleLines => self.multiple_lines = None,
            Field::InternetService => self.internet_service = None,
            Field::OnlineSecurity => self.online_security = None,
            Field::OnlineBackup => self.online_backup = None,
            Field::DeviceProtection => self.device_protection = None,
            Field::TechSupport => self.tech_support = None,
            Field::StreamingTv => self.streaming_tv = None,
            Field::StreamingMovies => self.streaming_movies = None,
            Field::Contract => self.contract = None,
            Field::PaperlessBilling => self.paperless_billing = None,
            Field::PaymentMethod => self.payment_method = None,
            Field::MonthlyCharges => self.monthly_charges = None,
            Field::TotalCharges => self.total_charges = None,
        }
    }

    pub fn is_selected(&self, field: Field) -> bool {
        match field {
            Field::Gender => self.gender.is_some(),
            Field::SeniorCitizen => self.senior_citizen.is_some(),
            Field::Partner => self.partner.is_some(),
            Field::Dependents => self.dependents.is_some(),
            Field::Tenure => self.tenure.is_some(),
            Field::PhoneService => self.phone_service.is_some(),
            Field::MultipleLines => self.multiple_lines.is_some(),
            Field::InternetService => self.internet_service.is_some(),
            Field::OnlineSecurity => self.online_security.is_some(),
            Field::OnlineBackup => self.online_backup.is_some(),
            Field::DeviceProtection => self.device_protection.is_some(),
            Field::TechSupport => self.tech_support.is_some(),
            Field::StreamingTv => self.streaming_tv.is_some(),
            Field::StreamingMovies => self.streaming_movies.is_some(),
            Field::Contract => self.contract.is_some(),
            Field::PaperlessBilling => self.paperless_billing.is_some(),
            Field::PaymentMethod => self.payment_method.is_some(),
            Field::MonthlyCharges => self.monthly_charges.is_some(),
            Field::TotalCharges => self.total_charges.is_some(),
        }
    }

    /// Unselected fields, in vector order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|&f| !self.is_selected(f))
            .collect()
    }

    /// Converts the form into a record, refusing if anything is unselected.
    pub fn validate(&self) -> Result<CustomerRecord, FormError> {
        self.to_record().ok_or_else(|| FormError::Incomplete(self.missing()))
    }

    fn to_record(&self) -> Option<CustomerRecord> {
        Some(CustomerRecord {
            gender: self.gender?,
            senior_citizen: self.senior_citizen?,
            partner: self.partner?,
            dependents: self.dependents?,
            tenure: self.tenure?,
            phone_service: self.phone_service?,
            multiple_lines: self.multiple_lines?,
            internet_service: self.internet_service?,
            online_security: self.online_security?,
            online_backup: self.online_backup?,
            device_protection: self.device_protection?,
            tech_support: self.tech_support?,
            streaming_tv: self.streaming_tv?,
            streaming_movies: self.streaming_movies?,
            contract: self.contract?,
            paperless_billing: self.paperless_billing?,
            payment_method: self.payment_method?,
            monthly_charges: self.monthly_charges?,
            total_charges: self.total_charges?,
        })
    }
}

impl From<&CustomerRecord> for CustomerForm {
    fn from(r: &CustomerRecord) -> Self {
        CustomerForm {
            gender: Some(r.gender),
            senior_citizen: Some(r.senior_citizen),
            partner: Some(r.partner),
            dependents: Some(r.dependents),
            tenure: Some(r.tenure),
            phone_service: Some(r.phone_service),
            multiple_lines: Some(r.multiple_lines),
            internet_service: Some(r.internet_service),
            online_security: Some(r.online_security),
            online_backup: Some(r.online_backup),
            device_protection: Some(r.device_protection),
            tech_support: Some(r.tech_support),
            streaming_tv: Some(r.streaming_tv),
            streaming_movies: Some(r.streaming_movies),
            contract: Some(r.contract),
            paperless_billing: Some(r.paperless_billing),
            payment_method: Some(r.payment_method),
            monthly_charges: Some(r.monthly_charges),
            total_charges: Some(r.total_charges),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_pairs() -> Vec<&'static str> {
        vec![
            "gender=Male",
            "senior_citizen=No",
            "partner=Yes",
            "dependents=No",
            "tenure=12",
            "phone_service=Yes",
            "multiple_lines=No",
            "internet_service=DSL",
            "online_security=Yes",
            "online_backup=No",
            "device_protection=No",
            "tech_support=No",
            "streaming_tv=No",
            "streaming_movies=No",
            "contract=One year",
            "paperless_billing=Yes",
            "payment_method=Mailed check",
            "monthly_charges=55.5",
            "total_charges=660.0",
        ]
    }

    #[test]
    fn empty_form_reports_every_field_missing() {
        let form = CustomerForm::new();
        assert_eq!(form.missing(), Field::ALL.to_vec());
        assert_eq!(
            form.validate(),
            Err(FormError::Incomplete(Field::ALL.to_vec()))
        );
    }

    #[test]
    fn complete_form_validates() {
        let form = CustomerForm::from_pairs(complete_pairs()).unwrap();
        let record = form.validate().unwrap();
        assert_eq!(record.gender, Gender::Male);
        assert_eq!(record.tenure, 12);
        assert_eq!(record.contract, Contract::OneYear);
        assert_eq!(record.total_charges, 660.0);
    }

    #[test]
    fn each_unselected_field_blocks_validation() {
        for field in Field::ALL {
            let mut form = CustomerForm::from_pairs(complete_pairs()).unwrap();
            form.set(field, UNSELECTED).unwrap();
            assert_eq!(form.validate(), Err(FormError::Incomplete(vec![field])));
        }
    }

    #[test]
    fn blank_answer_resets_field() {
        let mut form = CustomerForm::new();
        form.set(Field::Contract, "Two year").unwrap();
        assert!(form.is_selected(Field::Contract));
        form.set(Field::Contract, "   ").unwrap();
        assert!(!form.is_selected(Field::Contract));
    }

    #[test]
    fn labels_are_field_specific() {
        let mut form = CustomerForm::new();
        assert!(form.set(Field::OnlineBackup, "No internet service").is_ok());
        assert_eq!(
            form.set(Field::MultipleLines, "No internet service"),
            Err(FormError::UnknownOption {
                field: Field::MultipleLines,
                value: "No internet service".into(),
            })
        );
        assert!(form.set(Field::InternetService, "Yes").is_err());
        assert!(form.set(Field::PaymentMethod, "Cash").is_err());
    }

    #[test]
    fn numeric_bounds_are_enforced() {
        let mut form = CustomerForm::new();
        assert!(matches!(
            form.set(Field::Tenure, "-1"),
            Err(FormError::OutOfRange { .. })
        ));
        assert!(matches!(
            form.set(Field::Tenure, "1.5"),
            Err(FormError::InvalidNumber { .. })
        ));
        assert!(matches!(
            form.set(Field::MonthlyCharges, "1000.1"),
            Err(FormError::OutOfRange { .. })
        ));
        assert!(matches!(
            form.set(Field::TotalCharges, "lots"),
            Err(FormError::InvalidNumber { .. })
        ));
        assert!(matches!(
            form.set(Field::TotalCharges, "NaN"),
            Err(FormError::InvalidNumber { .. })
        ));
        form.set(Field::TotalCharges, "10000").unwrap();
        assert_eq!(form.total_charges, Some(10_000.0));
    }

    #[test]
    fn field_lookup_accepts_key_and_column() {
        assert_eq!("senior_citizen".parse::<Field>(), Ok(Field::SeniorCitizen));
        assert_eq!("SeniorCitizen".parse::<Field>(), Ok(Field::SeniorCitizen));
        assert_eq!("streamingtv".parse::<Field>(), Ok(Field::StreamingTv));
        assert_eq!(
            "shoe_size".parse::<Field>(),
            Err(FormError::UnknownField("shoe_size".into()))
        );
    }

    #[test]
    fn pairs_without_separator_are_rejected() {
        assert_eq!(
            CustomerForm::from_pairs(["gender"]),
            Err(FormError::MalformedPair("gender".into()))
        );
    }

    #[test]
    fn field_indices_follow_declaration_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn record_round_trips_through_form() {
        let record = CustomerForm::from_pairs(complete_pairs())
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(CustomerForm::from(&record).validate(), Ok(record));
    }
}
