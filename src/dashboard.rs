//! The user-facing surface: menu pages, form submission and the interactive
//! terminal session.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::Config;
use crate::dataset::load_preview;
use crate::encoder::encode;
use crate::error::{DatasetError, SubmitError};
use crate::inference::{self, Prediction};
use crate::model::Classifier;
use crate::record::{CustomerForm, Field, UNSELECTED};
use crate::views;

/// Menu entries, in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Predict,
    Accuracy,
    Dataset,
    About,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Predict, Page::Accuracy, Page::Dataset, Page::About];

    pub fn title(self) -> &'static str {
        match self {
            Page::Predict => "Predict",
            Page::Accuracy => "Accuracy",
            Page::Dataset => "Dataset",
            Page::About => "About",
        }
    }

    /// Accepts a 1-based menu number or a page title.
    pub fn from_choice(choice: &str) -> Option<Page> {
        let choice = choice.trim();
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied());
        }
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.title().eq_ignore_ascii_case(choice))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// User-visible text for a verdict.
pub fn verdict_message(p: &Prediction) -> String {
    if p.is_churn() {
        format!(
            "⚠️  Customer is likely to churn. Probability: {:.2}",
            p.probability
        )
    } else {
        format!(
            "✅ Customer is unlikely to churn. Probability: {:.2}",
            p.probability
        )
    }
}

/// Dataset page, or a notice when the file cannot be shown. Never fails.
pub fn dataset_view(config: &Config) -> String {
    match load_preview(&config.data_path, config.preview_rows) {
        Ok(preview) => views::dataset_page(&preview),
        Err(DatasetError::NotFound(path)) => {
            warn!(path = %path.display(), "dataset file missing");
            format!("Dataset\n\n❌ Dataset file not found: {}\n", path.display())
        }
        Err(e) => {
            warn!(error = %e, "dataset unreadable");
            format!("Dataset\n\n❌ Dataset could not be read: {e}\n")
        }
    }
}

/// Lists every form field with its options.
pub fn fields_view() -> String {
    let rows: Vec<Vec<String>> = Field::ALL
        .iter()
        .map(|&f| {
            let options = match f.bounds() {
                Some((min, max)) => format!("number, {min} to {max}"),
                None => f.options().join(" / "),
            };
            vec![f.key().to_string(), f.label().to_string(), options]
        })
        .collect();
    views::render_table(&["Key", "Field", "Options"], &rows)
}

/// Renders any page that needs no user input. The predict page shows the
/// form layout.
pub fn render_page(page: Page, config: &Config) -> String {
    match page {
        Page::Predict => format!(
            "Customer churn prediction\n\nEnter the customer's data to run a prediction.\n\n{}",
            fields_view()
        ),
        Page::Accuracy => views::accuracy_page(),
        Page::Dataset => dataset_view(config),
        Page::About => views::about_page(),
    }
}

/// Translates a menu-style answer (option number, `0` for the placeholder)
/// into the text the form parses.
fn resolve_answer(field: Field, input: &str) -> String {
    let input = input.trim();
    if field.is_numeric() {
        return input.to_string();
    }
    let options = field.options();
    match input.parse::<usize>() {
        Ok(0) => UNSELECTED.to_string(),
        Ok(n) if n <= options.len() => options[n - 1].to_string(),
        _ => input.to_string(),
    }
}

fn prompt(field: Field) -> String {
    match field.bounds() {
        Some((min, max)) => format!("{} ({min}-{max}): ", field.label()),
        None => {
            let mut choices = vec![format!("0) {UNSELECTED}")];
            choices.extend(
                field
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(i, o)| format!("{}) {o}", i + 1)),
            );
            format!("{} [{}]: ", field.label(), choices.join(" "))
        }
    }
}

/// Prediction dashboard around a model that is loaded once and only read.
pub struct Dashboard<C> {
    model: C,
    config: Config,
}

impl<C: Classifier> Dashboard<C> {
    pub fn new(model: C, config: Config) -> Self {
        Dashboard { model, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates the form, then encodes and classifies it. An incomplete form
    /// never reaches the model.
    pub fn submit(&self, form: &CustomerForm) -> Result<Prediction, SubmitError> {
        let record = form.validate().inspect_err(|e| {
            warn!(error = %e, "rejected submission");
        })?;
        let features = encode(&record);
        Ok(inference::predict(&self.model, &features)?)
    }

    pub fn render(&self, page: Page) -> String {
        render_page(page, &self.config)
    }

    /// Line-oriented session: menu, pages and the prediction form. Ends on
    /// `exit`, `quit` or end of input.
    pub fn run_session<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> io::Result<()> {
        info!("session started");
        loop {
            writeln!(out, "\n⚡ Predict Churn")?;
            for (i, page) in Page::ALL.iter().enumerate() {
                writeln!(out, "  {}) {page}", i + 1)?;
            }
            write!(out, "Choose a menu (or 'exit'): ")?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                break;
            };
            if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                break;
            }

            match Page::from_choice(&line) {
                Some(Page::Predict) => {
                    if !self.fill_and_submit(&mut input, &mut out)? {
                        break;
                    }
                }
                Some(page) => writeln!(out, "\n{}", self.render(page))?,
                None => writeln!(out, "Unknown menu `{line}`")?,
            }
        }
        info!("session ended");
        Ok(())
    }

    /// Walks the form field by field. Returns `false` if input ran out.
    fn fill_and_submit<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        writeln!(out, "\nCustomer churn prediction")?;
        writeln!(out, "Enter the customer's data to run a prediction.")?;

        let mut form = CustomerForm::new();
        for field in Field::ALL {
            loop {
                write!(out, "{}", prompt(field))?;
                out.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(false);
                };
                match form.set(field, &resolve_answer(field, &line)) {
                    Ok(()) => break,
                    Err(e) => writeln!(out, "❌ {e}")?,
                }
            }
        }

        match self.submit(&form) {
            Ok(prediction) => writeln!(out, "{}", verdict_message(&prediction))?,
            Err(e) => writeln!(out, "❌ {e}")?,
        }
        Ok(true)
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
