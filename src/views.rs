//! Static pages and plain-text table rendering.

use std::fmt::Write;

use crate::dataset::DatasetPreview;

/// Accuracy of each evaluated training setup, in percent.
pub const ACCURACY: [(&str, f64); 6] = [
    ("Random Forest", 77.39),
    ("Random Forest + ROS", 87.94),
    ("Random Forest + SMOTE", 83.34),
    ("Random Forest + PCA", 73.13),
    ("Random Forest + PCA + ROS", 88.23),
    ("Random Forest + PCA + SMOTE", 80.78),
];

pub const ABOUT: &str = "\
This system is a test tool for predicting customer churn from a pre-trained
classifier. It offers four menus:

  Predict   Enter a customer's attributes and get a churn / no-churn verdict
            together with the model's probability for that verdict.
  Accuracy  Compare the accuracy of the training setups that were evaluated
            (Random Forest with and without PCA, ROS and SMOTE).
  Dataset   Browse the dataset the model was trained on.
  About     This page.

Built as the test tool for the undergraduate thesis of
Rifa Adinta Farda (4611419050).
";

/// Renders rows as an aligned text table with a header separator.
pub fn render_table<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = String::new();
    let header: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            format!("{cell:<w$}")
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}

pub fn accuracy_page() -> String {
    let rows: Vec<Vec<String>> = ACCURACY
        .iter()
        .map(|(method, acc)| vec![method.to_string(), format!("{acc:.2}%")])
        .collect();
    format!(
        "Model accuracy\n\nAccuracy of the methods that were evaluated:\n\n{}",
        render_table(&["Method", "Accuracy"], &rows)
    )
}

pub fn about_page() -> String {
    format!("About the system\n\n{ABOUT}")
}

pub fn dataset_page(preview: &DatasetPreview) -> String {
    let mut out = String::from("Dataset\n\nDataset used to train the model:\n\n");
    out.push_str(&render_table(&preview.headers, &preview.rows));
    if preview.rows.len() < preview.total_rows {
        let _ = writeln!(
            out,
            "\n(showing {} of {} rows)",
            preview.rows.len(),
            preview.total_rows
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_page_lists_all_methods() {
        let page = accuracy_page();
        for (method, _) in ACCURACY {
            assert!(page.contains(method), "{method}");
        }
        assert!(page.contains("88.23%"));
        assert!(page.contains("73.13%"));
    }

    #[test]
    fn about_page_credits_the_thesis_author() {
        let page = about_page();
        assert!(page.starts_with("About the system"));
        assert!(page.contains("Rifa Adinta Farda (4611419050)"));
    }

    #[test]
    fn table_columns_are_aligned() {
        let table = render_table(
            &["a", "bbb"],
            &[vec!["long".into(), "x".into()], vec!["s".into(), "y".into()]],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "a    | bbb");
        assert_eq!(lines[1], "---- | ---");
        assert_eq!(lines[2], "long | x");
        assert_eq!(lines[3], "s    | y");
    }

    #[test]
    fn dataset_page_mentions_truncation() {
        let preview = DatasetPreview {
            headers: vec!["tenure".into()],
            rows: vec![vec!["1".into()]],
            total_rows: 3,
        };
        assert!(dataset_page(&preview).contains("showing 1 of 3 rows"));
    }
}
