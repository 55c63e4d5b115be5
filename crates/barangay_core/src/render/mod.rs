//! Print artifacts for issued documents and Lupon case files.
//!
//! # Responsibility
//! - Turn one record into a complete printable HTML page.
//! - Hand pages to a print collaborator that may refuse to open.
//!
//! # Invariants
//! - Templates are selected by the record's type or status; field values are
//!   substituted verbatim and are not escaped.
//! - Rendering is pure; only `print::print_job` has side effects.

pub mod case_file;
pub mod document;
pub mod print;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use case_file::render_case_file;
pub use document::render_document;
pub use print::{print_job, HtmlFileTarget, OpenRefused, PrintError, PrintSurface, PrintTarget};

/// Issuing office details printed in every page header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letterhead {
    pub province: String,
    pub city: String,
    pub barangay: String,
    pub captain: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Self {
            province: "Cebu".to_string(),
            city: "Talisay".to_string(),
            barangay: "Dumlog".to_string(),
            captain: "Cmdr. Alex Reyes".to_string(),
        }
    }
}

impl Letterhead {
    /// `Barangay Dumlog, Talisay City, Cebu`
    pub fn locality(&self) -> String {
        format!(
            "Barangay {}, {} City, {}",
            self.barangay, self.city, self.province
        )
    }

    fn header_lines(&self) -> String {
        format!(
            "<p>Republic of the Philippines</p>\n\
             <p>Province of {}</p>\n\
             <p>City of {}</p>\n\
             <p><strong>BARANGAY {}</strong></p>",
            self.province,
            self.city,
            self.barangay.to_uppercase()
        )
    }
}

/// What a print job prints; selects the notice shown when printing is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintSubject {
    Document,
    CaseFile,
}

impl PrintSubject {
    pub fn blocked_notice(self) -> &'static str {
        match self {
            Self::Document => {
                "Popup blocked! Please allow popups for this site to print the document."
            }
            Self::CaseFile => {
                "Popup blocked! Please allow popups for this site to print the case file."
            }
        }
    }
}

/// A rendered page ready for a print surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub subject: PrintSubject,
    pub title: String,
    pub markup: String,
}

/// `November 1, 2023`
pub fn long_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}
