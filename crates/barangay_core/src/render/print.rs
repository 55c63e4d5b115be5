//! Print collaborator seam and the HTML file surface used by the CLI.
//!
//! # Invariants
//! - When a target cannot open a surface, `print_job` returns
//!   `PrintError::Blocked` with the subject's notice and writes nothing.

use crate::render::PrintJob;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum PrintError {
    /// No surface could be opened; show `notice` and do nothing else.
    Blocked { notice: String },
    /// The surface opened but writing or printing failed.
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for PrintError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocked { notice } => f.write_str(notice),
            Self::Io { path, source } => {
                write!(f, "failed to write print surface `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PrintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Blocked { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Why a target refused to open a surface. Only logged; callers see `Blocked`.
#[derive(Debug)]
pub struct OpenRefused(pub String);

/// Opens fresh rendering surfaces, like a browser opening a print window.
pub trait PrintTarget {
    fn open(&self, title: &str) -> Result<Box<dyn PrintSurface>, OpenRefused>;
}

/// One opened surface: receives markup, then prints it.
pub trait PrintSurface {
    fn write(&mut self, markup: &str) -> Result<(), PrintError>;
    fn print(&mut self) -> Result<(), PrintError>;

    /// Where the printed artifact ended up, when it has a location.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// Opens a surface for `job`, writes its markup, and prints it.
///
/// Returns the artifact location reported by the surface.
pub fn print_job(target: &dyn PrintTarget, job: &PrintJob) -> Result<Option<PathBuf>, PrintError> {
    let mut surface = match target.open(&job.title) {
        Ok(surface) => surface,
        Err(OpenRefused(reason)) => {
            warn!(
                "event=print_open module=render status=blocked reason={}",
                crate::logging::sanitize_message(&reason, 120)
            );
            return Err(PrintError::Blocked {
                notice: job.subject.blocked_notice().to_string(),
            });
        }
    };

    surface.write(&job.markup)?;
    surface.print()?;
    info!(
        "event=print_job module=render status=ok bytes={}",
        job.markup.len()
    );
    Ok(surface.location().map(Path::to_path_buf))
}

/// Writes each job to `<dir>/<slug-of-title>.html`.
#[derive(Debug, Clone)]
pub struct HtmlFileTarget {
    dir: PathBuf,
}

impl HtmlFileTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PrintTarget for HtmlFileTarget {
    fn open(&self, title: &str) -> Result<Box<dyn PrintSurface>, OpenRefused> {
        std::fs::create_dir_all(&self.dir).map_err(|err| {
            OpenRefused(format!("cannot create `{}`: {err}", self.dir.display()))
        })?;
        let path = self.dir.join(format!("{}.html", slugify(title)));
        let file = File::create(&path)
            .map_err(|err| OpenRefused(format!("cannot create `{}`: {err}", path.display())))?;
        Ok(Box::new(HtmlFileSurface {
            path,
            writer: BufWriter::new(file),
        }))
    }
}

struct HtmlFileSurface {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl HtmlFileSurface {
    fn io_error(&self, source: std::io::Error) -> PrintError {
        PrintError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PrintSurface for HtmlFileSurface {
    fn write(&mut self, markup: &str) -> Result<(), PrintError> {
        self.writer
            .write_all(markup.as_bytes())
            .map_err(|err| self.io_error(err))
    }

    fn print(&mut self) -> Result<(), PrintError> {
        self.writer.flush().map_err(|err| self.io_error(err))
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("print");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::{print_job, slugify, HtmlFileTarget, OpenRefused, PrintError, PrintSurface, PrintTarget};
    use crate::render::{PrintJob, PrintSubject};

    struct PopupBlocker;

    impl PrintTarget for PopupBlocker {
        fn open(&self, _title: &str) -> Result<Box<dyn PrintSurface>, OpenRefused> {
            Err(OpenRefused("popups disabled".to_string()))
        }
    }

    fn job(subject: PrintSubject) -> PrintJob {
        PrintJob {
            subject,
            title: "Case File: BMS-2023-001".to_string(),
            markup: "<html><body>case</body></html>".to_string(),
        }
    }

    #[test]
    fn slugs_are_filesystem_friendly() {
        assert_eq!(slugify("Case File: BMS-2023-001"), "case-file-bms-2023-001");
        assert_eq!(
            slugify("Barangay Clearance - Juan Dela Cruz"),
            "barangay-clearance-juan-dela-cruz"
        );
        assert_eq!(slugify("???"), "print");
    }

    #[test]
    fn blocked_target_surfaces_subject_notice() {
        let err = print_job(&PopupBlocker, &job(PrintSubject::CaseFile)).unwrap_err();
        let PrintError::Blocked { notice } = err else {
            panic!("expected blocked error");
        };
        assert_eq!(
            notice,
            "Popup blocked! Please allow popups for this site to print the case file."
        );
    }

    #[test]
    fn html_file_target_writes_markup() {
        let dir = tempfile::tempdir().unwrap();
        let target = HtmlFileTarget::new(dir.path().join("print"));

        let path = print_job(&target, &job(PrintSubject::CaseFile))
            .unwrap()
            .unwrap();
        assert_eq!(path, dir.path().join("print").join("case-file-bms-2023-001.html"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "<html><body>case</body></html>"
        );
    }
}
