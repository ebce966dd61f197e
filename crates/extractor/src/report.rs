use std::fmt;
use std::path::{Path, PathBuf};

/// Number of saved paths listed in the console summary by default.
pub const DEFAULT_PREVIEW_LIMIT: usize = 20;

/// What one extraction run wrote, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    output_dir: PathBuf,
    saved: Vec<PathBuf>,
    duplicates: usize,
}

impl ExtractionReport {
    pub fn new(output_dir: PathBuf, saved: Vec<PathBuf>, duplicates: usize) -> Self {
        Self {
            output_dir,
            saved,
            duplicates,
        }
    }

    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    pub fn count(&self) -> usize {
        self.saved.len()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn summary(&self, preview_limit: usize) -> Summary<'_> {
        Summary {
            report: self,
            preview_limit,
        }
    }
}

/// Console rendering of a report: a headline, the first few paths, and an
/// overflow note.
pub struct Summary<'a> {
    report: &'a ExtractionReport,
    preview_limit: usize,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted {} images to {}",
            self.report.count(),
            self.report.output_dir.display()
        )?;
        for path in self.report.saved.iter().take(self.preview_limit) {
            write!(f, "\n- {}", path.display())?;
        }
        let hidden = self.report.count().saturating_sub(self.preview_limit);
        if hidden > 0 {
            write!(f, "\n... and {} more", hidden)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(count: usize) -> ExtractionReport {
        let saved = (0..count)
            .map(|i| PathBuf::from(format!("figures/notebook/cell{:04}_out00_x.png", i + 1)))
            .collect();
        ExtractionReport::new(PathBuf::from("figures/notebook"), saved, 0)
    }

    #[test]
    fn test_summary_empty() {
        let report = report_with(0);
        assert_eq!(
            report.summary(DEFAULT_PREVIEW_LIMIT).to_string(),
            "Extracted 0 images to figures/notebook"
        );
    }

    #[test]
    fn test_summary_lists_paths() {
        let report = report_with(2);
        assert_eq!(
            report.summary(DEFAULT_PREVIEW_LIMIT).to_string(),
            "Extracted 2 images to figures/notebook\n\
             - figures/notebook/cell0001_out00_x.png\n\
             - figures/notebook/cell0002_out00_x.png"
        );
    }

    #[test]
    fn test_summary_overflow() {
        let report = report_with(23);
        let text = report.summary(DEFAULT_PREVIEW_LIMIT).to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 20 + 1);
        assert_eq!(lines[0], "Extracted 23 images to figures/notebook");
        assert_eq!(lines[20], "- figures/notebook/cell0020_out00_x.png");
        assert_eq!(lines[21], "... and 3 more");
    }

    #[test]
    fn test_summary_exactly_at_limit() {
        let text = report_with(20).summary(20).to_string();
        assert!(!text.contains("more"));
        assert_eq!(text.lines().count(), 21);
    }
}
