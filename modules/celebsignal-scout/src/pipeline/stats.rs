use celebsignal_common::Label;

/// Stats from a pipeline run.
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub subjects_extracted: u32,
    pub subjects_analyzed: u32,
    pub posts_scored: u32,
    pub by_label: [u32; 4], // Positive, Neutral, Negative, NA
    pub unmatched_updates: u32,
    pub isolated_failures: u32,
}

impl RunStats {
    pub fn record_label(&mut self, label: Label) {
        let slot = match label {
            Label::Positive => 0,
            Label::Neutral => 1,
            Label::Negative => 2,
            Label::NotAvailable => 3,
        };
        self.by_label[slot] += 1;
    }
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\n=== Sentiment Run Complete ===")?;
        writeln!(f, "Subjects extracted: {}", self.subjects_extracted)?;
        writeln!(f, "Subjects analyzed:  {}", self.subjects_analyzed)?;
        writeln!(f, "Posts scored:       {}", self.posts_scored)?;
        writeln!(f, "\nBy label:")?;
        writeln!(f, "  Positive: {}", self.by_label[0])?;
        writeln!(f, "  Neutral:  {}", self.by_label[1])?;
        writeln!(f, "  Negative: {}", self.by_label[2])?;
        writeln!(f, "  NA:       {}", self.by_label[3])?;
        if self.unmatched_updates > 0 {
            writeln!(f, "\nUnmatched updates:  {}", self.unmatched_updates)?;
        }
        if self.isolated_failures > 0 {
            writeln!(f, "Isolated failures:  {}", self.isolated_failures)?;
        }
        Ok(())
    }
}
