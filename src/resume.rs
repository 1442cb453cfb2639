//! Structured résumé content and its conversion into a block [`Flow`].

use crate::model::{Block, Flow, TextStyle};

/// Gap after the header lines and between sections, in points.
pub const SECTION_GAP_PT: f64 = 12.0;

/// Gap between two consecutive positions, in points.
pub const POSITION_GAP_PT: f64 = 6.0;

/// A single entry of the professional experience section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Job title.
    pub title: &'static str,
    /// Employer name.
    pub employer: &'static str,
    /// Human readable date range.
    pub period: &'static str,
    /// Bullet points describing the work.
    pub highlights: Vec<&'static str>,
}

impl Position {
    /// Heading line rendered above the highlights.
    pub fn heading(&self) -> String {
        format!("{} — {} ({})", self.title, self.employer, self.period)
    }
}

/// Complete résumé made of literal values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resume {
    pub name: &'static str,
    pub contact: &'static str,
    pub target_role: &'static str,
    pub summary: &'static str,
    pub skills: Vec<&'static str>,
    pub experience: Vec<Position>,
    pub education: &'static str,
}

impl Resume {
    /// Assembles the ordered block sequence for this résumé.
    pub fn to_flow(&self) -> Flow {
        let mut flow = Flow::new();

        flow.push(Block::heading(TextStyle::Title, self.name));
        flow.push(Block::paragraph(self.contact));
        flow.push(Block::spacer(SECTION_GAP_PT));
        flow.push(Block::heading(TextStyle::Section, self.target_role));
        flow.push(Block::spacer(SECTION_GAP_PT));

        flow.push(Block::heading(TextStyle::Section, "Professional Summary"));
        flow.push(Block::paragraph(self.summary));
        flow.push(Block::spacer(SECTION_GAP_PT));

        flow.push(Block::heading(TextStyle::Section, "Technical Skills"));
        flow.push(Block::bullet_list(self.skills.iter().copied()));
        flow.push(Block::spacer(SECTION_GAP_PT));

        flow.push(Block::heading(TextStyle::Section, "Professional Experience"));
        let last = self.experience.len().saturating_sub(1);
        for (index, position) in self.experience.iter().enumerate() {
            flow.push(Block::heading(TextStyle::Subsection, position.heading()));
            flow.push(Block::bullet_list(position.highlights.iter().copied()));
            let gap = if index == last {
                SECTION_GAP_PT
            } else {
                POSITION_GAP_PT
            };
            flow.push(Block::spacer(gap));
        }

        flow.push(Block::heading(TextStyle::Section, "Education"));
        flow.push(Block::paragraph(self.education));

        flow
    }

    /// Every literal value of the résumé, in document order.
    pub fn literals(&self) -> Vec<String> {
        let mut literals = vec![
            self.name.to_owned(),
            self.contact.to_owned(),
            self.target_role.to_owned(),
            self.summary.to_owned(),
        ];
        literals.extend(self.skills.iter().map(|skill| skill.to_string()));
        for position in &self.experience {
            literals.push(position.heading());
            literals.extend(position.highlights.iter().map(|item| item.to_string()));
        }
        literals.push(self.education.to_owned());
        literals
    }
}
