//! Analysis-text parser — turns the free-form numbered analysis blob into an
//! ordered sequence of display sections.
//!
//! The upstream text generator is not schema-constrained, so this parser is
//! total: malformed input degrades to defaults (score 0, no tone, empty
//! header) instead of failing. No section is dropped except empty fragments.

use once_cell::sync::Lazy;
use regex::Regex;

/// Numbered-list marker: a digit sequence followed by a literal period.
///
/// KNOWN AMBIGUITY: a digit+period inside body text (e.g. "Python 3.9")
/// also starts a new section. This mirrors the upstream format contract and
/// is deliberately left as-is; see the pinned test below.
static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.").unwrap());

static SCORE_CAPTURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Overall Match Score:\s*(\d+)").unwrap());

const SCORE_SENTINEL: &str = "Overall Match Score";
const ASSESSMENT_HEADER: &str = "Overall Assessment:";

/// Qualitative sentiment of the "Overall Assessment:" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Bullet,
    Plain,
}

/// One classified content line of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    pub kind: LineKind,
    /// Section tone, carried only by Plain lines of the assessment section.
    pub tone: Option<Tone>,
}

/// One logical block of the analysis text, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Fixed-shape match score block (header "Overall Match Score",
    /// circular indicator, label "Match Score").
    Score { score: u32 },
    Text {
        header: String,
        lines: Vec<ReportLine>,
    },
}

/// Parses one analysis text into sections. Pure and total; parsing the same
/// input twice yields structurally identical output.
pub fn parse_report(analysis: &str) -> Vec<Section> {
    SECTION_MARKER
        .split(analysis.trim())
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(parse_section)
        .collect()
}

fn parse_section(fragment: &str) -> Section {
    if fragment.contains(SCORE_SENTINEL) {
        return Section::Score {
            score: extract_score(fragment),
        };
    }

    let mut lines = fragment.split('\n');
    // A fragment always has at least one line after the non-empty filter.
    let header = lines.next().unwrap_or_default().replace('*', "");
    let header = header.trim().to_string();

    let content: Vec<&str> = lines.collect();
    let tone = if header == ASSESSMENT_HEADER {
        classify_tone(&content)
    } else {
        None
    };

    let lines = content
        .iter()
        .map(|line| classify_line(line, tone))
        .collect();

    Section::Text { header, lines }
}

/// First integer following "Overall Match Score:"; 0 when absent or
/// unparseable. No clamping: only the capture failure defaults.
fn extract_score(fragment: &str) -> u32 {
    SCORE_CAPTURE
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Tone is computed once per section from all content lines joined with
/// spaces, lowercased, by priority substring match.
fn classify_tone(content: &[&str]) -> Option<Tone> {
    let text = content.join(" ").to_lowercase();
    if text.contains("strong alignment") {
        Some(Tone::Strong)
    } else if text.contains("moderate alignment") {
        Some(Tone::Moderate)
    } else if text.contains("needs significant enhancement") {
        Some(Tone::Weak)
    } else {
        None
    }
}

fn classify_line(line: &str, tone: Option<Tone>) -> ReportLine {
    let trimmed = line.trim();
    match trimmed.strip_prefix('-') {
        Some(rest) => ReportLine {
            text: rest.trim().to_string(),
            kind: LineKind::Bullet,
            tone: None,
        },
        None => ReportLine {
            text: trimmed.to_string(),
            kind: LineKind::Plain,
            tone,
        },
    }
}
