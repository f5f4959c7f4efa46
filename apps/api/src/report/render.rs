//! Pure HTML rendering of parsed report sections.
//!
//! Takes a section sequence and returns a self-contained HTML fragment; the
//! stylesheet lives in the static frontend (`assets/styles.css`). No global
//! state, no style injection.

use std::fmt::Write;

use html_escape::encode_text;

use crate::report::parser::{LineKind, ReportLine, Section, Tone};

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Strong => "assessment-strong",
        Tone::Moderate => "assessment-moderate",
        Tone::Weak => "assessment-weak",
    }
}

/// Renders sections into one HTML fragment, in order. Each section becomes a
/// self-contained `.analysis-section` block.
pub fn render_report(sections: &[Section]) -> String {
    let mut html = String::new();
    for section in sections {
        match section {
            Section::Score { score } => render_score(&mut html, *score),
            Section::Text { header, lines } => render_text(&mut html, header, lines),
        }
    }
    html
}

fn render_score(html: &mut String, score: u32) {
    // Infallible: writing to a String cannot fail.
    let _ = write!(
        html,
        concat!(
            "<div class=\"analysis-section\">",
            "<h3>Overall Match Score</h3>",
            "<div class=\"match-score\">",
            "<div class=\"score-circle\" style=\"--score: {score}\"><span>{score}</span></div>",
            "<p>Match Score</p>",
            "</div>",
            "</div>"
        ),
        score = score
    );
}

fn render_text(html: &mut String, header: &str, lines: &[ReportLine]) {
    let _ = write!(
        html,
        "<div class=\"analysis-section\"><h3>{}</h3><div class=\"section-content\">",
        encode_text(header)
    );
    for line in lines {
        let text = encode_text(&line.text);
        match (line.kind, line.tone) {
            (LineKind::Bullet, _) => {
                let _ = write!(html, "<p class=\"bullet-point\">{text}</p>");
            }
            (LineKind::Plain, Some(tone)) => {
                let _ = write!(html, "<p class=\"{}\">{text}</p>", tone_class(tone));
            }
            (LineKind::Plain, None) => {
                let _ = write!(html, "<p>{text}</p>");
            }
        }
    }
    html.push_str("</div></div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parser::parse_report;

    #[test]
    fn test_score_block_shape() {
        let html = render_report(&[Section::Score { score: 82 }]);
        assert!(html.contains("<h3>Overall Match Score</h3>"));
        assert!(html.contains("class=\"score-circle\" style=\"--score: 82\""));
        assert!(html.contains("<span>82</span>"));
        assert!(html.contains("<p>Match Score</p>"));
    }

    #[test]
    fn test_bullet_lines_get_bullet_class() {
        let html = render_report(&parse_report("1. Skills Gap:\n- Missing cloud experience"));
        assert!(html.contains("<p class=\"bullet-point\">Missing cloud experience</p>"));
    }

    #[test]
    fn test_assessment_tone_class_on_plain_lines() {
        let html = render_report(&parse_report(
            "1. Overall Assessment:\nShows strong alignment with the role.",
        ));
        assert!(html.contains("<p class=\"assessment-strong\">Shows strong alignment with the role.</p>"));
    }

    #[test]
    fn test_plain_line_without_tone_has_no_class() {
        let html = render_report(&parse_report("1. Notes:\nSomething neutral"));
        assert!(html.contains("<p>Something neutral</p>"));
    }

    #[test]
    fn test_text_is_html_escaped() {
        let html = render_report(&parse_report("1. Skills <b>Gap</b>:\n- Use of C & C++"));
        assert!(html.contains("Skills &lt;b&gt;Gap&lt;/b&gt;:"));
        assert!(html.contains("C &amp; C++"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render_report(&parse_report("1. First:\na\n2. Second:\nb"));
        let first = html.find("<h3>First:</h3>").unwrap();
        let second = html.find("<h3>Second:</h3>").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_sections_render_empty_fragment() {
        assert_eq!(render_report(&[]), "");
    }
}
