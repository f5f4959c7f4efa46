//! Default analysis backend — pure-Rust, deterministic, no network calls.
//!
//! For each job-description sentence, finds the best-covering resume sentence
//! by token-frequency cosine similarity, then classifies coverage into
//! strengths (> 0.6), improvement candidates (0.4–0.6), and gaps (< 0.4).
//! The composed output is the five-part numbered analysis text that
//! `report::parser` consumes.

use async_trait::async_trait;

use crate::analysis::similarity::{clean_text, cosine_similarity, split_sentences};
use crate::analysis::{Analysis, Analyzer};
use crate::errors::AppError;

const STRENGTH_THRESHOLD: f64 = 0.6;
const GAP_THRESHOLD: f64 = 0.4;
const MAX_STRENGTHS: usize = 5;
const MAX_IMPROVEMENTS: usize = 3;
const MAX_GAPS: usize = 3;

/// Deterministic lexical analyzer. Default backend.
pub struct SimilarityAnalyzer;

#[async_trait]
impl Analyzer for SimilarityAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Analysis, AppError> {
        Ok(compute_analysis(resume_text, job_description))
    }
}

/// One job requirement paired with its best-matching resume sentence.
#[derive(Debug, Clone)]
struct Coverage {
    resume_sentence: String,
    requirement: String,
    similarity: f64,
}

fn compute_analysis(resume_text: &str, job_description: &str) -> Analysis {
    let cleaned_resume = clean_text(resume_text);
    let resume_sentences = split_sentences(&cleaned_resume);
    let job_sentences = split_sentences(job_description);

    let mut covered = Vec::with_capacity(job_sentences.len());
    for requirement in &job_sentences {
        let (best_sentence, best_similarity) = resume_sentences
            .iter()
            .map(|s| (*s, cosine_similarity(s, requirement)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or(("", 0.0));
        covered.push(Coverage {
            resume_sentence: best_sentence.to_string(),
            requirement: requirement.to_string(),
            similarity: best_similarity,
        });
    }

    let match_score = compute_match_score(&covered);

    let analysis = format!(
        "1. Overall Match Score: {match_score}/100\n\n\
         2. Key Strengths:\n{strengths}\n\n\
         3. Suggested Improvements:\n{improvements}\n\n\
         4. Areas that need attention:\n{gaps}\n\n\
         5. Overall Assessment:\n{assessment}",
        strengths = describe_strengths(&covered),
        improvements = describe_improvements(&covered),
        gaps = describe_gaps(&covered),
        assessment = describe_assessment(match_score),
    );

    Analysis {
        analysis,
        match_score,
    }
}

/// Mean of per-requirement best similarities, mapped to 0-100.
fn compute_match_score(covered: &[Coverage]) -> u32 {
    if covered.is_empty() {
        return 0;
    }
    let mean: f64 = covered.iter().map(|c| c.similarity).sum::<f64>() / covered.len() as f64;
    (mean * 100.0).round().clamp(0.0, 100.0) as u32
}

fn describe_strengths(covered: &[Coverage]) -> String {
    let mut strong: Vec<&Coverage> = covered
        .iter()
        .filter(|c| c.similarity > STRENGTH_THRESHOLD)
        .collect();
    strong.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    if strong.is_empty() {
        return "- No strong matches found".to_string();
    }
    strong
        .iter()
        .take(MAX_STRENGTHS)
        .map(|c| {
            format!(
                "- Your experience in '{}' strongly aligns with the requirement: '{}'.",
                c.resume_sentence, c.requirement
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_improvements(covered: &[Coverage]) -> String {
    let mut moderate: Vec<&Coverage> = covered
        .iter()
        .filter(|c| c.similarity >= GAP_THRESHOLD && c.similarity <= STRENGTH_THRESHOLD)
        .collect();
    moderate.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    if moderate.is_empty() {
        return "- No moderate matches found".to_string();
    }
    moderate
        .iter()
        .take(MAX_IMPROVEMENTS)
        .map(|c| {
            format!(
                "- Your experience with '{}' partially matches the requirement: '{}'.",
                c.resume_sentence, c.requirement
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_gaps(covered: &[Coverage]) -> String {
    let mut gaps: Vec<&Coverage> = covered
        .iter()
        .filter(|c| c.similarity < GAP_THRESHOLD)
        .collect();
    gaps.sort_by(|a, b| a.similarity.total_cmp(&b.similarity));

    if gaps.is_empty() {
        return "- No significant gaps found".to_string();
    }
    gaps.iter()
        .take(MAX_GAPS)
        .map(|c| {
            format!(
                "- The requirement '{}' is not well represented in your resume.",
                c.requirement
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assessment phrasing is load-bearing: the report parser keys its tone
/// classification on these exact phrases.
fn describe_assessment(match_score: u32) -> &'static str {
    if match_score >= 80 {
        "Your resume shows strong alignment with the job requirements."
    } else if match_score >= 50 {
        "Your resume shows moderate alignment with the job requirements."
    } else {
        "Your resume needs significant enhancement to better match the job requirements."
    }
}
