//! Text-level heuristic predicates
//!
//! Each heuristic is a named, independently testable predicate over plain
//! body text. The document-level scorers compose these with DOM checks; the
//! revision estimator re-runs exactly this subset against revised plain
//! text, which is why none of them look at markup.

use chrono::Datelike;
use regex::Regex;

/// Question-form content: literal question marks or interrogative openers
pub fn has_question_content(text: &str) -> bool {
    if text.contains('?') {
        return true;
    }
    let re = Regex::new(r"(?i)\b(how to|what is|why does|when should|where can|who should)\b")
        .unwrap();
    re.is_match(text)
}

/// Statistics presence: percentages or figures with units
pub fn has_statistics(text: &str) -> bool {
    let re = Regex::new(r"\d+(\.\d+)?\s*(%|percent|million|billion|times|배|명|건)").unwrap();
    re.is_match(text)
}

/// Quotation presence: quotation pairs or attribution phrasing
pub fn has_quotation(text: &str) -> bool {
    let re = Regex::new(r#""[^"]{10,}"|“[^”]{10,}”|according to\s+\w+"#).unwrap();
    re.is_match(text)
}

/// Freshness markers: dates in common formats
pub fn has_freshness_markers(text: &str) -> bool {
    let re = Regex::new(
        r"(?i)\b(20\d{2}[-./]\d{1,2}[-./]\d{1,2}|\d{1,2}\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+20\d{2}|(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+20\d{2}|updated|last modified|최종 수정)",
    )
    .unwrap();
    re.is_match(text)
}

/// Whether the text mentions the current or previous calendar year
pub fn mentions_recent_year(text: &str) -> bool {
    let year = chrono::Utc::now().year();
    text.contains(&year.to_string()) || text.contains(&(year - 1).to_string())
}

/// Explicit update-cadence language ("updated weekly", "매주 업데이트")
pub fn has_update_cadence(text: &str) -> bool {
    let re = Regex::new(
        r"(?i)(updated\s+(daily|weekly|monthly|quarterly|regularly)|(daily|weekly|monthly)\s+update|매주|매월|정기적으로 업데이트)",
    )
    .unwrap();
    re.is_match(text)
}

/// Case-study markers
pub fn has_case_study_markers(text: &str) -> bool {
    let re = Regex::new(r"(?i)\b(case study|real[- ]world example|in practice|사례|실제 적용)\b")
        .unwrap();
    re.is_match(text)
}

/// Abbreviation/glossary markers ("stands for", spelled-out acronyms)
pub fn has_glossary_markers(text: &str) -> bool {
    let re = Regex::new(r"(?i)(stands for|short for|glossary|abbreviation|용어 정리|\b[A-Z]{2,6}\s*\([A-Z][a-z]+)")
        .unwrap();
    re.is_match(text)
}

/// Comparison keywords ("vs", "compared to", "차이")
pub fn has_comparison_keywords(text: &str) -> bool {
    let re = Regex::new(r"(?i)\b(vs\.?|versus|compared? (to|with)|comparison|pros and cons|차이|비교)\b")
        .unwrap();
    re.is_match(text)
}

/// Step-by-step phrasing at the text level ("step 1", "first, ... second")
pub fn has_step_pattern(text: &str) -> bool {
    let re = Regex::new(r"(?i)\b(step\s*\d|1\.\s+\w+[^.]{10,}2\.\s+|first,.*second,|단계별|1단계)")
        .unwrap();
    re.is_match(text)
}

/// Methodology language ("we measured", "our methodology")
pub fn has_methodology_language(text: &str) -> bool {
    let re = Regex::new(r"(?i)\b(methodology|we (measured|tested|analy[sz]ed|surveyed)|sample size|측정 방법)\b")
        .unwrap();
    re.is_match(text)
}

/// Certification / credential markers
pub fn has_certification_markers(text: &str) -> bool {
    let re = Regex::new(r"(?i)\b(certified|certification|accredited|ISO \d{4,5}|licensed|자격증|인증)\b")
        .unwrap();
    re.is_match(text)
}
