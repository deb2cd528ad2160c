//! Plain-text QA report for one document.

use std::fmt::Write;

use eal_qa::{AnswerKey, Response};
use unicode_width::UnicodeWidthStr;

use crate::warning::WarningMap;

const COLUMN_GAP: usize = 2;

/// Render every response of `answer_key` with its warnings.
///
/// Responses are listed in report order (event type, role, base filler, CAS),
/// with the CAS span aligned in a column and one indented line per warning.
pub fn render_document(answer_key: &AnswerKey, warnings: &WarningMap) -> String {
    let mut responses: Vec<&Response> = answer_key.responses().iter().collect();
    responses.sort_by(|a, b| Response::report_order(a, b));

    let flagged = responses.iter().filter(|r| warnings.contains(r)).count();
    let mut output = String::new();
    writeln!(
        output,
        "Document {}: {} responses, {} with warnings",
        answer_key.doc_id(),
        responses.len(),
        flagged
    )
    .unwrap();

    let labels: Vec<String> = responses.iter().map(|r| r.readable_trfr()).collect();
    let width = labels
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);

    if !responses.is_empty() {
        writeln!(output).unwrap();
    }
    for (response, label) in responses.iter().zip(&labels) {
        let padding = width - UnicodeWidthStr::width(label.as_str()) + COLUMN_GAP;
        writeln!(
            output,
            "{}{}{}",
            label,
            " ".repeat(padding),
            response.canonical_argument().span
        )
        .unwrap();
        for warning in warnings.get(response) {
            writeln!(output, "    ! {}", warning).unwrap();
        }
    }

    output
}

/// One-line summary across documents.
pub fn render_summary(documents: usize, responses: usize, flagged: usize, warnings: usize) -> String {
    format!(
        "{} documents, {} responses, {} flagged responses, {} warnings",
        documents, responses, flagged, warnings
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::RuleSet;
    use crate::rules::tests::{answer_key, response};
    use crate::rules::ConjunctionRule;

    #[test]
    fn renders_sorted_aligned_report() {
        let key = answer_key(vec![
            response("Life.Die", "Victim", "Zoë", 30, 32),
            response("Conflict.Attack", "Attacker", "rebels and soldiers", 0, 18),
            response("Life.Die", "Place", "北京", 40, 41),
        ]);
        let warnings = RuleSet::new(vec![ConjunctionRule::default().into()]).generate_warnings(&key);

        insta::assert_snapshot!(render_document(&key, &warnings), @r###"
        Document doc1: 3 responses, 1 with warnings

        Conflict.Attack-Attacker:Actual - rebels and soldiers  [0-18]
            ! Conjunction: CAS "rebels and soldiers" joins phrases with "and"; it may cover more than one entity
        Life.Die-Place:Actual - 北京                           [40-41]
        Life.Die-Victim:Actual - Zoë                           [30-32]
        "###);
    }

    #[test]
    fn empty_document_renders_header_only() {
        let key = answer_key(vec![]);
        assert_eq!(
            render_document(&key, &WarningMap::new()),
            "Document doc1: 0 responses, 0 with warnings\n"
        );
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            render_summary(2, 10, 3, 4),
            "2 documents, 10 responses, 3 flagged responses, 4 warnings"
        );
    }
}
