//! Human-readable dumps of system output, resolved against original text.

use eal_qa::{CharOffsetSpan, OffsetResolver, QaResult, Response, SystemOutput};

/// How a stored CAS compares with the text its offsets resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasCheck {
    /// The stored string equals the resolved text.
    ExactMatch,
    /// The stored string differs; holds the text from the offsets.
    Diverges { from_offsets: String },
}

/// Compare a response's stored CAS with its resolved offsets.
pub fn check_cas(response: &Response, resolver: &OffsetResolver<'_>) -> QaResult<CasCheck> {
    let cas = response.canonical_argument();
    let from_offsets = resolver.resolve(cas.span)?;
    if from_offsets == cas.string.as_str() {
        Ok(CasCheck::ExactMatch)
    } else {
        Ok(CasCheck::Diverges {
            from_offsets: from_offsets.into_owned(),
        })
    }
}

/// A rendered document plus the number of responses whose CAS diverged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDump {
    pub doc_id: String,
    pub text: String,
    pub divergent_cas: usize,
}

/// Render every response of `output` against the document's `original_text`.
///
/// Fails on the first span that does not fit the text.
pub fn dump_responses(output: &SystemOutput, original_text: &str) -> QaResult<DocumentDump> {
    let resolver = OffsetResolver::new(output.doc_id(), original_text);
    let mut text = String::from("\n");
    let mut divergent_cas = 0;
    for response in output.responses() {
        let (rendered, check) = render_response(response, &resolver)?;
        if check != CasCheck::ExactMatch {
            divergent_cas += 1;
        }
        text.push_str(&rendered);
    }
    Ok(DocumentDump {
        doc_id: output.doc_id().to_string(),
        text,
        divergent_cas,
    })
}

fn push_spans(out: &mut String, spans: &[CharOffsetSpan], resolver: &OffsetResolver<'_>) -> QaResult<()> {
    for span in spans {
        out.push_str("\t\t\t");
        out.push_str(&resolver.resolve(*span)?);
    }
    Ok(())
}

/// Render one response as an indented block.
pub fn render_response(
    response: &Response,
    resolver: &OffsetResolver<'_>,
) -> QaResult<(String, CasCheck)> {
    let mut out = format!(
        "\t{}-{}-{}\n",
        response.event_type(),
        response.role(),
        response.realis()
    );

    let check = check_cas(response, resolver)?;
    match &check {
        CasCheck::ExactMatch => {
            out.push_str("\t\tCAS: ");
            out.push_str(&response.canonical_argument().string);
            out.push_str(" [EXACT MATCH WITH TEXT FROM OFFSETS]");
        }
        CasCheck::Diverges { from_offsets } => {
            out.push_str("\t\tCAS: ");
            out.push_str(&response.canonical_argument().string);
            out.push_str(" [TEXT FROM OFFSETS: ");
            out.push_str(from_offsets);
            out.push(']');
        }
    }

    out.push_str("\n\t\tPredicate justification(s): ");
    push_spans(&mut out, response.predicate_justifications(), resolver)?;

    out.push_str("\n\t\tBase filler: ");
    out.push_str(&resolver.resolve(response.base_filler())?);

    if !response.additional_argument_justifications().is_empty() {
        out.push_str("\n\t\tAdditional argument justification(s): ");
        push_spans(
            &mut out,
            response.additional_argument_justifications(),
            resolver,
        )?;
    }

    out.push_str("\n\n");
    Ok((out, check))
}
