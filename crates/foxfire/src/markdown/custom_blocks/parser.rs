use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::markdown::custom_blocks::{placeholder, CustomBlockCall};

#[derive(Parser)]
#[grammar = "markdown/custom_blocks/grammar.pest"]
struct CustomBlockParser;

/// Splits the custom blocks out of a Markdown document.
///
/// Each block is replaced with a placeholder paragraph that is swapped for
/// the rendered block once the surrounding document has been rendered.
pub fn parse_document(
    document: &str,
) -> Result<(String, Vec<CustomBlockCall>), Box<pest::error::Error<Rule>>> {
    let mut pairs = CustomBlockParser::parse(Rule::document, document).map_err(Box::new)?;

    let mut calls = Vec::new();
    let mut output = String::with_capacity(document.len());

    let Some(document) = pairs.next() else {
        return Ok((output, calls));
    };

    for pair in document.into_inner() {
        match pair.as_rule() {
            Rule::text_line | Rule::fenced_code => output.push_str(pair.as_str()),
            Rule::custom_block => {
                let index = calls.len();
                calls.push(parse_custom_block(pair));

                output.push('\n');
                output.push_str(&placeholder(index));
                output.push_str("\n\n");
            }
            Rule::EOI => (),
            rule => unreachable!("unexpected rule in document: {rule:?}"),
        }
    }

    Ok((output, calls))
}

fn parse_custom_block(pair: Pair<Rule>) -> CustomBlockCall {
    let mut name = String::new();
    let mut title = None;
    let mut lines = Vec::new();

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::block_open => {
                for pair in pair.into_inner() {
                    match pair.as_rule() {
                        Rule::block_name => name = pair.as_str().to_string(),
                        Rule::block_title => title = Some(pair.as_str().trim().to_string()),
                        rule => unreachable!("unexpected rule in block header: {rule:?}"),
                    }
                }
            }
            Rule::block_line => {
                let text = pair
                    .into_inner()
                    .next()
                    .map(|text| text.as_str())
                    .unwrap_or_default();

                lines.push(text.strip_prefix(' ').unwrap_or(text));
            }
            rule => unreachable!("unexpected rule in custom block: {rule:?}"),
        }
    }

    let mut body = lines.join("\n");
    body.push('\n');

    CustomBlockCall { name, title, body }
}
