//! Render a masking table for display.

use pulldown_cmark::{html, Alignment, CowStr, Event, Tag};

use crate::pipeline::prompts::TABLE_COLUMNS;
use crate::types::record::MaskingTable;

/// Render as a GFM table with the same columns the model is asked for.
///
/// Pipes inside cells are escaped so a cell can't split into two columns.
pub fn render_markdown(table: &MaskingTable) -> String {
    let mut out = format!(
        "| {} | {} | {} |\n|---------------|----------------|-----------------------|\n",
        TABLE_COLUMNS[0], TABLE_COLUMNS[1], TABLE_COLUMNS[2]
    );

    for record in table {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(&record.original),
            escape_cell(&record.reason),
            escape_cell(&record.replacement)
        ));
    }

    out
}

/// Render as an HTML `<table>`; cell text is HTML-escaped.
///
/// The table is emitted as events directly, so cell values are never parsed
/// as markdown: links, images and emphasis in a cell come out as literal
/// text.
pub fn render_html(table: &MaskingTable) -> String {
    let mut events: Vec<Event<'_>> = vec![
        Event::Start(Tag::Table(vec![Alignment::None; TABLE_COLUMNS.len()])),
        Event::Start(Tag::TableHead),
    ];
    for column in TABLE_COLUMNS {
        push_cell(&mut events, column);
    }
    events.push(Event::End(Tag::TableHead));

    for record in table {
        events.push(Event::Start(Tag::TableRow));
        push_cell(&mut events, &record.original);
        push_cell(&mut events, &record.reason);
        push_cell(&mut events, &record.replacement);
        events.push(Event::End(Tag::TableRow));
    }

    events.push(Event::End(Tag::Table(vec![Alignment::None; TABLE_COLUMNS.len()])));

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

fn push_cell<'a>(events: &mut Vec<Event<'a>>, value: &'a str) {
    events.push(Event::Start(Tag::TableCell));
    if !value.is_empty() {
        events.push(Event::Text(CowStr::Borrowed(value)));
    }
    events.push(Event::End(Tag::TableCell));
}

fn escape_cell(value: &str) -> String {
    value.replace('|', r"\|").replace(['\r', '\n'], " ")
}
