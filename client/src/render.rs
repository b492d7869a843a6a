use crate::models::QueryResponse;

/// What the response area shows after a query.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseFragment {
    Answer(QueryResponse),
    Error(String),
}

impl ResponseFragment {
    pub fn to_html(&self) -> String {
        match self {
            ResponseFragment::Answer(response) => answer_html(response),
            ResponseFragment::Error(message) => {
                format!(r#"<div class="error">Error: {}</div>"#, html_escape(message))
            }
        }
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        match self {
            ResponseFragment::Answer(response) => {
                let mut text = format!(
                    "Answer:\n{}\n\nSources from {}:\n",
                    response.answer, response.pdf_name
                );
                for source in &response.sources {
                    text.push_str(&format!("\n  > {}\n", source.trim()));
                }
                text
            }
            ResponseFragment::Error(message) => format!("Error: {}", message),
        }
    }
}

fn answer_html(response: &QueryResponse) -> String {
    let sources: String = response
        .sources
        .iter()
        .map(|source| format!(r#"<div class="source-text">{}</div>"#, html_escape(source)))
        .collect();

    format!(
        "<h3>Answer:</h3><p>{}</p><h4>Sources from {}:</h4>{}",
        html_escape(&response.answer),
        html_escape(&response.pdf_name),
        sources
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
