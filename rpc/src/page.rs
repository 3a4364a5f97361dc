//! HTML page: submission form plus every block as pretty-printed JSON.

use std::fmt::Write;

use pactchain_types::Block;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Agreement Ledger</title>
    <style>
        body { font-family: Arial, sans-serif; background: #f4f4f4; padding: 40px; }
        form { background: white; padding: 20px; border-radius: 8px; max-width: 600px; margin-bottom: 40px; }
        input, textarea, button { padding: 10px; width: 100%; margin-top: 10px; box-sizing: border-box; }
        button { background: #007bff; color: white; border: none; cursor: pointer; border-radius: 4px; }
        .block { background: white; padding: 15px; margin-bottom: 10px; border-left: 5px solid #007bff; border-radius: 4px; }
        pre { white-space: pre-wrap; word-wrap: break-word; }
    </style>
</head>
<body>
    <h1>Legal Agreement Ledger</h1>

    <form action="/add_agreement" method="post">
        <input type="text" name="party_a" placeholder="Party A Name" required>
        <input type="text" name="party_b" placeholder="Party B Name" required>
        <input type="text" name="agreement_title" placeholder="Agreement Title" required>
        <textarea name="terms" placeholder="Agreement Terms" rows="4" required></textarea>
        <input type="date" name="date_signed" required>
        <button type="submit">Submit Agreement</button>
    </form>

    <h2>Chain</h2>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// Render the page for `chain`, oldest block first.
pub fn render_page(chain: &[Block]) -> String {
    let mut html = String::with_capacity(HEAD.len() + chain.len() * 512);
    html.push_str(HEAD);
    for block in chain {
        let json = serde_json::to_string_pretty(block).unwrap_or_default();
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "    <div class=\"block\">\n        <pre>{}</pre>\n    </div>\n",
            escape_html(&json)
        );
    }
    html.push_str(TAIL);
    html
}

/// Escape text for use inside an HTML element body.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
