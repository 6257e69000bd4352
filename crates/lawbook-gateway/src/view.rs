//! HTML pages.

use lawbook_core::Category;

/// Render the "Add Law" page, with `error` shown above the form when present.
pub fn render_form_page(action: &str, error: Option<&str>) -> String {
    let error_html = error
        .map(|message| format!("  <p class=\"error\">{}</p>\n", escape_html(message)))
        .unwrap_or_default();

    let options: String = Category::ALL
        .iter()
        .map(|category| {
            let name = escape_html(category.as_str());
            format!("      <option value=\"{name}\">{name}</option>\n")
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Add Law</title>
</head>
<body>
  <h1>Add a New Law</h1>
{error_html}  <form method="POST" action="{action}">
    <label for="law_text">Law Text:</label>
    <textarea name="law_text" id="law_text" rows="4" cols="50" required></textarea><br><br>

    <label for="category">Category:</label>
    <select name="category" id="category" required>
{options}    </select><br><br>

    <input type="submit" value="Add Law">
  </form>
</body>
</html>
"#,
        action = escape_html(action),
    )
}

/// Render the page shown after a law was added.
pub fn render_success_page(form_path: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Law Added</title>
</head>
<body>
  <h1>Law Added</h1>
  <p>The law was added successfully.</p>
  <p><a href="{form_path}">Add another law</a></p>
</body>
</html>
"#,
        form_path = escape_html(form_path),
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
