//! HTML page template

/// Delimiter placed between consecutive rendered records.
pub const HR_SEPARATOR: &str = "\n<hr>\n";

/// Page title and heading.
pub const REPORT_TITLE: &str = "Q&A Summary";

const STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            margin: 40px;
            background-color: #f9f9f9;
            color: #333;
        }
        h1 {
            text-align: center;
            color: #2c3e50;
        }
        table {
            border-collapse: collapse;
            width: 90%;
            max-width: 800px;
            margin: 25px auto;
            box-shadow: 0 4px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
            overflow: hidden;
        }
        th, td {
            border: 1px solid #ddd;
            text-align: left;
            padding: 14px;
        }
        th {
            background-color: #4CAF50;
            color: white;
        }
        tr:nth-child(even) {
            background-color: #f2f2f2;
        }
        hr {
            border: 0;
            height: 1px;
            background: #ccc;
            margin: 40px auto;
            width: 90%;
        }"#;

/// Join already rendered record fragments, in order, with [`HR_SEPARATOR`].
///
/// Each record is rendered on its own, so an unbalanced construct in one
/// record (an unterminated code fence) stays inside that record.
pub fn join_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .map(|f| f.as_ref().trim_end().to_string())
        .collect::<Vec<_>>()
        .join(HR_SEPARATOR)
}

/// The fixed standalone page that hosts the rendered report body.
pub struct ReportPage;

impl ReportPage {
    /// Wrap an HTML fragment in the page template.
    pub fn wrap(body_html: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{style}
    </style>
</head>
<body>
    <h1>{title}</h1>
{body}
</body>
</html>
"#,
            title = html_escape(REPORT_TITLE),
            style = STYLE,
            body = body_html
        )
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_fragment_has_no_separator() {
        assert_eq!(join_fragments(["<p>March 1</p>\n"]), "<p>March 1</p>");
    }

    #[test]
    fn test_fragments_separated_in_order() {
        let html = join_fragments(vec!["<p>a</p>\n", "<p>b</p>\n", "<p>c</p>\n"]);
        assert_eq!(html, "<p>a</p>\n<hr>\n<p>b</p>\n<hr>\n<p>c</p>");
        assert_eq!(html.matches("<hr>").count(), 2);
    }

    #[test]
    fn test_page_has_title_heading_and_body() {
        let page = ReportPage::wrap("<p>hello</p>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Q&amp;A Summary</title>"));
        assert!(page.contains("<h1>Q&amp;A Summary</h1>"));
        assert!(page.contains("<p>hello</p>"));
        assert_eq!(page.matches("<h1>").count(), 1);
        assert!(!page.contains("<hr>"));
    }
}
