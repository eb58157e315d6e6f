//! Pipe-table pre-processing
//!
//! The markdown renderer runs without table support, so GitHub-style pipe
//! tables are rewritten into literal HTML before rendering. Detection is a
//! line heuristic, not a table grammar: a `|` line directly followed by a line
//! containing `---` opens a table, and every following `|` line without `---`
//! is a body row. A setext heading underline or a thematic break placed under a
//! `|` line is therefore also read as a table. Fenced code blocks are not
//! tracked, so a pipe table shown inside one is rewritten as well.

/// Rewrite pipe tables in `markdown` into `<table>` HTML
pub fn convert_tables(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if is_table_header(&lines, i) {
            let mut table = String::from("<table>\n<thead>\n<tr>\n");
            for cell in split_cells(line) {
                table.push_str(&format!("<th>{}</th>\n", cell));
            }
            table.push_str("</tr>\n</thead>\n<tbody>\n");

            // Skip header and separator
            i += 2;
            while i < lines.len() && is_body_row(lines[i]) {
                table.push_str("<tr>\n");
                for cell in split_cells(lines[i]) {
                    table.push_str(&format!("<td>{}</td>\n", cell));
                }
                table.push_str("</tr>\n");
                i += 1;
            }

            table.push_str("</tbody>\n</table>");
            result.push(table);
            continue;
        }

        result.push(line.to_string());
        i += 1;
    }

    result.join("\n")
}

fn is_table_header(lines: &[&str], i: usize) -> bool {
    lines[i].contains('|') && lines.get(i + 1).is_some_and(|next| next.contains("---"))
}

fn is_body_row(line: &str) -> bool {
    line.contains('|') && !line.contains("---")
}

/// Split a row on `|`, dropping the empty fragments left by outer pipes
fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split('|').map(str::trim).filter(|cell| !cell.is_empty())
}
