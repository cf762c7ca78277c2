use crate::errors::SyntaxError;
use crate::utils::Span;

fn get_line_starts(source: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

struct SourceLocation<'a> {
    line: &'a str,
    underline: String,
    start_line: usize,
    start_col: usize,
}

impl<'a> SourceLocation<'a> {
    fn new(source: &'a str, span: &Span) -> Self {
        let line_starts = get_line_starts(source);
        let start_line = span.start_line;
        let start_col = span.start_col;
        let line = if start_line == line_starts.len() {
            &source[line_starts[start_line - 1]..]
        } else {
            &source[line_starts[start_line - 1]..line_starts[start_line]]
        }
        .trim_end_matches('\n');

        let mut underline = String::with_capacity(line.len() + 1);
        for c in line.chars().take(start_col) {
            match c {
                '\t' => underline.push('\t'),
                _ => underline.push(' '),
            }
        }
        let width = if span.end_col > span.start_col {
            span.end_col - span.start_col
        } else {
            1
        };
        for _ in 0..width {
            underline.push('^');
        }

        Self {
            line,
            underline,
            start_line,
            start_col,
        }
    }
}

pub(crate) fn generate_report(error: &SyntaxError) -> String {
    let loc = SourceLocation::new(&error.source, &error.span);
    let line_num_width = loc.start_line.to_string().len();
    let padding = " ".repeat(line_num_width);

    format!(
        "error: {}\n\
         {padding}--> {}:{}:{}\n\
         {padding} |\n\
         {} | {}\n\
         {padding} | {}",
        error.message,
        error.filename,
        loc.start_line,
        loc.start_col,
        loc.start_line,
        loc.line,
        loc.underline,
    )
}
