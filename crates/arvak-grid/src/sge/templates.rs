//! Grid Engine batch script rendering.

use std::path::Path;

use crate::sge::directives::DirectiveSequence;

/// Prefix Grid Engine recognises for embedded `qsub` options.
pub const DIRECTIVE_MARKER: &str = "#$";

/// Quote a path for use in a directive.
///
/// The directive lexer has no escape syntax, so a path is wrapped in double
/// quotes only when it contains a blank, and nothing inside it is escaped.
/// Non-UTF-8 bytes are replaced lossily; callers reject such paths with
/// [`TaskResourceSpec::validate`](crate::job::TaskResourceSpec::validate).
pub fn quote_path(path: &Path) -> String {
    quote_str(&path.to_string_lossy())
}

/// String form of [`quote_path`].
pub fn quote_str(s: &str) -> String {
    if s.contains(' ') {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}

/// Render directives as `#$` header lines, one per directive.
///
/// Non-blank cluster options are appended verbatim as one extra line.
pub fn render_headers(directives: &DirectiveSequence, cluster_options: Option<&str>) -> String {
    let mut headers = String::new();

    for directive in directives {
        headers.push_str(&format!("{} {}\n", DIRECTIVE_MARKER, directive));
    }

    if let Some(options) = cluster_options.map(str::trim).filter(|o| !o.is_empty()) {
        headers.push_str(&format!("{} {}\n", DIRECTIVE_MARKER, options));
    }

    headers
}

/// Assemble a batch script from rendered headers and a body.
pub fn generate_script(headers: &str, body: &str) -> String {
    let mut script = String::new();

    script.push_str("#!/bin/bash\n");
    script.push_str(headers);
    script.push('\n');
    script.push_str(body);
    if !body.ends_with('\n') {
        script.push('\n');
    }

    script
}

/// Make a job name acceptable to Grid Engine.
///
/// Whitespace and `/ : @ \ * ?` are replaced with `_`; a leading digit gets
/// a `job-` prefix.
pub fn sanitize_job_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '/' | ':' | '@' | '\\' | '*' | '?') {
                '_'
            } else {
                c
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        format!("job-{cleaned}")
    } else {
        cleaned
    }
}
