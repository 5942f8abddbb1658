//! Submission directives derived from a task resource spec.

use std::fmt;

use bytesize::GIB;

use crate::job::{TaskResourceSpec, format_wall_time};
use crate::sge::templates::quote_path;

/// A single `qsub` option. An empty value marks a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Option flag, including the leading dash.
    pub flag: String,
    /// Option argument; empty for boolean flags.
    pub value: String,
}

impl Directive {
    /// Directive with an argument.
    pub fn new(flag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            value: value.into(),
        }
    }

    /// Boolean directive without an argument.
    pub fn flag(flag: impl Into<String>) -> Self {
        Self::new(flag, String::new())
    }

    /// Whether this directive has no argument.
    pub fn is_flag(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_flag() {
            f.write_str(&self.flag)
        } else {
            write!(f, "{} {}", self.flag, self.value)
        }
    }
}

/// Ordered directives. Grid Engine applies them in sequence, so the order
/// is part of the meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSequence(Vec<Directive>);

impl DirectiveSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directive.
    pub fn push(&mut self, directive: Directive) {
        self.0.push(directive);
    }

    /// Iterate directives in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.0.iter()
    }

    /// Number of directives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flags in order.
    pub fn flags(&self) -> Vec<&str> {
        self.0.iter().map(|d| d.flag.as_str()).collect()
    }

    /// Flatten into command-line tokens; boolean flags contribute one token.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.0.len() * 2);
        for directive in &self.0 {
            tokens.push(directive.flag.clone());
            if !directive.is_flag() {
                tokens.push(directive.value.clone());
            }
        }
        tokens
    }
}

impl<'a> IntoIterator for &'a DirectiveSequence {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build the directive sequence for a task.
///
/// Order: name, log, merged stderr, queue, slots (`-pe` or `-l cpu`),
/// walltime, memory, exported environment. Absent optional fields drop
/// their directive and leave the rest in place.
pub fn build_directives(spec: &TaskResourceSpec) -> DirectiveSequence {
    let mut directives = DirectiveSequence::new();

    directives.push(Directive::new("-N", &spec.job_name));
    directives.push(Directive::new("-o", quote_path(&spec.log_path())));
    directives.push(Directive::new("-j", "y"));

    if let Some(ref queue) = spec.queue {
        directives.push(Directive::new("-q", queue));
    }

    // Struct literals and deserialized specs bypass with_cpus.
    let cpus = spec.cpus.max(1);

    // -pe and -l cpu are mutually exclusive
    if let Some(ref pe) = spec.parallel_environment {
        directives.push(Directive::new("-pe", format!("\"{} {}\"", pe, cpus)));
    } else {
        directives.push(Directive::new("-l", format!("\"cpu={}\"", cpus)));
    }

    if let Some(wall_time) = spec.wall_time {
        directives.push(Directive::new(
            "-l",
            format!("\"walltime={}\"", format_wall_time(wall_time)),
        ));
    }

    if let Some(memory) = spec.memory {
        directives.push(Directive::new(
            "-l",
            format!("\"mem={}G\"", memory.as_u64() / GIB),
        ));
    }

    directives.push(Directive::flag("-V"));

    directives
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bytesize::ByteSize;

    use super::*;

    fn full_spec() -> TaskResourceSpec {
        TaskResourceSpec::new("nf-hello", "/scratch/work/ab/cdef")
            .with_queue("long")
            .with_parallel_environment("smp")
            .with_cpus(4)
            .with_wall_time(Duration::from_secs(26 * 3600 + 5 * 60 + 7))
            .with_memory(ByteSize::gib(8))
    }

    fn rendered(seq: &DirectiveSequence) -> Vec<String> {
        seq.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_full_order() {
        let seq = build_directives(&full_spec());
        assert_eq!(
            rendered(&seq),
            vec![
                "-N nf-hello",
                "-o /scratch/work/ab/cdef/.command.log",
                "-j y",
                "-q long",
                "-pe \"smp 4\"",
                "-l \"walltime=26:05:07\"",
                "-l \"mem=8G\"",
                "-V",
            ]
        );
    }

    #[test]
    fn test_minimal_spec() {
        let spec = TaskResourceSpec::new("job", "/w");
        let seq = build_directives(&spec);
        assert_eq!(
            rendered(&seq),
            vec!["-N job", "-o /w/.command.log", "-j y", "-l \"cpu=1\"", "-V"]
        );
    }

    #[test]
    fn test_cpu_request_without_pe() {
        let spec = TaskResourceSpec::new("job", "/w").with_cpus(16);
        let seq = build_directives(&spec);
        assert!(seq.iter().any(|d| d.value == "\"cpu=16\""));
        assert!(!seq.flags().contains(&"-pe"));
    }

    #[test]
    fn test_pe_replaces_cpu_request() {
        let spec = TaskResourceSpec::new("job", "/w")
            .with_parallel_environment("mpi")
            .with_cpus(2);
        let seq = build_directives(&spec);
        assert!(seq.iter().any(|d| d.flag == "-pe" && d.value == "\"mpi 2\""));
        assert!(!seq.iter().any(|d| d.value.starts_with("\"cpu=")));
    }

    #[test]
    fn test_zero_cpus_requests_one_slot() {
        let spec = TaskResourceSpec {
            cpus: 0,
            ..TaskResourceSpec::new("job", "/w")
        };
        let seq = build_directives(&spec);
        assert!(seq.iter().any(|d| d.value == "\"cpu=1\""));

        let spec = TaskResourceSpec {
            cpus: 0,
            parallel_environment: Some("smp".to_string()),
            ..TaskResourceSpec::new("job", "/w")
        };
        let seq = build_directives(&spec);
        assert!(seq.iter().any(|d| d.flag == "-pe" && d.value == "\"smp 1\""));
    }

    #[test]
    fn test_deserialized_zero_cpus() {
        let spec: TaskResourceSpec =
            serde_json::from_str(r#"{"job_name":"j","work_dir":"/w","cpus":0}"#).unwrap();
        let seq = build_directives(&spec);
        assert_eq!(
            rendered(&seq),
            vec!["-N j", "-o /w/.command.log", "-j y", "-l \"cpu=1\"", "-V"]
        );
    }

    #[test]
    fn test_omitted_queue_keeps_order() {
        let spec = TaskResourceSpec {
            queue: None,
            ..full_spec()
        };
        let seq = build_directives(&spec);
        assert_eq!(seq.flags(), vec!["-N", "-o", "-j", "-pe", "-l", "-l", "-V"]);
    }

    #[test]
    fn test_memory_floors_to_gib() {
        let spec = TaskResourceSpec::new("job", "/w").with_memory(ByteSize::mib(2560));
        let seq = build_directives(&spec);
        assert!(seq.iter().any(|d| d.value == "\"mem=2G\""));

        let spec = TaskResourceSpec::new("job", "/w").with_memory(ByteSize::mib(512));
        let seq = build_directives(&spec);
        assert!(seq.iter().any(|d| d.value == "\"mem=0G\""));
    }

    #[test]
    fn test_log_path_with_blank_is_quoted() {
        let spec = TaskResourceSpec::new("job", "/home/me/my work");
        let seq = build_directives(&spec);
        assert_eq!(seq.iter().nth(1).unwrap().value, "\"/home/me/my work/.command.log\"");
    }

    #[test]
    fn test_to_tokens() {
        let spec = TaskResourceSpec::new("job", "/w");
        let tokens = build_directives(&spec).to_tokens();
        assert_eq!(
            tokens,
            vec!["-N", "job", "-o", "/w/.command.log", "-j", "y", "-l", "\"cpu=1\"", "-V"]
        );
    }
}
