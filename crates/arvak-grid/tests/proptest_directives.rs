//! Property-based tests for directive construction and path quoting.

use std::path::PathBuf;
use std::time::Duration;

use arvak_grid::sge::{build_directives, templates::quote_str};
use arvak_grid::TaskResourceSpec;
use bytesize::ByteSize;
use proptest::prelude::*;

/// Generate a resource spec with any combination of optional fields.
fn arb_spec() -> impl Strategy<Value = TaskResourceSpec> {
    (
        "[a-z][a-z0-9_-]{0,15}",
        "(/[a-z0-9 ._-]{1,8}){1,4}",
        prop::option::of("[a-z]{1,6}\\.q"),
        prop::option::of("(smp|mpi|orte)"),
        0_u32..=128,
        prop::option::of(0_u64..=500_000),
        prop::option::of(0_u64..=(1 << 40)),
    )
        .prop_map(|(name, dir, queue, pe, cpus, secs, mem)| {
            let mut spec = TaskResourceSpec::new(name, PathBuf::from(dir));
            spec.cpus = cpus;
            spec.queue = queue;
            spec.parallel_environment = pe;
            spec.wall_time = secs.map(Duration::from_secs);
            spec.memory = mem.map(ByteSize::b);
            spec
        })
}

/// Rank of each directive kind in the required order.
fn rank(flag: &str, value: &str) -> u8 {
    match (flag, value) {
        ("-N", _) => 0,
        ("-o", _) => 1,
        ("-j", _) => 2,
        ("-q", _) => 3,
        ("-pe", _) => 4,
        ("-l", v) if v.starts_with("\"cpu=") => 4,
        ("-l", v) if v.starts_with("\"walltime=") => 5,
        ("-l", v) if v.starts_with("\"mem=") => 6,
        ("-V", _) => 7,
        other => panic!("unexpected directive {other:?}"),
    }
}

proptest! {
    #[test]
    fn directives_are_strictly_ordered(spec in arb_spec()) {
        let seq = build_directives(&spec);
        let ranks: Vec<u8> = seq.iter().map(|d| rank(&d.flag, &d.value)).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]), "{:?}", ranks);
    }

    #[test]
    fn directive_count_follows_optional_fields(spec in arb_spec()) {
        let seq = build_directives(&spec);
        let expected = 5
            + usize::from(spec.queue.is_some())
            + usize::from(spec.wall_time.is_some())
            + usize::from(spec.memory.is_some());
        prop_assert_eq!(seq.len(), expected);
    }

    #[test]
    fn pe_and_cpu_request_are_exclusive(spec in arb_spec()) {
        let seq = build_directives(&spec);
        let has_pe = seq.iter().any(|d| d.flag == "-pe");
        let has_cpu = seq.iter().any(|d| d.value.starts_with("\"cpu="));
        prop_assert!(has_pe != has_cpu);
        prop_assert_eq!(has_pe, spec.parallel_environment.is_some());
    }

    #[test]
    fn slot_request_is_positive(spec in arb_spec()) {
        let seq = build_directives(&spec);
        let slots: u32 = seq
            .iter()
            .find_map(|d| match d.flag.as_str() {
                "-pe" => d.value.trim_matches('"').rsplit(' ').next().map(str::to_string),
                "-l" => d.value.trim_matches('"').strip_prefix("cpu=").map(str::to_string),
                _ => None,
            })
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);
        prop_assert_eq!(slots, spec.cpus.max(1));
    }

    #[test]
    fn quoting_is_idempotent_without_blanks(s in "[^ ]{0,40}") {
        let once = quote_str(&s);
        prop_assert_eq!(&once, &s);
        prop_assert_eq!(quote_str(&once), once);
    }

    #[test]
    fn quoting_wraps_exactly_once_with_blanks(a in "[^ ]{0,20}", b in "[^ ]{0,20}") {
        let s = format!("{a} {b}");
        let quoted = quote_str(&s);
        prop_assert_eq!(quoted, format!("\"{s}\""));
    }
}
