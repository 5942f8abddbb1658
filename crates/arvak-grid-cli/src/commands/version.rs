//! Version command implementation.

use console::style;

use arvak_grid::sge::STATUS_CODES;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - Grid Engine submission and status translation",
        style("Arvak Grid").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Commands:");
    println!("  qsub   submit (-terse <script> or - for piped scripts)");
    println!("  qstat  queue listing ({} known state codes)", STATUS_CODES.len());
    println!("  qdel   job removal");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/arvak").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
