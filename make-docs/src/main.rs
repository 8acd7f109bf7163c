//! Regenerate `src/scripts.rs` from the checks' `--help` output
//!
//! Run from the repo root after `cargo build`:
//!
//! ```plain
//! cargo run -p make-docs > src/scripts.rs
//! ```

use std::process::Command;

struct Check {
    name: &'static str,
    about: &'static str,
}

const REQUIRES_CEPH: &str = "Requires the `ceph` command and a keyring that lets it talk to the cluster.";

fn main() {
    let preamble = "Documentation about the various scripts contained herein\n";

    let checks = [
        Check {
            name: "check-ceph-df",
            about: REQUIRES_CEPH,
        },
        Check {
            name: "check-ceph-health",
            about: REQUIRES_CEPH,
        },
    ];

    let mut out: String = cp(preamble.split('\n'));
    out.push('\n');
    out.push_str(&cp(checks.iter().map(|c| format!("- [{0}](#{0})", c.name))));
    out.push('\n');
    for check in &checks {
        out.push_str(&format!(
            "\
//!
//! # {0}
//!
//! {1}
//!
//! ```plain
//! $ {0} --help
",
            check.name, check.about
        ));
        out.push_str(&cp(help_for(check.name).trim_end().split('\n')));
        out.push_str("\n//! ```\n");
    }
    print!("{}", out);
}

/// The `--help` text of a freshly built check
fn help_for(name: &str) -> String {
    let output = Command::new(format!("target/debug/{}", name))
        .arg("--help")
        .env("TERM", "dumb")
        .output()
        .unwrap_or_else(|e| panic!("Couldn't execute command {}: {}", name, e));
    String::from_utf8(output.stdout)
        .unwrap_or_else(|e| panic!("Couldn't convert command {} help to utf8: {}", name, e))
}

/// Comment each line in the iterator
fn cp<S: AsRef<str>, I: Iterator<Item = S>>(s: I) -> String {
    s.map(|s| format!("//! {}", s.as_ref()))
        .map(|s| s.trim().into())
        .collect::<Vec<String>>()
        .join("\n")
}
