//! Documentation about the various scripts contained herein
//!
//! - [check-ceph-df](#check-ceph-df)
//! - [check-ceph-health](#check-ceph-health)
//!
//! # check-ceph-df
//!
//! Requires the `ceph` command and a keyring that lets it talk to the cluster.
//!
//! ```plain
//! $ check-ceph-df --help
//! check-ceph-df (part of ceph-plugins) 0.1.0
//! Brandon W Maister <quodlibetor@gmail.com>
//! Check the available capacity of a ceph cluster.
//!
//! Runs `ceph df --format=json` and compares the available space against percentages of the total space. The check goes
//! critical when available space is at or above <crit_percent>% of the total, warns when it is at or above
//! <warn_percent>%, and is ok otherwise.
//!
//! If ceph can't be run, or its output doesn't add up, this warns.
//!
//! USAGE:
//!     check-ceph-df [OPTIONS] [ARGS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!         --ceph <ceph>    The ceph command to run [default: ceph]
//!
//! ARGS:
//!     <warn_percent>    Percent of total space to warn at [default: 85]
//!     <crit_percent>    Percent of total space to go critical at [default: 98]
//! ```
//!
//! # check-ceph-health
//!
//! Requires the `ceph` command and a keyring that lets it talk to the cluster.
//!
//! ```plain
//! $ check-ceph-health --help
//! check-ceph-health (part of ceph-plugins) 0.1.0
//! Brandon W Maister <quodlibetor@gmail.com>
//! Check the health of a ceph cluster.
//!
//! Runs `ceph health` and maps HEALTH_OK, HEALTH_WARN and HEALTH_ERR to ok, warning and critical. Anything else,
//! including not being able to run ceph, is unknown.
//!
//! USAGE:
//!     check-ceph-health [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! OPTIONS:
//!         --ceph <ceph>    The ceph command to run [default: ceph]
//! ```
