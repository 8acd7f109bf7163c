//! Check the available capacity of a ceph cluster

use structopt::clap::AppSettings;
use structopt::StructOpt;

use ceph_plugins::ceph::df::{self, Thresholds};
use ceph_plugins::ceph::Ceph;
use ceph_plugins::logging;

/// Check the available capacity of a ceph cluster.
///
/// Runs `ceph df --format=json` and compares the available space against
/// percentages of the total space. The check goes critical when available
/// space is at or above <crit_percent>% of the total, warns when it is at or
/// above <warn_percent>%, and is ok otherwise.
///
/// If ceph can't be run, or its output doesn't add up, this warns.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-ceph-df (part of ceph-plugins)",
    setting = AppSettings::ColoredHelp,
    setting = AppSettings::AllowNegativeNumbers
)]
struct Args {
    #[structopt(
        name = "warn_percent",
        help = "Percent of total space to warn at",
        default_value = "85"
    )]
    warn: f64,
    #[structopt(
        name = "crit_percent",
        help = "Percent of total space to go critical at",
        default_value = "98"
    )]
    crit: f64,
    #[structopt(
        long = "ceph",
        help = "The ceph command to run",
        default_value = "ceph"
    )]
    ceph: String,
}

impl Args {
    fn thresholds(&self) -> Thresholds {
        Thresholds {
            warn: self.warn,
            crit: self.crit,
        }
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    logging::init();
    let args = Args::from_args();
    let (status, message) = df::check(&Ceph::at(&args.ceph), &args.thresholds());
    println!("{}", message);
    status.exit();
}
