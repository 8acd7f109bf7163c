//! Check the health of a ceph cluster

use structopt::clap::AppSettings;
use structopt::StructOpt;

use ceph_plugins::ceph::{health, Ceph};
use ceph_plugins::logging;

/// Check the health of a ceph cluster.
///
/// Runs `ceph health` and maps HEALTH_OK, HEALTH_WARN and HEALTH_ERR to ok,
/// warning and critical. Anything else, including not being able to run ceph,
/// is unknown.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-ceph-health (part of ceph-plugins)",
    setting = AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(
        long = "ceph",
        help = "The ceph command to run",
        default_value = "ceph"
    )]
    ceph: String,
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    logging::init();
    let args = Args::from_args();
    let (status, message) = health::check(&Ceph::at(&args.ceph));
    println!("{}", message);
    status.exit();
}
