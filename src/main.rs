mod cli;

use cli::commands::Command;
use structopt::StructOpt;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cli::Tabletop::from_args().execute();
}
