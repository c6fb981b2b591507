use clap::Parser;
use seqmutate::{run_seqmutate, Args};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run_seqmutate(args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
