use bambam_resilience::app::ResilienceApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = ResilienceApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
