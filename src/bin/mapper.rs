use std::process;

use clap::Parser;
use mapper::{cli::Mapper, logger};

fn main() {
    let app = Mapper::parse();
    logger::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    let result = app.run();
    process::exit(app.report(result))
}
