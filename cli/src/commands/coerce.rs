use color_eyre::eyre::Result;

use crate::cli::ConfigArgs;
use crate::config_file::load_config;
use crate::output::print_config;

pub async fn run(args: ConfigArgs, _json: bool) -> Result<()> {
    let config = load_config(&args.path, &args.network)?;
    print_config(&config);
    Ok(())
}
