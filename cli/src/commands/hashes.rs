use color_eyre::eyre::Result;

use crate::cli::ConfigArgs;
use crate::config_file::load_config;
use crate::output::{HashesOutput, SafeHashesOutput};

pub async fn run(args: ConfigArgs, json: bool) -> Result<()> {
    let config = load_config(&args.path, &args.network)?;

    let output = HashesOutput {
        safes: config
            .safes
            .iter()
            .enumerate()
            .map(|(index, safe)| SafeHashesOutput::new(index, safe))
            .collect(),
    };
    output.print(json);

    Ok(())
}
