use color_eyre::eyre::Result;
use safesnap::{is_valid_input, validate_safe_data};

use crate::cli::ConfigArgs;
use crate::config_file::load_config;
use crate::output::{SafeValidity, ValidationOutput};

pub async fn run(args: ConfigArgs, json: bool) -> Result<()> {
    let config = load_config(&args.path, &args.network)?;

    let safes = config
        .safes
        .iter()
        .enumerate()
        .map(|(index, safe)| SafeValidity::new(index, safe, validate_safe_data(safe)))
        .collect();

    let output = ValidationOutput {
        valid: is_valid_input(&config),
        safes,
    };
    output.print(json);

    Ok(())
}
