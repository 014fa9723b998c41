use alloy::primitives::Bytes;
use color_eyre::eyre::{eyre, Result};
use safesnap::{selector_of, SignatureDirectory};

use crate::cli::SignatureArgs;
use crate::output::SignatureOutput;

pub async fn run(args: SignatureArgs, json: bool) -> Result<()> {
    let data: Bytes = args
        .data
        .parse()
        .map_err(|e| eyre!("Invalid hex data '{}': {}", args.data, e))?;
    let selector = selector_of(&data).ok_or_else(|| eyre!("Call data is shorter than a selector"))?;

    let directory = SignatureDirectory::with_base_url(&args.directory_url)?;
    let signatures = directory.text_signatures(selector).await?;

    let output = SignatureOutput {
        selector,
        signatures,
    };
    output.print(json);

    Ok(())
}
