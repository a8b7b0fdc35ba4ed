// Prints the CloudFormation template for the corrector stack

use anyhow::Context;
use spellcheck::infra::{StackConfig, synthesize};

fn main() -> anyhow::Result<()> {
    let config = StackConfig::from_env().context("invalid stack configuration")?;
    let template = synthesize(&config);
    let rendered =
        serde_json::to_string_pretty(&template).context("failed to render template")?;
    println!("{rendered}");
    Ok(())
}
