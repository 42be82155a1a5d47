use anyhow::Result;

use crate::args::EncArgs;
use crate::core::encode_value;
use crate::input::read_payload;
use crate::views::{EncodeView, print_json};

pub fn run(args: &EncArgs, porcelain: bool) -> Result<()> {
    let opts = args.flags.to_options();
    tracing::debug!(safe = opts.safe.as_str(), space = ?opts.space, "encoding payload");
    let input = read_payload(args.payload.clone())?;
    let output = encode_value(&input, &opts);

    if porcelain {
        return print_json(&EncodeView { input, output });
    }
    println!("{output}");
    Ok(())
}
