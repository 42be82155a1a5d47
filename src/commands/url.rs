use anyhow::Result;

use crate::args::UrlArgs;
use crate::core::encode_value;
use crate::input::read_payload;
use crate::util::url::build_query_url;
use crate::views::{UrlView, print_json};

pub fn run(args: &UrlArgs, porcelain: bool) -> Result<()> {
    let opts = args.flags.to_options();
    tracing::debug!(safe = opts.safe.as_str(), space = ?opts.space, "encoding url parameter");
    let payload = read_payload(args.payload.clone())?;
    let value = encode_value(&payload, &opts);
    let url = build_query_url(&args.base_url, &args.param, &value);

    if porcelain {
        return print_json(&UrlView {
            base_url: args.base_url.clone(),
            param: args.param.clone(),
            value,
            url,
        });
    }
    println!("{url}");
    Ok(())
}
