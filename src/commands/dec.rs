use anyhow::Result;

use crate::args::DecArgs;
use crate::core::{SpaceMode, decode};
use crate::input::read_payload;
use crate::views::{DecodeView, print_json};

pub fn run(args: &DecArgs, porcelain: bool) -> Result<()> {
    let space = if args.no_plus {
        SpaceMode::Percent20
    } else {
        SpaceMode::Plus
    };
    let input = read_payload(args.payload.clone())?;
    let output = decode(&input, space);

    if porcelain {
        return print_json(&DecodeView { input, output });
    }
    println!("{output}");
    Ok(())
}
