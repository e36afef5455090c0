use std::path::Path;

use crate::{convert::make_json, error, success, utils};

pub fn convert(input: &Path, output: &Path) {
    let pb = utils::spinner(format!("Converting {}...", input.display()));
    let result = make_json(input, output);
    pb.finish_and_clear();

    match result {
        Ok(count) => success!("Wrote {} records to {}", count, output.display()),
        Err(e) => error!("Cannot convert {}. Err: {}", input.display(), e),
    }
}
