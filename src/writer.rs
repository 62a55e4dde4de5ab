use crate::{error::ConvertError, generator::Output};

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

/// Create or truncate `path` and write the output's fragments in order.
pub fn write(path: &Path, output: &Output) -> Result<(), ConvertError> {
    let to_error = |source| ConvertError::Write {
        path: path.to_owned(),
        source,
    };

    let mut file = BufWriter::new(File::create(path).map_err(to_error)?);

    for fragment in output.fragments() {
        file.write_all(fragment.as_bytes()).map_err(to_error)?;
    }
    file.flush().map_err(to_error)?;

    debug!("Wrote {}", path.display());

    Ok(())
}
