pub mod interface;
pub mod literal;

use crate::{dataset::Dataset, error::ConvertError};

use tracing::debug;

/// Name of the generated interface.
pub const TYPE_NAME: &str = "DataRow";

/// Name of the generated array constant.
pub const BINDING: &str = "data";

/// The two pieces of a generated TypeScript file.
#[derive(Debug)]
pub struct Output {
    pub declaration: String,
    pub literal: String,
}

impl Output {
    /// Fragments in the order they go into the file.
    pub fn fragments(&self) -> [&str; 2] {
        [&self.declaration, &self.literal]
    }
}

pub fn generate(dataset: &Dataset) -> Result<Output, ConvertError> {
    let declaration = interface::render(dataset);
    let literal = literal::render(dataset)?;

    debug!(
        "Generated {} bytes of declaration and {} bytes of literal",
        declaration.len(),
        literal.len()
    );

    Ok(Output {
        declaration,
        literal,
    })
}
