use crate::codec::{self, DecodingError, EncodingError, Format};
use crate::models::TypeHolderExample;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Re-encode a `TypeHolderExample` payload from one wire format to another
pub fn convert(payload: &str, from: Format, to: Format) -> Result<String, ConvertError> {
    let record: TypeHolderExample = codec::decode(payload, from)?;
    Ok(codec::encode(&record, to)?)
}
