//! Message parsing: MIME body extraction, quoted-printable decoding, and
//! quote-block segmentation.

pub mod mime;
pub mod qp;
pub mod quote;
