//! CNF encodings of labelling-based semantics.

mod complete_encoder;
mod toggles;

pub use complete_encoder::encode_complete;
pub use complete_encoder::in_literal;
pub use complete_encoder::out_literal;
pub use complete_encoder::undec_literal;
pub use toggles::EncodingToggles;
