pub mod claims;
pub mod codec;
pub mod errors;
pub mod policy;

pub use claims::Claims;
pub use claims::TokenClass;
pub use codec::TokenCodec;
pub use errors::JwtError;
pub use errors::TokenRejection;
pub use policy::TokenPolicy;
