mod external_token;
mod token_record;
mod user;

pub use external_token::ExternalToken;
pub use token_record::{TokenAuthority, TokenRecord};
pub use user::{CandidateUser, User};
