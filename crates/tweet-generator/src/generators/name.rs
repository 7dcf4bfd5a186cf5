//! Person name and username generators.

use fake::faker::internet::en::Username;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Generate a full name.
pub fn generate_full_name<R: Rng>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

/// Generate a username without the leading `@`.
pub fn generate_username<R: Rng>(rng: &mut R) -> String {
    Username().fake_with_rng(rng)
}
