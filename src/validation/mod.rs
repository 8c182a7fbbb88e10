pub mod address;
pub mod checker;
pub mod date_of_birth;
pub mod name;
pub mod precheck;

pub use address::AddressChecker;
pub use checker::{field_pairs, fuzzy_severity, FieldChecker, FieldPair};
pub use date_of_birth::DateOfBirthChecker;
pub use name::NameChecker;
pub use precheck::PrecheckValidator;
