pub mod interests;
pub mod lifestyle;
pub mod location;
pub mod profile;
pub mod register;
pub mod review;
pub mod role_select;
pub mod safety;
pub mod welcome;
