pub mod company;
pub mod keyword;
