pub mod about;
pub mod contact;
pub mod experience;
pub mod heading;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod projects;
pub mod skills;
