mod description;
mod parse_utils;

pub use self::description::parse_scene;
