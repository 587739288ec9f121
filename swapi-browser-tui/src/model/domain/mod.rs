//! 领域模型
//!
//! 人物记录本身来自 swapi-browser-client，这里只放展示用的投影。

mod character_details;

pub use character_details::{CharacterDetails, DetailValue};
