mod section;
mod video;

pub use section::Section;
pub use video::*;
