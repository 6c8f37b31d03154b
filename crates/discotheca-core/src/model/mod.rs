pub mod format;
pub mod release;
pub mod release_label;
pub mod release_video;
pub mod track;

pub use format::Format;
pub use release::Release;
pub use release_label::ReleaseLabel;
pub use release_video::ReleaseVideo;
pub use track::Track;
