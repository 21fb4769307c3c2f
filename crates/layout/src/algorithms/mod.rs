pub mod anchors;
pub mod breaking;
pub mod height;
