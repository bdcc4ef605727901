//! different utility modules used throughout the project
/// tiny module to set up combined terminal + file logging
pub mod logger;
/// tiny module to plot extracted curves into a png image
pub mod plots;
/// tiny module to save extracted segments into a csv file
pub mod segments_io;
