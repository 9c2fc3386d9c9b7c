// Photomark caption watermarking library

pub mod constants;
pub mod metadata;
pub mod watermark;
