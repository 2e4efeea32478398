pub mod landmarks;
pub mod oracle;
pub mod gesture;
pub mod gate;
