pub mod add;
pub mod check;
pub mod helper;
pub mod import;
pub mod init;
pub mod language;
pub mod missing;
pub mod remove;
pub mod rename;
pub mod sort;
pub mod unused;
