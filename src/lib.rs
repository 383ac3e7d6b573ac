// Cybertron: comment moderation console
//
// This is the library root. Each module corresponds to one stage of the
// moderation flow: translate, sanitize, classify, record, display.

pub mod analysis;
pub mod config;
pub mod console;
pub mod moderation;
pub mod output;
pub mod sentiment;
pub mod session;
pub mod translate;
