pub mod evidence;
pub mod handlers;
pub mod oracle;
