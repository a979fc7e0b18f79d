/// UI building blocks
///
/// View-only code: every function here takes state references and
/// returns an `Element<Message>`. All mutation happens in the update
/// loop in main.rs.

pub mod editors;
pub mod overlay;
pub mod upload;
