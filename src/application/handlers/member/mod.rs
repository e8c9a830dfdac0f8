mod delete_member;
mod register_member;
mod update_member;

pub use delete_member::{DeleteMemberCommand, DeleteMemberHandler};
pub use register_member::{RegisterMemberCommand, RegisterMemberHandler, RegisterMemberResult};
pub use update_member::{UpdateMemberCommand, UpdateMemberHandler};
