//! Command handlers
//!
//! Each handler builds a [`common::HandlerContext`], runs the access gate
//! the route requires, calls one workflow operation, and formats the
//! result. Business rules live in [`crate::workflow`], not here.

mod comment;
mod common;
mod customer;
mod init;
mod report;
mod ticket;
mod user;

pub use comment::{handle_comment_customer, handle_comment_list, handle_comment_staff};
pub use common::HandlerContext;
pub use customer::{handle_customer_list, handle_customer_register};
pub use init::handle_init;
pub use report::handle_report_closed;
pub use ticket::{
    handle_ticket_close, handle_ticket_create, handle_ticket_list, handle_ticket_previous,
    handle_ticket_show,
};
pub use user::{handle_user_list, handle_user_login, handle_user_me, handle_user_register};
